use plumbum_expr::{Domain, Expr};

use crate::{
    Electrode, FunctionParam, ModelConstructionError, Param, PartialModel, Reaction, SubModel,
    names, submodel::porosity::electrolyte_volume,
};

const OXYGEN_REACTION: &str = "oxygen";

/// Oxygen evolution at the positive electrode and recombination at the
/// negative electrode, with Tafel kinetics.
///
/// Needs the surface potential differences of both electrodes, so it only
/// composes with a surface form.
#[derive(Debug, Clone, Copy, Default)]
pub struct OxygenReaction;

impl SubModel for OxygenReaction {
    fn name(&self) -> &'static str {
        "oxygen reaction"
    }

    fn fundamental(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let c_ox =
            model.declare_variable(names::OXYGEN_CONCENTRATION, Domain::current_collector())?;
        model.add_output(names::OXYGEN_CONCENTRATION, c_ox)?;

        Ok(model)
    }

    fn coupled(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let c_e = model.output(names::ELECTROLYTE_CONCENTRATION)?;
        let c_ox = model.output(names::OXYGEN_CONCENTRATION)?;
        let temperature = model.output(names::CELL_TEMPERATURE)?;
        let ocp = model.param(Param::OxygenOpenCircuitPotential);

        for electrode in Electrode::ALL {
            let delta_phi = model.output(electrode.surface_potential_difference())?;
            let j0 = model.function(
                FunctionParam::OxygenExchangeCurrentDensity(electrode),
                vec![c_e.clone(), temperature.clone()],
            );
            let eta = delta_phi - ocp.clone();

            // evolution is limited by kinetics, recombination by the oxygen supply
            let j = match electrode {
                Electrode::Positive => j0 * (eta.clone() / Expr::scalar(2.0)).exp(),
                Electrode::Negative => {
                    -(j0 * c_ox.clone() * (-eta.clone() / Expr::scalar(2.0)).exp())
                }
            };

            model.add_output(electrode.oxygen_interfacial_current_density(), j.clone())?;

            let cation_stoichiometry = model.param(Param::OxygenCationStoichiometry);
            let oxygen_stoichiometry = model.param(Param::OxygenStoichiometry);
            let porosity_change = model.param(Param::OxygenVolumetricChange);
            model.add_reaction(
                Reaction::new(
                    OXYGEN_REACTION,
                    electrode,
                    j,
                    eta,
                    cation_stoichiometry,
                    porosity_change,
                )
                .with_oxygen_stoichiometry(oxygen_stoichiometry),
            );
        }

        Ok(model)
    }

    fn equations(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let mut terms = Vec::new();
        for electrode in Electrode::ALL {
            let l = model.param(Param::Thickness(electrode));
            let produced = Expr::sum(model.reactions_at(electrode).filter_map(|reaction| {
                reaction
                    .oxygen_stoichiometry()
                    .map(|s| s.clone() * reaction.interfacial_current().clone())
            }));
            terms.push(l * produced);
        }

        let volume = electrolyte_volume(&mut model)?;
        model.set_rhs(names::OXYGEN_CONCENTRATION, Expr::sum(terms) / volume)?;

        let initial = model.param(Param::InitialOxygenConcentration);
        model.set_initial_condition(names::OXYGEN_CONCENTRATION, initial)?;

        Ok(model)
    }
}
