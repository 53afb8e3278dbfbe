//! Interfacial current at the electrode/electrolyte interface.
//!
//! Without a surface form the current each electrode draws is fixed by the
//! current collector, and the surface potential difference follows from
//! inverting Butler-Volmer kinetics. With a surface form the surface
//! potential difference is an unknown, and charge conservation at each
//! electrode becomes either a double-layer ODE or an algebraic residual.

use plumbum_expr::{Domain, Expr};

use crate::{
    Electrode, FunctionParam, ModelConstructionError, Param, PartialModel, Reaction, SubModel,
    names, submodel::electrolyte::reaction_sum,
};

const MAIN_REACTION: &str = "main";

/// Explicit interfacial current, with the surface potential difference
/// recovered from inverse Butler-Volmer kinetics.
#[derive(Debug, Clone, Copy, Default)]
pub struct InverseButlerVolmer;

impl SubModel for InverseButlerVolmer {
    fn name(&self) -> &'static str {
        "inverse Butler-Volmer"
    }

    fn coupled(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let i_cc = model.output(names::CURRENT_COLLECTOR_CURRENT_DENSITY)?;

        for electrode in Electrode::ALL {
            let j = electrode_current_density(&mut model, electrode, i_cc.clone());
            let j0 = exchange_current_density(&mut model, electrode)?;
            let ocp = open_circuit_potential(&mut model, electrode)?;
            let eta = Expr::scalar(2.0) * (j.clone() / (Expr::scalar(2.0) * j0)).arcsinh();

            model.add_output(electrode.surface_potential_difference(), ocp + eta.clone())?;
            register_main_reaction(&mut model, electrode, j, eta)?;
        }

        Ok(model)
    }
}

/// The surface potential difference obeys a double-layer ODE.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifferentialSurfaceForm;

impl SubModel for DifferentialSurfaceForm {
    fn name(&self) -> &'static str {
        "differential surface form"
    }

    fn fundamental(&self, model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        declare_surface_potential_differences(model)
    }

    fn coupled(&self, model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        register_butler_volmer_reactions(model)
    }

    fn equations(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        for electrode in Electrode::ALL {
            let imbalance = charge_imbalance(&mut model, electrode)?;
            let capacity = model.param(Param::DoubleLayerCapacity(electrode));
            let name = electrode.surface_potential_difference();

            model.set_rhs(name, imbalance / capacity)?;

            let initial = model.param(Param::InitialSurfacePotentialDifference(electrode));
            model.set_initial_condition(name, initial)?;
        }

        Ok(model)
    }
}

/// The surface potential difference is fixed by charge conservation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlgebraicSurfaceForm;

impl SubModel for AlgebraicSurfaceForm {
    fn name(&self) -> &'static str {
        "algebraic surface form"
    }

    fn fundamental(&self, model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        declare_surface_potential_differences(model)
    }

    fn coupled(&self, model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        register_butler_volmer_reactions(model)
    }

    fn equations(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        for electrode in Electrode::ALL {
            let imbalance = charge_imbalance(&mut model, electrode)?;
            model.set_algebraic(electrode.surface_potential_difference(), imbalance)?;
        }

        Ok(model)
    }
}

fn declare_surface_potential_differences(
    mut model: PartialModel,
) -> Result<PartialModel, ModelConstructionError> {
    for electrode in Electrode::ALL {
        let name = electrode.surface_potential_difference();
        let delta_phi = model.declare_variable(name, Domain::current_collector())?;
        model.add_output(name, delta_phi)?;
    }

    Ok(model)
}

fn register_butler_volmer_reactions(
    mut model: PartialModel,
) -> Result<PartialModel, ModelConstructionError> {
    for electrode in Electrode::ALL {
        let delta_phi = model.output(electrode.surface_potential_difference())?;
        let j0 = exchange_current_density(&mut model, electrode)?;
        let ocp = open_circuit_potential(&mut model, electrode)?;

        let eta = delta_phi - ocp;
        let j = Expr::scalar(2.0) * j0 * (eta.clone() / Expr::scalar(2.0)).sinh();

        register_main_reaction(&mut model, electrode, j, eta)?;
    }

    Ok(model)
}

/// Current delivered by the current collector minus the current consumed by
/// every reaction at `electrode`.
fn charge_imbalance(
    model: &mut PartialModel,
    electrode: Electrode,
) -> Result<Expr, ModelConstructionError> {
    let i_cc = model.output(names::CURRENT_COLLECTOR_CURRENT_DENSITY)?;
    let delivered = electrode_current_density(model, electrode, i_cc);
    let consumed = reaction_sum(model, electrode, |reaction| {
        reaction.interfacial_current().clone()
    });

    Ok(delivered - consumed)
}

fn register_main_reaction(
    model: &mut PartialModel,
    electrode: Electrode,
    j: Expr,
    eta: Expr,
) -> Result<(), ModelConstructionError> {
    model.add_output(electrode.interfacial_current_density(), j.clone())?;
    model.add_output(electrode.reaction_overpotential(), eta.clone())?;

    let stoichiometry = model.param(Param::CationStoichiometry(electrode));
    let porosity_change = model.param(Param::VolumetricChange(electrode));
    model.add_reaction(Reaction::new(
        MAIN_REACTION,
        electrode,
        j,
        eta,
        stoichiometry,
        porosity_change,
    ));

    Ok(())
}

/// `± i_cc / l`, the current density an electrode must carry on average.
pub fn electrode_current_density(
    model: &mut PartialModel,
    electrode: Electrode,
    i_cc: Expr,
) -> Expr {
    let l = model.param(Param::Thickness(electrode));
    Expr::scalar(electrode.current_sign()) * i_cc / l
}

fn exchange_current_density(
    model: &mut PartialModel,
    electrode: Electrode,
) -> Result<Expr, ModelConstructionError> {
    let c_e = model.output(names::ELECTROLYTE_CONCENTRATION)?;
    let temperature = model.output(names::CELL_TEMPERATURE)?;
    Ok(model.function(
        FunctionParam::ExchangeCurrentDensity(electrode),
        vec![c_e, temperature],
    ))
}

fn open_circuit_potential(
    model: &mut PartialModel,
    electrode: Electrode,
) -> Result<Expr, ModelConstructionError> {
    let c_e = model.output(names::ELECTROLYTE_CONCENTRATION)?;
    let temperature = model.output(names::CELL_TEMPERATURE)?;
    Ok(model.function(
        FunctionParam::OpenCircuitPotential(electrode),
        vec![c_e, temperature],
    ))
}
