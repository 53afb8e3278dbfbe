use plumbum_expr::{Domain, Expr};

use crate::{
    Electrode, ModelConstructionError, Param, PartialModel, SubModel, names,
    submodel::electrolyte::reaction_sum,
};

/// The cell stays at ambient temperature.
#[derive(Debug, Clone, Copy, Default)]
pub struct Isothermal;

impl SubModel for Isothermal {
    fn name(&self) -> &'static str {
        "isothermal"
    }

    fn fundamental(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let ambient = model.param(Param::AmbientTemperature);
        model.add_output(names::CELL_TEMPERATURE, ambient)?;

        Ok(model)
    }
}

/// A single cell temperature heated by reactions and cooled to ambient.
#[derive(Debug, Clone, Copy, Default)]
pub struct LumpedThermal;

impl SubModel for LumpedThermal {
    fn name(&self) -> &'static str {
        "lumped thermal"
    }

    fn fundamental(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let temperature =
            model.declare_variable(names::CELL_TEMPERATURE, Domain::current_collector())?;
        model.add_output(names::CELL_TEMPERATURE, temperature)?;

        Ok(model)
    }

    fn equations(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let temperature = model.output(names::CELL_TEMPERATURE)?;

        let mut heating = Vec::new();
        for electrode in Electrode::ALL {
            let l = model.param(Param::Thickness(electrode));
            let reversible = reaction_sum(&model, electrode, |reaction| {
                reaction.interfacial_current().clone() * reaction.overpotential().clone()
            });
            heating.push(l * reversible);
        }

        let h = model.param(Param::HeatTransferCoefficient);
        let ambient = model.param(Param::AmbientTemperature);
        let heat_capacity = model.param(Param::VolumetricHeatCapacity);
        let cooling = h * (temperature - ambient);

        model.set_rhs(
            names::CELL_TEMPERATURE,
            (Expr::sum(heating) - cooling) / heat_capacity,
        )?;

        let initial = model.param(Param::InitialTemperature);
        model.set_initial_condition(names::CELL_TEMPERATURE, initial)?;

        Ok(model)
    }
}
