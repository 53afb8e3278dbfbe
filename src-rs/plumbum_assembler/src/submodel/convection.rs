use plumbum_expr::{Domain, Expr};
use plumbum_model::BoundaryValue;

use crate::{
    Electrode, ModelConstructionError, Param, PartialModel, SubModel, names,
    submodel::{electrolyte::reaction_sum, porosity::electrolyte_volume},
};

/// Volume-averaged velocity through the cell, driven by the change in solid
/// volume as the electrodes react.
///
/// The transverse acceleration in the separator is provided by whichever
/// transverse model is selected alongside.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThroughCellConvection;

impl SubModel for ThroughCellConvection {
    fn name(&self) -> &'static str {
        "through-cell convection"
    }

    fn equations(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        for electrode in Electrode::ALL {
            let l = model.param(Param::Thickness(electrode));
            let change = reaction_sum(&model, electrode, |reaction| {
                reaction.porosity_change().clone() * reaction.interfacial_current().clone()
            });
            model.add_output(electrode.volume_averaged_velocity(), -(l * change))?;
        }

        let c_e = model.output(names::ELECTROLYTE_CONCENTRATION)?;
        let acceleration = model.output(names::TRANSVERSE_ACCELERATION)?;
        let l_s = model.param(Param::SeparatorThickness);
        let volume = electrolyte_volume(&mut model)?;
        model.add_source(
            names::ELECTROLYTE_CONCENTRATION,
            -(l_s * c_e * acceleration) / volume,
        )?;

        Ok(model)
    }
}

/// Transverse acceleration uniform over the current collector.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformTransverseConvection;

impl SubModel for UniformTransverseConvection {
    fn name(&self) -> &'static str {
        "uniform transverse convection"
    }

    fn coupled(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let i_cc = model.output(names::CURRENT_COLLECTOR_CURRENT_DENSITY)?;
        let acceleration = volumetric_acceleration(&mut model, i_cc);
        model.add_output(names::TRANSVERSE_ACCELERATION, acceleration)?;

        Ok(model)
    }
}

/// Separator pressure solved over the current collector; the transverse
/// acceleration is its laplacian.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullTransverseConvection;

impl SubModel for FullTransverseConvection {
    fn name(&self) -> &'static str {
        "full transverse convection"
    }

    fn fundamental(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let p_s = model.declare_variable(names::SEPARATOR_PRESSURE, Domain::current_collector())?;
        model.add_output(names::SEPARATOR_PRESSURE, p_s)?;

        Ok(model)
    }

    fn coupled(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let p_s = model.output(names::SEPARATOR_PRESSURE)?;
        model.add_output(names::TRANSVERSE_ACCELERATION, -p_s.laplacian())?;

        Ok(model)
    }

    fn equations(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let p_s = model.output(names::SEPARATOR_PRESSURE)?;
        let i_cc = model.output(names::CURRENT_COLLECTOR_CURRENT_DENSITY)?;
        let acceleration = volumetric_acceleration(&mut model, i_cc);

        model.set_algebraic(names::SEPARATOR_PRESSURE, p_s.laplacian() + acceleration)?;
        model.set_boundary_conditions(
            names::SEPARATOR_PRESSURE,
            BoundaryValue::dirichlet(Expr::scalar(0.0)),
            BoundaryValue::neumann(Expr::scalar(0.0)),
        )?;

        Ok(model)
    }
}

/// `(beta_n + beta_p) i_cc / l_s`, the acceleration needed to feed the
/// volume change of both electrodes through the separator.
fn volumetric_acceleration(model: &mut PartialModel, i_cc: Expr) -> Expr {
    let beta_n = model.param(Param::VolumetricChange(Electrode::Negative));
    let beta_p = model.param(Param::VolumetricChange(Electrode::Positive));
    let l_s = model.param(Param::SeparatorThickness);

    (beta_n + beta_p) * i_cc / l_s
}
