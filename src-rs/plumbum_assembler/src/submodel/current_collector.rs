use plumbum_expr::{Domain, Expr};
use plumbum_model::BoundaryValue;

use crate::{Electrode, FunctionParam, ModelConstructionError, Param, PartialModel, SubModel, names};

/// The applied current is spread uniformly over the current collectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCurrentCollector;

impl SubModel for UniformCurrentCollector {
    fn name(&self) -> &'static str {
        "uniform current collector"
    }

    fn fundamental(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let applied = applied_current_density(&mut model);
        model.add_output(names::CURRENT_COLLECTOR_CURRENT_DENSITY, applied)?;

        Ok(model)
    }

    fn coupled(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let voltage = add_local_voltage(&mut model)?;
        model.add_output(names::TERMINAL_VOLTAGE, voltage)?;

        Ok(model)
    }
}

/// Potentials of both current collectors, with the current density through
/// the cell set by the local voltage between them.
///
/// The negative collector is grounded at the negative tab and current
/// leaves through the positive tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct PotentialPair;

impl SubModel for PotentialPair {
    fn name(&self) -> &'static str {
        "potential pair"
    }

    fn fundamental(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let phi_cn = model.declare_variable(
            names::NEGATIVE_CURRENT_COLLECTOR_POTENTIAL,
            Domain::current_collector(),
        )?;
        let phi_cp = model.declare_variable(
            names::POSITIVE_CURRENT_COLLECTOR_POTENTIAL,
            Domain::current_collector(),
        )?;
        let i_cc = model.declare_variable(
            names::CURRENT_COLLECTOR_CURRENT_DENSITY,
            Domain::current_collector(),
        )?;

        model.add_output(names::NEGATIVE_CURRENT_COLLECTOR_POTENTIAL, phi_cn)?;
        model.add_output(names::POSITIVE_CURRENT_COLLECTOR_POTENTIAL, phi_cp.clone())?;
        model.add_output(names::CURRENT_COLLECTOR_CURRENT_DENSITY, i_cc)?;
        model.add_output(names::TERMINAL_VOLTAGE, phi_cp)?;

        Ok(model)
    }

    fn coupled(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        add_local_voltage(&mut model)?;

        Ok(model)
    }

    fn equations(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let phi_cn = model.output(names::NEGATIVE_CURRENT_COLLECTOR_POTENTIAL)?;
        let phi_cp = model.output(names::POSITIVE_CURRENT_COLLECTOR_POTENTIAL)?;
        let i_cc = model.output(names::CURRENT_COLLECTOR_CURRENT_DENSITY)?;
        let local_voltage = model.output(names::LOCAL_VOLTAGE)?;
        let applied = applied_current_density(&mut model);

        let negative_conductance = sheet_conductance(&mut model, Electrode::Negative);
        let positive_conductance = sheet_conductance(&mut model, Electrode::Positive);

        model.set_algebraic(
            names::NEGATIVE_CURRENT_COLLECTOR_POTENTIAL,
            phi_cn.clone().laplacian() - i_cc.clone() / negative_conductance,
        )?;
        model.set_boundary_conditions(
            names::NEGATIVE_CURRENT_COLLECTOR_POTENTIAL,
            BoundaryValue::dirichlet(Expr::scalar(0.0)),
            BoundaryValue::neumann(Expr::scalar(0.0)),
        )?;

        model.set_algebraic(
            names::POSITIVE_CURRENT_COLLECTOR_POTENTIAL,
            phi_cp.clone().laplacian() + i_cc / positive_conductance.clone(),
        )?;
        model.set_boundary_conditions(
            names::POSITIVE_CURRENT_COLLECTOR_POTENTIAL,
            BoundaryValue::neumann(Expr::scalar(0.0)),
            BoundaryValue::neumann(applied / positive_conductance),
        )?;

        model.set_algebraic(
            names::CURRENT_COLLECTOR_CURRENT_DENSITY,
            phi_cp - phi_cn - local_voltage,
        )?;

        Ok(model)
    }
}

fn applied_current_density(model: &mut PartialModel) -> Expr {
    model.function(FunctionParam::CurrentFunction, vec![Expr::time()])
}

/// `sigma l` of one current collector.
fn sheet_conductance(model: &mut PartialModel, electrode: Electrode) -> Expr {
    let sigma = model.param(Param::CurrentCollectorConductivity(electrode));
    let thickness = model.param(Param::CurrentCollectorThickness(electrode));
    sigma * thickness
}

/// Provides the local voltage, the difference of the surface potential
/// differences, and returns it.
fn add_local_voltage(model: &mut PartialModel) -> Result<Expr, ModelConstructionError> {
    let delta_phi_n = model.output(Electrode::Negative.surface_potential_difference())?;
    let delta_phi_p = model.output(Electrode::Positive.surface_potential_difference())?;
    let voltage = delta_phi_p - delta_phi_n;

    model.add_output(names::LOCAL_VOLTAGE, voltage.clone())?;

    Ok(voltage)
}
