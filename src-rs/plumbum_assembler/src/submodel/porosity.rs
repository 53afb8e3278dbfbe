use plumbum_expr::{Domain, Expr};

use crate::{
    Electrode, ModelConstructionError, Param, PartialModel, SubModel, names,
    submodel::electrolyte::reaction_sum,
};

/// X-averaged electrode porosities, changing as the solid reacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingOrderPorosity;

impl SubModel for LeadingOrderPorosity {
    fn name(&self) -> &'static str {
        "leading-order porosity"
    }

    fn fundamental(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        for electrode in Electrode::ALL {
            let eps = model.declare_variable(electrode.porosity(), Domain::current_collector())?;
            model.add_output(electrode.porosity(), eps)?;
        }

        let eps_s = model.param(Param::SeparatorPorosity);
        model.add_output(names::SEPARATOR_POROSITY, eps_s)?;

        Ok(model)
    }

    fn equations(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        for electrode in Electrode::ALL {
            let change = reaction_sum(&model, electrode, |reaction| {
                reaction.porosity_change().clone() * reaction.interfacial_current().clone()
            });
            model.set_rhs(electrode.porosity(), -change)?;

            let initial = model.param(Param::InitialPorosity(electrode));
            model.set_initial_condition(electrode.porosity(), initial)?;
        }

        Ok(model)
    }
}

/// Returns `l_n eps_n + l_s eps_s + l_p eps_p`, the electrolyte volume per
/// unit area of current collector.
pub fn electrolyte_volume(model: &mut PartialModel) -> Result<Expr, ModelConstructionError> {
    let eps_n = model.output(Electrode::Negative.porosity())?;
    let eps_s = model.output(names::SEPARATOR_POROSITY)?;
    let eps_p = model.output(Electrode::Positive.porosity())?;

    let l_n = model.param(Param::Thickness(Electrode::Negative));
    let l_s = model.param(Param::SeparatorThickness);
    let l_p = model.param(Param::Thickness(Electrode::Positive));

    Ok(l_n * eps_n + l_s * eps_s + l_p * eps_p)
}
