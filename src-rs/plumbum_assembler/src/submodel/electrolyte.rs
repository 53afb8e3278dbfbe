use plumbum_expr::{Domain, Expr, Region};
use plumbum_model::BoundaryValue;

use crate::{
    Electrode, FunctionParam, ModelConstructionError, Param, PartialModel, Reaction, SubModel,
    names, submodel::porosity::electrolyte_volume,
};

/// X-averaged electrolyte concentration, fed by every registered reaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingOrderElectrolyte;

impl SubModel for LeadingOrderElectrolyte {
    fn name(&self) -> &'static str {
        "leading-order electrolyte"
    }

    fn fundamental(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let c_e =
            model.declare_variable(names::ELECTROLYTE_CONCENTRATION, Domain::current_collector())?;
        model.add_output(names::ELECTROLYTE_CONCENTRATION, c_e.clone())?;
        model.add_output(
            names::ELECTROLYTE_CONCENTRATION_PROFILE,
            c_e.broadcast(Domain::electrolyte()),
        )?;

        Ok(model)
    }

    fn equations(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let c_e = model.output(names::ELECTROLYTE_CONCENTRATION)?;

        let mut terms = Vec::new();
        for electrode in Electrode::ALL {
            let l = model.param(Param::Thickness(electrode));
            let exchange = reaction_sum(&model, electrode, |reaction| {
                (reaction.cation_stoichiometry().clone()
                    - reaction.porosity_change().clone() * c_e.clone())
                    * reaction.interfacial_current().clone()
            });
            terms.push(l * exchange);
        }

        let volume = electrolyte_volume(&mut model)?;
        model.set_rhs(names::ELECTROLYTE_CONCENTRATION, Expr::sum(terms) / volume)?;

        let initial = model.param(Param::InitialElectrolyteConcentration);
        model.set_initial_condition(names::ELECTROLYTE_CONCENTRATION, initial)?;

        Ok(model)
    }
}

/// First-order correction to the electrolyte concentration, resolved through
/// the cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOrderElectrolyte;

impl SubModel for FirstOrderElectrolyte {
    fn name(&self) -> &'static str {
        "first-order electrolyte"
    }

    fn fundamental(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let c_e_1 = model
            .declare_variable(names::FIRST_ORDER_ELECTROLYTE_CONCENTRATION, Domain::electrolyte())?;
        model.add_output(names::FIRST_ORDER_ELECTROLYTE_CONCENTRATION, c_e_1)?;

        Ok(model)
    }

    fn equations(&self, mut model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        let c_e = model.output(names::ELECTROLYTE_CONCENTRATION)?;
        let c_e_1 = model.output(names::FIRST_ORDER_ELECTROLYTE_CONCENTRATION)?;
        let eps_n = model.output(Electrode::Negative.porosity())?;
        let eps_s = model.output(names::SEPARATOR_POROSITY)?;
        let eps_p = model.output(Electrode::Positive.porosity())?;

        let porosity = Expr::concatenation(vec![
            eps_n.broadcast(Domain::region(Region::NegativeElectrode)),
            eps_s.broadcast(Domain::region(Region::Separator)),
            eps_p.broadcast(Domain::region(Region::PositiveElectrode)),
        ]);

        let negative_source = reaction_sum(&model, Electrode::Negative, |reaction| {
            reaction.cation_stoichiometry().clone() * reaction.interfacial_current().clone()
        });
        let positive_source = reaction_sum(&model, Electrode::Positive, |reaction| {
            reaction.cation_stoichiometry().clone() * reaction.interfacial_current().clone()
        });
        let source = Expr::concatenation(vec![
            negative_source.broadcast(Domain::region(Region::NegativeElectrode)),
            Expr::scalar(0.0).broadcast(Domain::region(Region::Separator)),
            positive_source.broadcast(Domain::region(Region::PositiveElectrode)),
        ]);

        let diffusivity = model.function(FunctionParam::ElectrolyteDiffusivity, vec![c_e]);
        let flux = diffusivity * c_e_1.grad();
        let rhs = (flux.div() + source) / porosity;

        let name = names::FIRST_ORDER_ELECTROLYTE_CONCENTRATION;
        model.set_rhs(name, rhs)?;
        model.set_boundary_conditions(
            name,
            BoundaryValue::neumann(Expr::scalar(0.0)),
            BoundaryValue::neumann(Expr::scalar(0.0)),
        )?;
        model.set_initial_condition(name, Expr::scalar(0.0))?;

        Ok(model)
    }
}

/// Sums `term` over the reactions registered at `electrode`.
pub fn reaction_sum(
    model: &PartialModel,
    electrode: Electrode,
    term: impl Fn(&Reaction) -> Expr,
) -> Expr {
    Expr::sum(model.reactions_at(electrode).map(term))
}
