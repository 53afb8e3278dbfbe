use plumbum_model::Model;
use plumbum_options::OptionSet;
use plumbum_shared::Settings;

use crate::{BaseModel, ModelConstructionError, PartialModel, Phase, SubModel, registry};

/// Assembles the model selected by `base` and `options`.
///
/// # Errors
///
/// Returns an error if two selected sub-models collide.
pub fn assemble(
    base: BaseModel,
    options: &OptionSet,
    settings: &Settings,
) -> Result<Model, ModelConstructionError> {
    let submodels = registry::select(base, options);

    tracing::debug!(
        base = %base,
        submodels = submodels.len(),
        debug_mode = settings.debug_mode(),
        "assembling model"
    );

    compose(&submodels, options, settings)
}

/// Composes the given sub-models, in the given order, into a model.
///
/// Every sub-model runs its fundamental phase, then every sub-model runs its
/// coupled phase, then every sub-model writes its equations.
///
/// # Errors
///
/// Returns the first error raised by a sub-model, or by summing source terms
/// into their equations.
pub fn compose(
    submodels: &[Box<dyn SubModel>],
    options: &OptionSet,
    settings: &Settings,
) -> Result<Model, ModelConstructionError> {
    let mut model = PartialModel::new(*settings);

    for phase in Phase::ALL {
        for submodel in submodels {
            tracing::debug!(submodel = submodel.name(), %phase, "merging sub-model");

            model.enter(submodel.name());
            model = phase.run(submodel.as_ref(), model)?;
        }
    }

    let model = model.finish(options.clone())?;

    tracing::debug!(
        variables = model.variables().len(),
        equations = model.equations().len(),
        parameters = model.parameters().len(),
        "assembled model"
    );

    Ok(model)
}

#[cfg(test)]
mod tests {
    use plumbum_expr::{Domain, Expr, VariableName};
    use plumbum_model::EquationKind;
    use plumbum_options::RawOptions;

    use super::*;
    use crate::{Electrode, names};

    fn assemble_with(base: BaseModel, raw: &RawOptions) -> Model {
        let options = OptionSet::new(raw).expect("valid options");
        assemble(base, &options, &Settings::default()).expect("assembled")
    }

    fn kind_of(model: &Model, variable: &str) -> Option<EquationKind> {
        model
            .equation_for(&VariableName::new(variable))
            .map(plumbum_model::Equation::kind)
    }

    #[derive(Debug)]
    struct Declares(&'static str);

    impl SubModel for Declares {
        fn name(&self) -> &'static str {
            self.0
        }

        fn fundamental(
            &self,
            mut model: PartialModel,
        ) -> Result<PartialModel, ModelConstructionError> {
            model.declare_variable("Electrode potential", Domain::current_collector())?;
            Ok(model)
        }
    }

    #[test]
    fn colliding_sub_models_are_rejected() {
        // create two sub-models claiming the same variable
        let first: Box<dyn SubModel> = Box::new(Declares("first"));
        let second: Box<dyn SubModel> = Box::new(Declares("second"));
        let submodels = vec![first, second];

        // compose them
        let error = compose(&submodels, &OptionSet::default(), &Settings::default())
            .expect_err("collision");

        // check the error
        assert_eq!(
            error,
            ModelConstructionError::duplicate_variable(
                VariableName::new("Electrode potential"),
                "first",
                "second"
            )
        );
        assert_eq!(error.subject(), "Electrode potential");
    }

    #[test]
    fn default_loqs_has_electrolyte_and_porosity_states() {
        let model = assemble_with(BaseModel::Loqs, &RawOptions::new());

        let declared: Vec<_> = model.variables().keys().map(VariableName::as_str).collect();
        assert_eq!(
            declared,
            vec![
                names::ELECTROLYTE_CONCENTRATION,
                Electrode::Negative.porosity(),
                Electrode::Positive.porosity(),
            ]
        );
        assert_eq!(
            kind_of(&model, names::ELECTROLYTE_CONCENTRATION),
            Some(EquationKind::Ode)
        );
        assert!(model.output(names::TERMINAL_VOLTAGE).is_some());
    }

    #[test]
    fn surface_forms_give_an_ode_or_a_residual() {
        let differential = assemble_with(
            BaseModel::Loqs,
            &RawOptions::new().with("surface form", "differential"),
        );
        let algebraic = assemble_with(
            BaseModel::Loqs,
            &RawOptions::new().with("surface form", "algebraic"),
        );

        for electrode in Electrode::ALL {
            let name = electrode.surface_potential_difference();
            assert_eq!(kind_of(&differential, name), Some(EquationKind::Ode));
            assert_eq!(kind_of(&algebraic, name), Some(EquationKind::Algebraic));
            assert_eq!(
                differential
                    .initial_conditions_for(&VariableName::new(name))
                    .count(),
                1
            );
            assert_eq!(
                algebraic
                    .initial_conditions_for(&VariableName::new(name))
                    .count(),
                0
            );
        }
    }

    #[test]
    fn oxygen_adds_a_species_without_removing_anything() {
        // create the models
        let without = assemble_with(
            BaseModel::Loqs,
            &RawOptions::new().with("surface form", "differential"),
        );
        let with = assemble_with(
            BaseModel::Loqs,
            &RawOptions::new()
                .with("surface form", "differential")
                .with("side reactions", ["oxygen"]),
        );

        // check every variable survives and oxygen is added
        for name in without.variables().keys() {
            assert!(with.variable(name).is_some(), "lost {name}");
        }
        assert_eq!(with.variables().len(), without.variables().len() + 1);
        assert_eq!(
            kind_of(&with, names::OXYGEN_CONCENTRATION),
            Some(EquationKind::Ode)
        );
    }

    #[test]
    fn composite_first_order_correction_is_a_pde_with_no_flux() {
        let model = assemble_with(BaseModel::Composite, &RawOptions::new());
        let name = VariableName::new(names::FIRST_ORDER_ELECTROLYTE_CONCENTRATION);

        let equation = model.equation_for(&name).expect("defined");
        assert_eq!(equation.kind(), EquationKind::Pde);
        assert_eq!(equation.domain(), &Domain::electrolyte());
        assert!(equation.expr().spatial_variables().contains(&name));

        let conditions: Vec<_> = model.boundary_conditions_for(&name).collect();
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].left().expr(), &Expr::scalar(0.0));
    }

    #[test]
    fn potential_pair_solves_both_collector_potentials() {
        let model = assemble_with(
            BaseModel::Loqs,
            &RawOptions::new()
                .with("current collector", "potential pair")
                .with("dimensionality", 1),
        );

        for name in [
            names::NEGATIVE_CURRENT_COLLECTOR_POTENTIAL,
            names::POSITIVE_CURRENT_COLLECTOR_POTENTIAL,
        ] {
            assert_eq!(kind_of(&model, name), Some(EquationKind::Algebraic));
            assert_eq!(
                model
                    .boundary_conditions_for(&VariableName::new(name))
                    .count(),
                1
            );
        }
        assert_eq!(
            kind_of(&model, names::CURRENT_COLLECTOR_CURRENT_DENSITY),
            Some(EquationKind::Algebraic)
        );
    }

    #[test]
    fn full_convection_turns_the_electrolyte_into_a_pde() {
        let model = assemble_with(
            BaseModel::Loqs,
            &RawOptions::new()
                .with("convection", [("transverse", "full")])
                .with("dimensionality", 1),
        );

        assert_eq!(
            kind_of(&model, names::ELECTROLYTE_CONCENTRATION),
            Some(EquationKind::Pde)
        );
        assert_eq!(
            kind_of(&model, names::SEPARATOR_PRESSURE),
            Some(EquationKind::Algebraic)
        );
    }

    #[test]
    fn assembly_is_deterministic() {
        let raw = RawOptions::new()
            .with("thermal", "lumped")
            .with("convection", true)
            .with("surface form", "algebraic")
            .with("side reactions", ["oxygen"]);

        let first = assemble_with(BaseModel::Composite, &raw);
        let second = assemble_with(BaseModel::Composite, &raw);

        assert_eq!(first, second);
    }

    #[test]
    fn every_parameter_used_is_declared() {
        let model = assemble_with(
            BaseModel::Composite,
            &RawOptions::new()
                .with("thermal", "lumped")
                .with("surface form", "differential")
                .with("side reactions", ["oxygen"]),
        );

        for equation in model.equations() {
            for symbol in equation.dependencies() {
                assert!(model.is_declared(&symbol), "{symbol} is not declared");
            }
        }
    }
}
