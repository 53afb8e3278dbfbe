use indexmap::{IndexMap, IndexSet};
use plumbum_expr::{Domain, Expr, VariableName};
use plumbum_model::Model;
use plumbum_shared::Settings;

use crate::{Diagnostic, ModelError, Rule, SymbolLocation};

/// Checks that `model` is well posed.
///
/// Rules run in the order of [`Rule::ALL`]; the output variable rule only
/// runs when `settings` has debug mode on. The model is never modified.
///
/// # Errors
///
/// Returns a [`ModelError`] describing the first violation found.
pub fn check(model: &Model, settings: &Settings) -> Result<(), ModelError> {
    for rule in Rule::ALL {
        if rule.is_debug_only() && !settings.debug_mode() {
            continue;
        }

        tracing::debug!(rule = rule.number(), "checking {rule}");

        let result = match rule {
            Rule::UniqueDefinitions => check_unique_definitions(model),
            Rule::DeclaredSymbols => check_declared_symbols(model),
            Rule::BoundaryConditions => check_boundary_conditions(model),
            Rule::InitialConditions => check_initial_conditions(model),
            Rule::EquationCount => check_equation_count(model),
            Rule::OutputVariables => check_output_variables(model),
        };

        if let Err(diagnostic) = result {
            tracing::debug!(rule = rule.number(), %diagnostic, "rule violated");
            return Err(ModelError::new(diagnostic));
        }
    }

    tracing::info!(
        variables = model.variables().len(),
        equations = model.equations().len(),
        "model is well posed"
    );

    Ok(())
}

fn check_unique_definitions(model: &Model) -> Result<(), Diagnostic> {
    for variable in model.variables().keys() {
        match model.equations_for(variable).count() {
            0 => {
                return Err(Diagnostic::UndefinedVariable {
                    variable: variable.clone(),
                });
            }
            1 => {}
            count => {
                return Err(Diagnostic::MultipleDefinitions {
                    variable: variable.clone(),
                    count,
                });
            }
        }
    }

    if let Some(equation) = model
        .equations()
        .iter()
        .find(|equation| model.variable(equation.variable()).is_none())
    {
        return Err(Diagnostic::UndeclaredDefinition {
            variable: equation.variable().clone(),
        });
    }

    Ok(())
}

fn check_declared_symbols(model: &Model) -> Result<(), Diagnostic> {
    for equation in model.equations() {
        let location = || SymbolLocation::Equation(equation.variable().clone());
        check_symbols(model, equation.expr(), location)?;
    }

    for condition in model.boundary_conditions() {
        let location = || SymbolLocation::BoundaryCondition(condition.variable().clone());
        for expr in condition.exprs() {
            check_symbols(model, expr, location)?;
        }
    }

    for condition in model.initial_conditions() {
        let location = || SymbolLocation::InitialCondition(condition.variable().clone());
        check_symbols(model, condition.expr(), location)?;
    }

    Ok(())
}

fn check_boundary_conditions(model: &Model) -> Result<(), Diagnostic> {
    let spatial: IndexSet<VariableName> = model
        .equations()
        .iter()
        .flat_map(|equation| equation.expr().spatial_variables())
        .collect();

    for variable in &spatial {
        match model.boundary_conditions_for(variable).count() {
            0 => {
                return Err(Diagnostic::MissingBoundaryConditions {
                    variable: variable.clone(),
                });
            }
            1 => {}
            count => {
                return Err(Diagnostic::MultipleBoundaryConditions {
                    variable: variable.clone(),
                    count,
                });
            }
        }
    }

    if let Some(condition) = model
        .boundary_conditions()
        .iter()
        .find(|condition| !spatial.contains(condition.variable()))
    {
        return Err(Diagnostic::UnexpectedBoundaryConditions {
            variable: condition.variable().clone(),
        });
    }

    Ok(())
}

fn check_initial_conditions(model: &Model) -> Result<(), Diagnostic> {
    for equation in model.equations() {
        let variable = equation.variable();
        let count = model.initial_conditions_for(variable).count();

        match (equation.kind().is_differential(), count) {
            (true, 0) => {
                return Err(Diagnostic::MissingInitialCondition {
                    variable: variable.clone(),
                });
            }
            (true, 1) | (false, 0) => {}
            (true, count) => {
                return Err(Diagnostic::MultipleInitialConditions {
                    variable: variable.clone(),
                    count,
                });
            }
            (false, _) => {
                return Err(Diagnostic::UnexpectedInitialCondition {
                    variable: variable.clone(),
                });
            }
        }
    }

    // conditions for variables nothing defines
    if let Some(condition) = model
        .initial_conditions()
        .iter()
        .find(|condition| model.equation_for(condition.variable()).is_none())
    {
        return Err(Diagnostic::UnexpectedInitialCondition {
            variable: condition.variable().clone(),
        });
    }

    Ok(())
}

fn check_equation_count(model: &Model) -> Result<(), Diagnostic> {
    let mut counts: IndexMap<&Domain, (usize, usize)> = IndexMap::new();

    for variable in model.variables().values() {
        counts.entry(variable.domain()).or_default().0 += 1;
    }
    for equation in model.equations() {
        counts.entry(equation.domain()).or_default().1 += 1;
    }

    match counts
        .into_iter()
        .find(|(_, (unknowns, equations))| unknowns != equations)
    {
        Some((domain, (unknowns, equations))) => Err(Diagnostic::UnbalancedDomain {
            domain: domain.clone(),
            unknowns,
            equations,
        }),
        None => Ok(()),
    }
}

fn check_output_variables(model: &Model) -> Result<(), Diagnostic> {
    for (name, expr) in model.outputs() {
        check_symbols(model, expr, || SymbolLocation::Output(name.clone()))?;
    }

    Ok(())
}

fn check_symbols(
    model: &Model,
    expr: &Expr,
    location: impl Fn() -> SymbolLocation,
) -> Result<(), Diagnostic> {
    match expr
        .dependencies()
        .into_iter()
        .find(|symbol| !model.is_declared(symbol))
    {
        Some(symbol) => Err(Diagnostic::DanglingSymbol {
            location: location(),
            symbol,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use plumbum_expr::{ParameterName, Symbol};
    use plumbum_model::{
        BoundaryCondition, BoundaryValue, Equation, EquationKind, InitialCondition, ModelParts,
        Parameter, Variable,
    };
    use plumbum_options::OptionSet;

    use super::*;

    /// A diffusing concentration `c` on the electrolyte, held in place by an
    /// algebraic potential `phi` on the current collector.
    fn well_posed_parts() -> ModelParts {
        let c = VariableName::new("c");
        let phi = VariableName::new("phi");

        let mut variables = IndexMap::new();
        variables.insert(c.clone(), Variable::new(c.clone(), Domain::electrolyte()));
        variables.insert(
            phi.clone(),
            Variable::new(phi.clone(), Domain::current_collector()),
        );

        let mut parameters = IndexMap::new();
        for name in ["D", "c0"] {
            let name = ParameterName::new(name);
            parameters.insert(name.clone(), Parameter::new(name, String::new()));
        }

        let mut outputs = IndexMap::new();
        outputs.insert("Voltage".to_string(), Expr::variable("phi"));

        ModelParts {
            options: OptionSet::default(),
            variables,
            parameters,
            equations: vec![
                Equation::new(
                    c.clone(),
                    EquationKind::Pde,
                    Domain::electrolyte(),
                    Expr::parameter("D") * Expr::variable("c").laplacian(),
                ),
                Equation::new(
                    phi,
                    EquationKind::Algebraic,
                    Domain::current_collector(),
                    Expr::variable("phi") - Expr::scalar(1.0),
                ),
            ],
            boundary_conditions: vec![BoundaryCondition::new(
                c.clone(),
                BoundaryValue::neumann(Expr::scalar(0.0)),
                BoundaryValue::dirichlet(Expr::parameter("c0")),
            )],
            initial_conditions: vec![InitialCondition::new(c, Expr::parameter("c0"))],
            outputs,
        }
    }

    fn check_parts(parts: ModelParts, settings: &Settings) -> Result<(), ModelError> {
        check(&Model::from_parts(parts), settings)
    }

    #[test]
    fn well_posed_model_passes() {
        let result = check_parts(well_posed_parts(), &Settings::debug());

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn undefined_variable_violates_rule_1() {
        // create a model with a variable missing its equation
        let mut parts = well_posed_parts();
        parts.equations.retain(|equation| equation.variable().as_str() != "phi");

        // check the model
        let error = check_parts(parts, &Settings::default()).expect_err("undefined");

        // check the errors
        assert_eq!(error.rule(), Rule::UniqueDefinitions);
        assert_eq!(
            error.diagnostic(),
            &Diagnostic::UndefinedVariable {
                variable: VariableName::new("phi")
            }
        );
    }

    #[test]
    fn variable_defined_twice_violates_rule_1() {
        let mut parts = well_posed_parts();
        let duplicate = parts.equations[1].clone();
        parts.equations.push(duplicate);

        let error = check_parts(parts, &Settings::default()).expect_err("defined twice");

        assert_eq!(
            error.diagnostic(),
            &Diagnostic::MultipleDefinitions {
                variable: VariableName::new("phi"),
                count: 2
            }
        );
    }

    #[test]
    fn equation_for_undeclared_variable_violates_rule_1() {
        let mut parts = well_posed_parts();
        parts.equations.push(Equation::new(
            VariableName::new("T"),
            EquationKind::Ode,
            Domain::current_collector(),
            Expr::scalar(0.0),
        ));

        let error = check_parts(parts, &Settings::default()).expect_err("undeclared");

        assert_eq!(
            error.diagnostic(),
            &Diagnostic::UndeclaredDefinition {
                variable: VariableName::new("T")
            }
        );
    }

    #[test]
    fn dangling_parameter_violates_rule_2() {
        let mut parts = well_posed_parts();
        parts.parameters.shift_remove(&ParameterName::new("D"));

        let error = check_parts(parts, &Settings::default()).expect_err("dangling");

        assert_eq!(error.rule(), Rule::DeclaredSymbols);
        assert_eq!(
            error.diagnostic(),
            &Diagnostic::DanglingSymbol {
                location: SymbolLocation::Equation(VariableName::new("c")),
                symbol: Symbol::parameter("D"),
            }
        );
    }

    #[test]
    fn dangling_symbol_in_initial_condition_violates_rule_2() {
        let mut parts = well_posed_parts();
        parts.initial_conditions =
            vec![InitialCondition::new(VariableName::new("c"), Expr::parameter("c_init"))];

        let error = check_parts(parts, &Settings::default()).expect_err("dangling");

        assert!(matches!(
            error.diagnostic(),
            Diagnostic::DanglingSymbol {
                location: SymbolLocation::InitialCondition(_),
                ..
            }
        ));
    }

    #[test]
    fn removed_boundary_condition_violates_rule_3() {
        // create a model and remove its boundary condition
        let mut parts = well_posed_parts();
        parts.boundary_conditions.clear();

        // check the model
        let error = check_parts(parts, &Settings::default()).expect_err("missing bc");

        // check the errors
        assert_eq!(error.rule(), Rule::BoundaryConditions);
        assert_eq!(error.rule().number(), 3);
        assert_eq!(error.diagnostic().variable(), Some(&VariableName::new("c")));
    }

    #[test]
    fn scaled_laplacian_operand_without_boundary_conditions_violates_rule_3() {
        // create a model whose diffusion coefficient sits inside the laplacian
        let mut parts = well_posed_parts();
        parts.equations[0] = Equation::new(
            VariableName::new("c"),
            EquationKind::Pde,
            Domain::electrolyte(),
            (Expr::parameter("D") * Expr::variable("c")).laplacian(),
        );
        parts.boundary_conditions.clear();

        // check the model
        let error = check_parts(parts, &Settings::default()).expect_err("missing bc");

        // check the errors
        assert_eq!(error.rule(), Rule::BoundaryConditions);
        assert_eq!(
            error.diagnostic(),
            &Diagnostic::MissingBoundaryConditions {
                variable: VariableName::new("c")
            }
        );
    }

    #[test]
    fn divergence_of_a_variable_without_boundary_conditions_violates_rule_3() {
        let mut parts = well_posed_parts();
        parts.equations[0] = Equation::new(
            VariableName::new("c"),
            EquationKind::Pde,
            Domain::electrolyte(),
            -Expr::variable("c").div(),
        );
        parts.boundary_conditions.clear();

        let error = check_parts(parts, &Settings::default()).expect_err("missing bc");

        assert_eq!(error.rule(), Rule::BoundaryConditions);
    }

    #[test]
    fn boundary_conditions_on_non_spatial_variable_violate_rule_3() {
        let mut parts = well_posed_parts();
        parts.boundary_conditions.push(BoundaryCondition::new(
            VariableName::new("phi"),
            BoundaryValue::neumann(Expr::scalar(0.0)),
            BoundaryValue::neumann(Expr::scalar(0.0)),
        ));

        let error = check_parts(parts, &Settings::default()).expect_err("unexpected bc");

        assert_eq!(
            error.diagnostic(),
            &Diagnostic::UnexpectedBoundaryConditions {
                variable: VariableName::new("phi")
            }
        );
    }

    #[test]
    fn missing_initial_condition_violates_rule_4() {
        let mut parts = well_posed_parts();
        parts.initial_conditions.clear();

        let error = check_parts(parts, &Settings::default()).expect_err("missing ic");

        assert_eq!(error.rule(), Rule::InitialConditions);
        assert_eq!(
            error.diagnostic(),
            &Diagnostic::MissingInitialCondition {
                variable: VariableName::new("c")
            }
        );
    }

    #[test]
    fn algebraic_initial_condition_violates_rule_4() {
        let mut parts = well_posed_parts();
        parts
            .initial_conditions
            .push(InitialCondition::new(VariableName::new("phi"), Expr::scalar(1.0)));

        let error = check_parts(parts, &Settings::default()).expect_err("unexpected ic");

        assert_eq!(
            error.diagnostic(),
            &Diagnostic::UnexpectedInitialCondition {
                variable: VariableName::new("phi")
            }
        );
    }

    #[test]
    fn equation_on_the_wrong_domain_violates_rule_5() {
        // create a model whose potential equation holds on the electrolyte
        let mut parts = well_posed_parts();
        let phi = parts.equations.remove(1);
        parts.equations.push(Equation::new(
            phi.variable().clone(),
            phi.kind(),
            Domain::electrolyte(),
            phi.expr().clone(),
        ));

        // check the model
        let error = check_parts(parts, &Settings::default()).expect_err("unbalanced");

        // check the errors
        assert_eq!(error.rule(), Rule::EquationCount);
        assert_eq!(
            error.diagnostic(),
            &Diagnostic::UnbalancedDomain {
                domain: Domain::electrolyte(),
                unknowns: 1,
                equations: 2,
            }
        );
    }

    #[test]
    fn dangling_output_only_fails_in_debug_mode() {
        let mut parts = well_posed_parts();
        parts
            .outputs
            .insert("Broken".to_string(), Expr::variable("missing"));

        let release = check_parts(parts.clone(), &Settings::default());
        let debug = check_parts(parts, &Settings::debug());

        assert_eq!(release, Ok(()));
        let error = debug.expect_err("dangling output");
        assert_eq!(error.rule(), Rule::OutputVariables);
        assert_eq!(error.rule().number(), 6);
    }

    #[test]
    fn rules_run_in_order() {
        // break rules 3 and 4 at once
        let mut parts = well_posed_parts();
        parts.boundary_conditions.clear();
        parts.initial_conditions.clear();

        let error = check_parts(parts, &Settings::default()).expect_err("broken");

        assert_eq!(error.rule(), Rule::BoundaryConditions);
    }
}
