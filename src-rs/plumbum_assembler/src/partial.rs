//! The model under construction.

use indexmap::IndexMap;
use plumbum_expr::{Domain, Expr, ParameterName, VariableName};
use plumbum_model::{
    BoundaryCondition, BoundaryValue, Equation, EquationKind, InitialCondition, Model, ModelParts,
    Parameter, Variable,
};
use plumbum_options::OptionSet;
use plumbum_shared::Settings;

use crate::{Electrode, FunctionParam, ModelConstructionError, Param, Reaction};

/// An item together with the sub-model that provided it.
#[derive(Debug, Clone, PartialEq)]
struct Provided<T> {
    provider: &'static str,
    value: T,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingEquation {
    expr: Expr,
    algebraic: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct Source {
    variable: VariableName,
    expr: Expr,
}

/// A model under construction.
///
/// Sub-models receive the partial model, add their contributions, and hand
/// it on. Every variable, equation, boundary condition, initial condition
/// and output remembers which sub-model provided it, and providing any of
/// them a second time is a [`ModelConstructionError`].
#[derive(Debug, Clone, PartialEq)]
pub struct PartialModel {
    settings: Settings,
    current: &'static str,
    variables: IndexMap<VariableName, Provided<Variable>>,
    parameters: IndexMap<ParameterName, Parameter>,
    equations: IndexMap<VariableName, Provided<PendingEquation>>,
    boundary_conditions: IndexMap<VariableName, Provided<BoundaryCondition>>,
    initial_conditions: IndexMap<VariableName, Provided<InitialCondition>>,
    outputs: IndexMap<String, Provided<Expr>>,
    sources: Vec<Provided<Source>>,
    reactions: Vec<Reaction>,
}

impl PartialModel {
    /// Creates an empty partial model.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            current: "<none>",
            variables: IndexMap::new(),
            parameters: IndexMap::new(),
            equations: IndexMap::new(),
            boundary_conditions: IndexMap::new(),
            initial_conditions: IndexMap::new(),
            outputs: IndexMap::new(),
            sources: Vec::new(),
            reactions: Vec::new(),
        }
    }

    /// Attributes every following contribution to `submodel`.
    pub(crate) const fn enter(&mut self, submodel: &'static str) {
        self.current = submodel;
    }

    /// Returns the name of the sub-model currently contributing.
    #[must_use]
    pub const fn current_submodel(&self) -> &'static str {
        self.current
    }

    /// Declares a variable living on `domain` and returns a reference to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable has already been declared.
    pub fn declare_variable(
        &mut self,
        name: &str,
        domain: Domain,
    ) -> Result<Expr, ModelConstructionError> {
        let name = VariableName::new(name);

        if let Some(existing) = self.variables.get(&name) {
            return Err(ModelConstructionError::duplicate_variable(
                name,
                existing.provider,
                self.current,
            ));
        }

        self.variables.insert(
            name.clone(),
            Provided {
                provider: self.current,
                value: Variable::new(name.clone(), domain),
            },
        );

        Ok(Expr::Variable(name))
    }

    /// Returns whether `name` has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.contains_key(&VariableName::new(name))
    }

    /// Returns a reference to a catalog parameter, declaring it if needed.
    pub fn param(&mut self, param: Param) -> Expr {
        self.parameter(param.name(), param.description())
    }

    /// Returns a catalog function parameter evaluated at `args`, declaring
    /// it if needed.
    pub fn function(&mut self, function: FunctionParam, args: Vec<Expr>) -> Expr {
        let name = self.declare_parameter(function.name(), function.description());
        Expr::FunctionParameter { name, args }
    }

    /// Returns a reference to a parameter outside the catalog, declaring it
    /// if needed.
    pub fn parameter(&mut self, name: impl AsRef<str>, description: &str) -> Expr {
        Expr::Parameter(self.declare_parameter(name, description))
    }

    fn declare_parameter(&mut self, name: impl AsRef<str>, description: &str) -> ParameterName {
        let name = ParameterName::new(name);
        self.parameters
            .entry(name.clone())
            .or_insert_with(|| Parameter::new(name.clone(), description.to_string()));
        name
    }

    /// Sets `d variable / dt = rhs`.
    ///
    /// The equation is a PDE if its right-hand side, once source terms are
    /// added, contains a spatial operator, and an ODE otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is undeclared or already defined.
    pub fn set_rhs(&mut self, variable: &str, rhs: Expr) -> Result<(), ModelConstructionError> {
        self.set_equation(variable, rhs, false)
    }

    /// Sets `0 = residual`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is undeclared or already defined.
    pub fn set_algebraic(
        &mut self,
        variable: &str,
        residual: Expr,
    ) -> Result<(), ModelConstructionError> {
        self.set_equation(variable, residual, true)
    }

    fn set_equation(
        &mut self,
        variable: &str,
        expr: Expr,
        algebraic: bool,
    ) -> Result<(), ModelConstructionError> {
        let variable = self.declared(variable)?;

        if let Some(existing) = self.equations.get(&variable) {
            return Err(ModelConstructionError::duplicate_equation(
                variable,
                existing.provider,
                self.current,
            ));
        }

        self.equations.insert(
            variable,
            Provided {
                provider: self.current,
                value: PendingEquation { expr, algebraic },
            },
        );

        Ok(())
    }

    /// Sets the left and right boundary conditions of `variable`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is undeclared or already has
    /// boundary conditions.
    pub fn set_boundary_conditions(
        &mut self,
        variable: &str,
        left: BoundaryValue,
        right: BoundaryValue,
    ) -> Result<(), ModelConstructionError> {
        let variable = self.declared(variable)?;

        if let Some(existing) = self.boundary_conditions.get(&variable) {
            return Err(ModelConstructionError::duplicate_boundary_conditions(
                variable,
                existing.provider,
                self.current,
            ));
        }

        self.boundary_conditions.insert(
            variable.clone(),
            Provided {
                provider: self.current,
                value: BoundaryCondition::new(variable, left, right),
            },
        );

        Ok(())
    }

    /// Sets the initial condition of `variable`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is undeclared or already has an
    /// initial condition.
    pub fn set_initial_condition(
        &mut self,
        variable: &str,
        initial: Expr,
    ) -> Result<(), ModelConstructionError> {
        let variable = self.declared(variable)?;

        if let Some(existing) = self.initial_conditions.get(&variable) {
            return Err(ModelConstructionError::duplicate_initial_condition(
                variable,
                existing.provider,
                self.current,
            ));
        }

        self.initial_conditions.insert(
            variable.clone(),
            Provided {
                provider: self.current,
                value: InitialCondition::new(variable, initial),
            },
        );

        Ok(())
    }

    /// Adds a term to the defining equation of `variable`.
    ///
    /// Source terms are summed into the equation when the model is
    /// finished, so they may be added before or after the equation itself
    /// is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is undeclared.
    pub fn add_source(
        &mut self,
        variable: &str,
        source: Expr,
    ) -> Result<(), ModelConstructionError> {
        let variable = self.declared(variable)?;

        self.sources.push(Provided {
            provider: self.current,
            value: Source {
                variable,
                expr: source,
            },
        });

        Ok(())
    }

    /// Provides a named output expression.
    ///
    /// # Errors
    ///
    /// Returns an error if the output has already been provided.
    pub fn add_output(
        &mut self,
        name: impl Into<String>,
        expr: Expr,
    ) -> Result<(), ModelConstructionError> {
        let name = name.into();

        if let Some(existing) = self.outputs.get(&name) {
            return Err(ModelConstructionError::duplicate_output(
                name,
                existing.provider,
                self.current,
            ));
        }

        self.outputs.insert(
            name,
            Provided {
                provider: self.current,
                value: expr,
            },
        );

        Ok(())
    }

    /// Looks up an output provided by an earlier contribution.
    ///
    /// # Errors
    ///
    /// Returns an error if no contribution has provided the output yet.
    pub fn output(&self, name: &str) -> Result<Expr, ModelConstructionError> {
        self.outputs
            .get(name)
            .map(|output| output.value.clone())
            .ok_or_else(|| ModelConstructionError::missing_output(name.to_string(), self.current))
    }

    /// Registers an electrochemical reaction.
    pub fn add_reaction(&mut self, reaction: Reaction) {
        self.reactions.push(reaction);
    }

    /// Returns every registered reaction, in registration order.
    #[must_use]
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// Returns the reactions registered at `electrode`.
    pub fn reactions_at(&self, electrode: Electrode) -> impl Iterator<Item = &Reaction> {
        self.reactions
            .iter()
            .filter(move |reaction| reaction.electrode() == electrode)
    }

    fn declared(&self, variable: &str) -> Result<VariableName, ModelConstructionError> {
        let variable = VariableName::new(variable);
        if self.variables.contains_key(&variable) {
            Ok(variable)
        } else {
            Err(ModelConstructionError::undeclared_variable(
                variable,
                self.current,
            ))
        }
    }

    /// Sums source terms into their equations and produces the model.
    ///
    /// # Errors
    ///
    /// Returns an error if a source term targets a variable with no
    /// defining equation.
    pub fn finish(self, options: OptionSet) -> Result<Model, ModelConstructionError> {
        let Self {
            settings,
            variables,
            parameters,
            mut equations,
            boundary_conditions,
            initial_conditions,
            outputs,
            sources,
            ..
        } = self;

        for source in sources {
            let Provided {
                provider,
                value: Source { variable, expr },
            } = source;

            let Some(equation) = equations.get_mut(&variable) else {
                return Err(ModelConstructionError::orphan_source(variable, provider));
            };

            let pending = &mut equation.value;
            pending.expr = pending.expr.clone() + expr;
        }

        let equations = equations
            .into_iter()
            .map(|(name, pending)| {
                let domain = variables
                    .get(&name)
                    .map_or_else(Domain::current_collector, |variable| {
                        variable.value.domain().clone()
                    });
                let PendingEquation { expr, algebraic } = pending.value;
                let kind = if algebraic {
                    EquationKind::Algebraic
                } else if expr.has_spatial_operator() {
                    EquationKind::Pde
                } else {
                    EquationKind::Ode
                };
                let equation = Equation::new(name, kind, domain, expr);

                if settings.debug_mode() {
                    tracing::trace!(
                        submodel = pending.provider,
                        variable = %equation.variable(),
                        kind = %equation.kind(),
                        "merged equation {equation}"
                    );
                }

                equation
            })
            .collect();

        Ok(Model::from_parts(ModelParts {
            options,
            variables: variables
                .into_iter()
                .map(|(name, variable)| (name, variable.value))
                .collect(),
            parameters,
            equations,
            boundary_conditions: boundary_conditions
                .into_values()
                .map(|condition| condition.value)
                .collect(),
            initial_conditions: initial_conditions
                .into_values()
                .map(|condition| condition.value)
                .collect(),
            outputs: outputs
                .into_iter()
                .map(|(name, output)| (name, output.value))
                .collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use plumbum_expr::Symbol;

    use super::*;

    fn partial() -> PartialModel {
        let mut model = PartialModel::new(Settings::default());
        model.enter("first");
        model
    }

    #[test]
    fn redeclaring_a_variable_names_both_sub_models() {
        // create the partial model
        let mut model = partial();
        model
            .declare_variable("c", Domain::current_collector())
            .expect("first declaration");

        // declare the variable again from another sub-model
        model.enter("second");
        let error = model
            .declare_variable("c", Domain::current_collector())
            .expect_err("duplicate");

        // check the error
        assert_eq!(
            error,
            ModelConstructionError::duplicate_variable(VariableName::new("c"), "first", "second")
        );
    }

    #[test]
    fn equations_require_declared_variables() {
        let mut model = partial();

        let error = model
            .set_rhs("c", Expr::scalar(1.0))
            .expect_err("undeclared");

        assert_eq!(
            error,
            ModelConstructionError::undeclared_variable(VariableName::new("c"), "first")
        );
    }

    #[test]
    fn redefining_an_equation_is_an_error() {
        let mut model = partial();
        model
            .declare_variable("c", Domain::current_collector())
            .expect("declared");
        model.set_rhs("c", Expr::scalar(1.0)).expect("first");

        model.enter("second");
        let error = model
            .set_algebraic("c", Expr::scalar(1.0))
            .expect_err("duplicate");

        assert!(matches!(
            error,
            ModelConstructionError::DuplicateEquation {
                first: "first",
                second: "second",
                ..
            }
        ));
    }

    #[test]
    fn missing_output_names_the_requesting_sub_model() {
        let model = partial();

        let error = model.output("Terminal voltage").expect_err("missing");

        assert_eq!(
            error,
            ModelConstructionError::missing_output("Terminal voltage".to_string(), "first")
        );
    }

    #[test]
    fn sources_are_summed_into_their_equation() {
        // create a model with an equation and a source
        let mut model = partial();
        let c = model
            .declare_variable("c", Domain::current_collector())
            .expect("declared");
        model.set_rhs("c", -c).expect("equation");
        model.enter("second");
        let k = model.parameter("k", "rate");
        model.add_source("c", k).expect("source");

        // finish the model
        let model = model.finish(OptionSet::default()).expect("finished");

        // check the equation
        let equation = model
            .equation_for(&VariableName::new("c"))
            .expect("equation present");
        assert_eq!(equation.kind(), EquationKind::Ode);
        assert!(equation.dependencies().contains(&Symbol::parameter("k")));
    }

    #[test]
    fn source_without_equation_is_an_error() {
        let mut model = partial();
        model
            .declare_variable("c", Domain::current_collector())
            .expect("declared");
        model.add_source("c", Expr::scalar(1.0)).expect("source");

        let error = model.finish(OptionSet::default()).expect_err("orphan");

        assert_eq!(
            error,
            ModelConstructionError::orphan_source(VariableName::new("c"), "first")
        );
    }

    #[test]
    fn spatial_rhs_becomes_a_pde() {
        let mut model = partial();
        let c = model
            .declare_variable("c", Domain::electrolyte())
            .expect("declared");
        model.set_rhs("c", c.grad().div()).expect("equation");

        let model = model.finish(OptionSet::default()).expect("finished");

        let equation = model
            .equation_for(&VariableName::new("c"))
            .expect("equation present");
        assert_eq!(equation.kind(), EquationKind::Pde);
        assert_eq!(equation.domain(), &Domain::electrolyte());
    }

    #[test]
    fn parameters_are_declared_once() {
        let mut model = partial();

        let first = model.param(Param::SeparatorPorosity);
        let second = model.param(Param::SeparatorPorosity);

        assert_eq!(first, second);
        let model = model.finish(OptionSet::default()).expect("finished");
        assert_eq!(model.parameters().len(), 1);
    }
}
