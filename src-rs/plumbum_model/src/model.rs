//! The assembled model.

use indexmap::IndexMap;
use plumbum_expr::{Expr, ParameterName, Symbol, VariableName};
use plumbum_options::OptionSet;

use crate::{BoundaryCondition, Equation, InitialCondition, Parameter, Variable};

/// The components of a [`Model`], with public fields.
///
/// Use this to take a model apart, change it, and put it back together.
/// Assembly never does this; it exists so that callers can build models by
/// hand or deliberately break an assembled one.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParts {
    /// The options the model was assembled from.
    pub options: OptionSet,
    /// Declared unknowns, in declaration order.
    pub variables: IndexMap<VariableName, Variable>,
    /// Declared parameters, in first-use order.
    pub parameters: IndexMap<ParameterName, Parameter>,
    /// Defining equations, in merge order.
    pub equations: Vec<Equation>,
    /// Boundary conditions, in merge order.
    pub boundary_conditions: Vec<BoundaryCondition>,
    /// Initial conditions, in merge order.
    pub initial_conditions: Vec<InitialCondition>,
    /// Named explicit output expressions.
    pub outputs: IndexMap<String, Expr>,
}

/// An assembled model.
///
/// Equations, boundary conditions and initial conditions are kept as ordered
/// lists rather than maps keyed by variable, so a model can represent a
/// variable with no definition or with several; deciding whether that is
/// acceptable is left to the well-posedness check.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    options: OptionSet,
    variables: IndexMap<VariableName, Variable>,
    parameters: IndexMap<ParameterName, Parameter>,
    equations: Vec<Equation>,
    boundary_conditions: Vec<BoundaryCondition>,
    initial_conditions: Vec<InitialCondition>,
    outputs: IndexMap<String, Expr>,
}

impl Model {
    /// Creates a model from its parts.
    #[must_use]
    pub fn from_parts(parts: ModelParts) -> Self {
        let ModelParts {
            options,
            variables,
            parameters,
            equations,
            boundary_conditions,
            initial_conditions,
            outputs,
        } = parts;

        Self {
            options,
            variables,
            parameters,
            equations,
            boundary_conditions,
            initial_conditions,
            outputs,
        }
    }

    /// Takes the model apart.
    #[must_use]
    pub fn into_parts(self) -> ModelParts {
        ModelParts {
            options: self.options,
            variables: self.variables,
            parameters: self.parameters,
            equations: self.equations,
            boundary_conditions: self.boundary_conditions,
            initial_conditions: self.initial_conditions,
            outputs: self.outputs,
        }
    }

    /// Returns the options the model was assembled from.
    #[must_use]
    pub const fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Returns the declared variables.
    #[must_use]
    pub const fn variables(&self) -> &IndexMap<VariableName, Variable> {
        &self.variables
    }

    /// Looks up a declared variable.
    #[must_use]
    pub fn variable(&self, name: &VariableName) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Returns the declared parameters.
    #[must_use]
    pub const fn parameters(&self) -> &IndexMap<ParameterName, Parameter> {
        &self.parameters
    }

    /// Returns whether `symbol` is a declared variable or parameter.
    #[must_use]
    pub fn is_declared(&self, symbol: &Symbol) -> bool {
        match symbol {
            Symbol::Variable(name) => self.variables.contains_key(name),
            Symbol::Parameter(name) => self.parameters.contains_key(name),
        }
    }

    /// Returns the equations.
    #[must_use]
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    /// Returns every equation defining `variable`.
    pub fn equations_for<'a>(
        &'a self,
        variable: &'a VariableName,
    ) -> impl Iterator<Item = &'a Equation> {
        self.equations
            .iter()
            .filter(move |equation| equation.variable() == variable)
    }

    /// Returns the first equation defining `variable`.
    #[must_use]
    pub fn equation_for(&self, variable: &VariableName) -> Option<&Equation> {
        self.equations
            .iter()
            .find(|equation| equation.variable() == variable)
    }

    /// Returns the boundary conditions.
    #[must_use]
    pub fn boundary_conditions(&self) -> &[BoundaryCondition] {
        &self.boundary_conditions
    }

    /// Returns every boundary condition pair for `variable`.
    pub fn boundary_conditions_for<'a>(
        &'a self,
        variable: &'a VariableName,
    ) -> impl Iterator<Item = &'a BoundaryCondition> {
        self.boundary_conditions
            .iter()
            .filter(move |condition| condition.variable() == variable)
    }

    /// Returns the initial conditions.
    #[must_use]
    pub fn initial_conditions(&self) -> &[InitialCondition] {
        &self.initial_conditions
    }

    /// Returns every initial condition for `variable`.
    pub fn initial_conditions_for<'a>(
        &'a self,
        variable: &'a VariableName,
    ) -> impl Iterator<Item = &'a InitialCondition> {
        self.initial_conditions
            .iter()
            .filter(move |condition| condition.variable() == variable)
    }

    /// Returns the named output expressions.
    #[must_use]
    pub const fn outputs(&self) -> &IndexMap<String, Expr> {
        &self.outputs
    }

    /// Looks up a named output expression.
    #[must_use]
    pub fn output(&self, name: &str) -> Option<&Expr> {
        self.outputs.get(name)
    }
}

#[cfg(test)]
mod tests {
    use plumbum_expr::Domain;

    use super::*;
    use crate::{BoundaryValue, EquationKind};

    fn diffusion_model() -> Model {
        let c = VariableName::new("c");
        let mut variables = IndexMap::new();
        variables.insert(c.clone(), Variable::new(c.clone(), Domain::electrolyte()));

        let d = ParameterName::new("D");
        let mut parameters = IndexMap::new();
        parameters.insert(d.clone(), Parameter::new(d, "diffusivity".to_string()));

        let mut outputs = IndexMap::new();
        outputs.insert("Concentration".to_string(), Expr::variable("c"));

        Model::from_parts(ModelParts {
            options: OptionSet::default(),
            variables,
            parameters,
            equations: vec![Equation::new(
                c.clone(),
                EquationKind::Pde,
                Domain::electrolyte(),
                Expr::parameter("D") * Expr::variable("c").laplacian(),
            )],
            boundary_conditions: vec![BoundaryCondition::new(
                c.clone(),
                BoundaryValue::neumann(Expr::scalar(0.0)),
                BoundaryValue::neumann(Expr::scalar(0.0)),
            )],
            initial_conditions: vec![InitialCondition::new(c, Expr::scalar(1.0))],
            outputs,
        })
    }

    #[test]
    fn lookups_by_variable() {
        // create the model
        let model = diffusion_model();
        let c = VariableName::new("c");

        // check the lookups
        assert_eq!(
            model.equation_for(&c).map(Equation::kind),
            Some(EquationKind::Pde)
        );
        assert_eq!(model.boundary_conditions_for(&c).count(), 1);
        assert_eq!(model.initial_conditions_for(&c).count(), 1);
        assert!(model.equation_for(&VariableName::new("T")).is_none());
        assert!(model.output("Concentration").is_some());
    }

    #[test]
    fn equation_lookup_outlives_the_key() {
        let model = diffusion_model();

        // the key is a temporary dropped before the equation is used
        let equation = model.equation_for(&VariableName::new("c"));

        assert_eq!(equation.map(Equation::variable), Some(&VariableName::new("c")));
    }

    #[test]
    fn declared_symbols() {
        let model = diffusion_model();

        assert!(model.is_declared(&Symbol::variable("c")));
        assert!(model.is_declared(&Symbol::parameter("D")));
        assert!(!model.is_declared(&Symbol::parameter("c")));
    }

    #[test]
    fn parts_round_trip_allows_removing_a_condition() {
        // create the model and remove its boundary condition
        let model = diffusion_model();
        let mut parts = model.clone().into_parts();
        parts.boundary_conditions.clear();

        // check the rebuilt model
        let rebuilt = Model::from_parts(parts);
        assert!(rebuilt.boundary_conditions().is_empty());
        assert_eq!(rebuilt.equations(), model.equations());
    }
}
