//! Expression trees for model equations.

use std::{fmt, ops};

use indexmap::{IndexMap, IndexSet};

use crate::{Domain, ParameterName, Symbol, VariableName};

/// A symbolic expression.
///
/// Expressions are immutable trees. Build them with the constructor
/// functions or the arithmetic operators:
///
/// ```rust
/// use plumbum_expr::{Expr, Symbol};
///
/// let c_e = Expr::variable("X-averaged electrolyte concentration");
/// let rhs = Expr::parameter("beta_surf_n") * c_e;
///
/// let dependencies = rhs.dependencies();
/// assert!(dependencies.contains(&Symbol::parameter("beta_surf_n")));
/// assert!(dependencies.contains(&Symbol::variable("X-averaged electrolyte concentration")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Constant scalar value.
    Scalar(f64),
    /// The independent time variable.
    Time,
    /// Reference to a model variable.
    Variable(VariableName),
    /// Reference to a scalar parameter.
    Parameter(ParameterName),
    /// A parameter whose value is a function of other expressions.
    FunctionParameter {
        /// The name of the function parameter.
        name: ParameterName,
        /// The arguments the function is evaluated at.
        args: Vec<Self>,
    },
    /// Unary operation applied to a single expression.
    UnaryOp {
        /// The unary operator to apply.
        op: UnaryOp,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// Binary operation combining two expressions with an operator.
    BinaryOp {
        /// The binary operator to apply.
        op: BinaryOp,
        /// The left-hand operand.
        left: Box<Self>,
        /// The right-hand operand.
        right: Box<Self>,
    },
    /// Elementary function applied to an expression.
    Function {
        /// The function to apply.
        function: MathFunction,
        /// The argument expression.
        arg: Box<Self>,
    },
    /// Spatial differential operator applied to an expression.
    SpatialOp {
        /// The spatial operator to apply.
        op: SpatialOp,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// An expression broadcast onto a domain it does not vary over.
    Broadcast {
        /// The broadcast expression.
        expr: Box<Self>,
        /// The domain the expression is broadcast onto.
        domain: Domain,
    },
    /// Region-wise expressions joined into one expression over the union of
    /// their domains.
    Concatenation(Vec<Self>),
}

impl Expr {
    /// Creates a scalar expression.
    #[must_use]
    pub const fn scalar(value: f64) -> Self {
        Self::Scalar(value)
    }

    /// Creates a reference to the time variable.
    #[must_use]
    pub const fn time() -> Self {
        Self::Time
    }

    /// Creates a variable reference.
    pub fn variable(name: impl AsRef<str>) -> Self {
        Self::Variable(VariableName::new(name))
    }

    /// Creates a parameter reference.
    pub fn parameter(name: impl AsRef<str>) -> Self {
        Self::Parameter(ParameterName::new(name))
    }

    /// Creates a function parameter evaluated at the given arguments.
    pub fn function_parameter(name: impl AsRef<str>, args: Vec<Self>) -> Self {
        Self::FunctionParameter {
            name: ParameterName::new(name),
            args,
        }
    }

    /// Creates a unary operation expression.
    #[must_use]
    pub fn unary_op(op: UnaryOp, expr: Self) -> Self {
        Self::UnaryOp {
            op,
            expr: Box::new(expr),
        }
    }

    /// Creates a binary operation expression.
    #[must_use]
    pub fn binary_op(op: BinaryOp, left: Self, right: Self) -> Self {
        Self::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Applies an elementary function to this expression.
    #[must_use]
    pub fn apply(self, function: MathFunction) -> Self {
        Self::Function {
            function,
            arg: Box::new(self),
        }
    }

    /// Creates `exp(self)`.
    #[must_use]
    pub fn exp(self) -> Self {
        self.apply(MathFunction::Exp)
    }

    /// Creates `log(self)`.
    #[must_use]
    pub fn log(self) -> Self {
        self.apply(MathFunction::Log)
    }

    /// Creates `sinh(self)`.
    #[must_use]
    pub fn sinh(self) -> Self {
        self.apply(MathFunction::Sinh)
    }

    /// Creates `arcsinh(self)`.
    #[must_use]
    pub fn arcsinh(self) -> Self {
        self.apply(MathFunction::Arcsinh)
    }

    /// Creates `self ^ exponent`.
    #[must_use]
    pub fn pow(self, exponent: Self) -> Self {
        Self::binary_op(BinaryOp::Pow, self, exponent)
    }

    /// Creates the gradient of this expression.
    #[must_use]
    pub fn grad(self) -> Self {
        Self::SpatialOp {
            op: SpatialOp::Gradient,
            expr: Box::new(self),
        }
    }

    /// Creates the divergence of this expression.
    #[must_use]
    pub fn div(self) -> Self {
        Self::SpatialOp {
            op: SpatialOp::Divergence,
            expr: Box::new(self),
        }
    }

    /// Creates the laplacian of this expression.
    #[must_use]
    pub fn laplacian(self) -> Self {
        Self::SpatialOp {
            op: SpatialOp::Laplacian,
            expr: Box::new(self),
        }
    }

    /// Broadcasts this expression onto `domain`.
    #[must_use]
    pub fn broadcast(self, domain: Domain) -> Self {
        Self::Broadcast {
            expr: Box::new(self),
            domain,
        }
    }

    /// Joins region-wise expressions into one expression.
    #[must_use]
    pub const fn concatenation(parts: Vec<Self>) -> Self {
        Self::Concatenation(parts)
    }

    /// Sums the given terms.
    ///
    /// An empty sum is the scalar zero.
    pub fn sum(terms: impl IntoIterator<Item = Self>) -> Self {
        terms
            .into_iter()
            .reduce(|acc, term| acc + term)
            .unwrap_or(Self::Scalar(0.0))
    }

    /// Returns every symbol this expression depends on, in the order they
    /// are first encountered.
    #[must_use]
    pub fn dependencies(&self) -> IndexSet<Symbol> {
        let mut symbols = IndexSet::new();
        self.collect_dependencies(&mut symbols);
        symbols
    }

    /// Returns the variables that are differentiated in space.
    ///
    /// Every variable in the operand of a gradient or a laplacian is
    /// differentiated in space, as is every variable in the operand of a
    /// divergence unless that operand is itself a flux built from a
    /// gradient. These are the variables that require boundary conditions.
    #[must_use]
    pub fn spatial_variables(&self) -> IndexSet<VariableName> {
        let mut variables = IndexSet::new();
        self.collect_spatial_variables(&mut variables);
        variables
    }

    /// Returns whether this expression contains any spatial operator.
    #[must_use]
    pub fn has_spatial_operator(&self) -> bool {
        matches!(self, Self::SpatialOp { .. })
            || self.children().into_iter().any(Self::has_spatial_operator)
    }

    /// Replaces every symbol found in `substitutions` with its mapped
    /// expression.
    #[must_use]
    pub fn substitute(&self, substitutions: &IndexMap<Symbol, Self>) -> Self {
        match self {
            Self::Variable(name) => substitutions
                .get(&Symbol::Variable(name.clone()))
                .cloned()
                .unwrap_or_else(|| self.clone()),
            Self::Parameter(name) => substitutions
                .get(&Symbol::Parameter(name.clone()))
                .cloned()
                .unwrap_or_else(|| self.clone()),
            Self::Scalar(_) | Self::Time => self.clone(),
            Self::FunctionParameter { name, args } => Self::FunctionParameter {
                name: name.clone(),
                args: args
                    .iter()
                    .map(|arg| arg.substitute(substitutions))
                    .collect(),
            },
            Self::UnaryOp { op, expr } => Self::unary_op(*op, expr.substitute(substitutions)),
            Self::BinaryOp { op, left, right } => Self::binary_op(
                *op,
                left.substitute(substitutions),
                right.substitute(substitutions),
            ),
            Self::Function { function, arg } => arg.substitute(substitutions).apply(*function),
            Self::SpatialOp { op, expr } => Self::SpatialOp {
                op: *op,
                expr: Box::new(expr.substitute(substitutions)),
            },
            Self::Broadcast { expr, domain } => {
                expr.substitute(substitutions).broadcast(domain.clone())
            }
            Self::Concatenation(parts) => Self::Concatenation(
                parts
                    .iter()
                    .map(|part| part.substitute(substitutions))
                    .collect(),
            ),
        }
    }

    fn children(&self) -> Vec<&Self> {
        match self {
            Self::Scalar(_) | Self::Time | Self::Variable(_) | Self::Parameter(_) => vec![],
            Self::FunctionParameter { args: parts, .. } | Self::Concatenation(parts) => {
                parts.iter().collect()
            }
            Self::UnaryOp { expr, .. }
            | Self::Function { arg: expr, .. }
            | Self::SpatialOp { expr, .. }
            | Self::Broadcast { expr, .. } => vec![expr.as_ref()],
            Self::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        }
    }

    fn collect_dependencies(&self, symbols: &mut IndexSet<Symbol>) {
        match self {
            Self::Variable(name) => {
                symbols.insert(Symbol::Variable(name.clone()));
            }
            Self::Parameter(name) | Self::FunctionParameter { name, .. } => {
                symbols.insert(Symbol::Parameter(name.clone()));
            }
            Self::Scalar(_)
            | Self::Time
            | Self::UnaryOp { .. }
            | Self::BinaryOp { .. }
            | Self::Function { .. }
            | Self::SpatialOp { .. }
            | Self::Broadcast { .. }
            | Self::Concatenation(_) => {}
        }

        for child in self.children() {
            child.collect_dependencies(symbols);
        }
    }

    fn collect_spatial_variables(&self, variables: &mut IndexSet<VariableName>) {
        if let Self::SpatialOp { op, expr } = self {
            let differentiated = match op {
                SpatialOp::Gradient | SpatialOp::Laplacian => true,
                SpatialOp::Divergence => !expr.has_spatial_operator(),
            };

            if differentiated {
                for symbol in expr.dependencies() {
                    if let Symbol::Variable(name) = symbol {
                        variables.insert(name);
                    }
                }
            }
        }

        for child in self.children() {
            child.collect_spatial_variables(variables);
        }
    }

    const fn precedence(&self) -> u8 {
        match self {
            Self::BinaryOp { op, .. } => op.precedence(),
            Self::UnaryOp { .. } => 4,
            Self::Scalar(_)
            | Self::Time
            | Self::Variable(_)
            | Self::Parameter(_)
            | Self::FunctionParameter { .. }
            | Self::Function { .. }
            | Self::SpatialOp { .. }
            | Self::Broadcast { .. }
            | Self::Concatenation(_) => 5,
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Negation: `-a`
    Neg,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition: `a + b`
    Add,
    /// Subtraction: `a - b`
    Sub,
    /// Multiplication: `a * b`
    Mul,
    /// Division: `a / b`
    Div,
    /// Exponentiation: `a ^ b`
    Pow,
}

impl BinaryOp {
    const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Whether `a op (b op c)` differs from `(a op b) op c`.
    const fn is_right_sensitive(self) -> bool {
        matches!(self, Self::Sub | Self::Div | Self::Pow)
    }
}

/// Elementary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFunction {
    /// Exponential.
    Exp,
    /// Natural logarithm.
    Log,
    /// Hyperbolic sine.
    Sinh,
    /// Inverse hyperbolic sine.
    Arcsinh,
    /// Square root.
    Sqrt,
}

impl MathFunction {
    const fn name(self) -> &'static str {
        match self {
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sinh => "sinh",
            Self::Arcsinh => "arcsinh",
            Self::Sqrt => "sqrt",
        }
    }
}

/// Spatial differential operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialOp {
    /// Gradient.
    Gradient,
    /// Divergence.
    Divergence,
    /// Laplacian.
    Laplacian,
}

impl SpatialOp {
    const fn name(self) -> &'static str {
        match self {
            Self::Gradient => "grad",
            Self::Divergence => "div",
            Self::Laplacian => "laplacian",
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Time => write!(f, "t"),
            Self::Variable(name) => write!(f, "{{{name}}}"),
            Self::Parameter(name) => write!(f, "{name}"),
            Self::FunctionParameter { name, args } => {
                write!(f, "{name}(")?;
                write_list(f, args)?;
                write!(f, ")")
            }
            Self::UnaryOp {
                op: UnaryOp::Neg,
                expr,
            } => {
                if expr.precedence() < self.precedence() {
                    write!(f, "-({expr})")
                } else {
                    write!(f, "-{expr}")
                }
            }
            Self::BinaryOp { op, left, right } => {
                let precedence = op.precedence();

                if left.precedence() < precedence {
                    write!(f, "({left})")?;
                } else {
                    write!(f, "{left}")?;
                }

                write!(f, " {} ", op.symbol())?;

                let right_precedence = right.precedence();
                if right_precedence < precedence
                    || (right_precedence == precedence && op.is_right_sensitive())
                {
                    write!(f, "({right})")
                } else {
                    write!(f, "{right}")
                }
            }
            Self::Function { function, arg } => write!(f, "{}({arg})", function.name()),
            Self::SpatialOp { op, expr } => write!(f, "{}({expr})", op.name()),
            Self::Broadcast { expr, domain } => write!(f, "broadcast({expr}, {domain})"),
            Self::Concatenation(parts) => {
                write!(f, "concat(")?;
                write_list(f, parts)?;
                write!(f, ")")
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, exprs: &[Expr]) -> fmt::Result {
    for (index, expr) in exprs.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{expr}")?;
    }
    Ok(())
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::binary_op(BinaryOp::Add, self, rhs)
    }
}

impl ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::binary_op(BinaryOp::Sub, self, rhs)
    }
}

impl ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::binary_op(BinaryOp::Mul, self, rhs)
    }
}

impl ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::binary_op(BinaryOp::Div, self, rhs)
    }
}

impl ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self {
        Self::unary_op(UnaryOp::Neg, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_e() -> Expr {
        Expr::variable("c_e")
    }

    #[test]
    fn dependencies_are_ordered_and_unique() {
        let expr = Expr::parameter("a") * c_e() + Expr::parameter("a") * Expr::variable("eps");

        let dependencies: Vec<_> = expr.dependencies().into_iter().collect();

        assert_eq!(
            dependencies,
            vec![
                Symbol::parameter("a"),
                Symbol::variable("c_e"),
                Symbol::variable("eps"),
            ]
        );
    }

    #[test]
    fn dependencies_include_function_parameters_and_their_arguments() {
        let expr = Expr::function_parameter("D_e", vec![c_e()]);

        let dependencies = expr.dependencies();

        assert!(dependencies.contains(&Symbol::parameter("D_e")));
        assert!(dependencies.contains(&Symbol::variable("c_e")));
    }

    #[test]
    fn time_and_scalars_have_no_dependencies() {
        let expr = Expr::time() * Expr::scalar(2.0);
        assert!(expr.dependencies().is_empty());
    }

    #[test]
    fn flux_coefficients_are_not_spatial() {
        // div(D(c_0) * grad(c_1)) differentiates c_1 but not c_0
        let expr = (Expr::function_parameter("D_e", vec![Expr::variable("c_0")])
            * Expr::variable("c_1").grad())
        .div();

        let spatial: Vec<_> = expr.spatial_variables().into_iter().collect();

        assert_eq!(spatial, vec![VariableName::new("c_1")]);
        assert!(expr.has_spatial_operator());
    }

    #[test]
    fn laplacian_marks_its_operand_as_spatial() {
        let expr = Expr::variable("phi").laplacian() - Expr::variable("i");

        let spatial = expr.spatial_variables();

        assert!(spatial.contains(&VariableName::new("phi")));
        assert!(!spatial.contains(&VariableName::new("i")));
    }

    #[test]
    fn scaled_operands_are_spatial() {
        let scaled = (Expr::parameter("D") * Expr::variable("c")).laplacian();
        let negated = (-Expr::variable("phi")).grad();
        let product = (Expr::variable("u") * Expr::variable("k")).grad();

        assert!(scaled.spatial_variables().contains(&VariableName::new("c")));
        assert!(negated.spatial_variables().contains(&VariableName::new("phi")));

        let spatial = product.spatial_variables();
        assert!(spatial.contains(&VariableName::new("u")));
        assert!(spatial.contains(&VariableName::new("k")));
    }

    #[test]
    fn divergence_of_a_variable_is_spatial() {
        let expr = Expr::variable("q").div() + Expr::variable("s");

        let spatial: Vec<_> = expr.spatial_variables().into_iter().collect();

        assert_eq!(spatial, vec![VariableName::new("q")]);
    }

    #[test]
    fn expressions_without_operators_are_not_spatial() {
        let expr = -(c_e() * Expr::parameter("beta")).exp();
        assert!(!expr.has_spatial_operator());
        assert!(expr.spatial_variables().is_empty());
    }

    #[test]
    fn substitute_replaces_symbols_everywhere() {
        let expr =
            Expr::function_parameter("U_n", vec![c_e()]) + c_e().broadcast(Domain::electrolyte());

        let mut substitutions = IndexMap::new();
        substitutions.insert(Symbol::variable("c_e"), Expr::scalar(1.0));

        let substituted = expr.substitute(&substitutions);

        assert_eq!(
            substituted,
            Expr::function_parameter("U_n", vec![Expr::scalar(1.0)])
                + Expr::scalar(1.0).broadcast(Domain::electrolyte())
        );
        assert!(!substituted.dependencies().contains(&Symbol::variable("c_e")));
    }

    #[test]
    fn substitute_leaves_unmapped_symbols_alone() {
        let expr = c_e() * Expr::parameter("l_n");
        let substituted = expr.substitute(&IndexMap::new());
        assert_eq!(substituted, expr);
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        assert_eq!(Expr::sum([]), Expr::scalar(0.0));
    }

    #[test]
    fn sum_adds_left_to_right() {
        let sum = Expr::sum([Expr::parameter("a"), Expr::parameter("b"), Expr::parameter("c")]);
        assert_eq!(
            sum,
            (Expr::parameter("a") + Expr::parameter("b")) + Expr::parameter("c")
        );
    }

    #[test]
    fn display_adds_only_needed_parentheses() {
        let a = Expr::parameter("a");
        let b = Expr::parameter("b");
        let c = Expr::parameter("c");

        assert_eq!((a.clone() + b.clone() * c.clone()).to_string(), "a + b * c");
        assert_eq!(((a.clone() + b.clone()) * c.clone()).to_string(), "(a + b) * c");
        assert_eq!((a.clone() - (b.clone() - c)).to_string(), "a - (b - c)");
        assert_eq!((-(a + b)).to_string(), "-(a + b)");
        assert_eq!(c_e().grad().div().to_string(), "div(grad({c_e}))");
    }
}
