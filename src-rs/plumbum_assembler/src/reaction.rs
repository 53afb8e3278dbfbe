use plumbum_expr::Expr;

use crate::Electrode;

/// An electrochemical reaction taking place at one electrode.
///
/// Sub-models that introduce a reaction register it during the coupled
/// phase. Sub-models that conserve a quantity across reactions (charge,
/// electrolyte, oxygen, porosity, heat) read every registered reaction while
/// writing their equations.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    name: &'static str,
    electrode: Electrode,
    interfacial_current: Expr,
    overpotential: Expr,
    cation_stoichiometry: Expr,
    oxygen_stoichiometry: Option<Expr>,
    porosity_change: Expr,
}

impl Reaction {
    /// Creates a reaction that does not involve oxygen.
    #[must_use]
    pub const fn new(
        name: &'static str,
        electrode: Electrode,
        interfacial_current: Expr,
        overpotential: Expr,
        cation_stoichiometry: Expr,
        porosity_change: Expr,
    ) -> Self {
        Self {
            name,
            electrode,
            interfacial_current,
            overpotential,
            cation_stoichiometry,
            oxygen_stoichiometry: None,
            porosity_change,
        }
    }

    /// Returns this reaction with oxygen produced or consumed with the given
    /// signed stoichiometry.
    #[must_use]
    pub fn with_oxygen_stoichiometry(mut self, stoichiometry: Expr) -> Self {
        self.oxygen_stoichiometry = Some(stoichiometry);
        self
    }

    /// Returns the reaction name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the electrode the reaction takes place at.
    #[must_use]
    pub const fn electrode(&self) -> Electrode {
        self.electrode
    }

    /// Returns the interfacial current density of the reaction.
    #[must_use]
    pub const fn interfacial_current(&self) -> &Expr {
        &self.interfacial_current
    }

    /// Returns the reaction overpotential.
    #[must_use]
    pub const fn overpotential(&self) -> &Expr {
        &self.overpotential
    }

    /// Returns the signed stoichiometry of cations.
    #[must_use]
    pub const fn cation_stoichiometry(&self) -> &Expr {
        &self.cation_stoichiometry
    }

    /// Returns the signed stoichiometry of oxygen, if the reaction involves
    /// oxygen.
    #[must_use]
    pub const fn oxygen_stoichiometry(&self) -> Option<&Expr> {
        self.oxygen_stoichiometry.as_ref()
    }

    /// Returns the change in solid volume per unit reaction.
    #[must_use]
    pub const fn porosity_change(&self) -> &Expr {
        &self.porosity_change
    }
}
