use std::fmt;

use plumbum_expr::Region;

/// One of the two porous electrodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Electrode {
    /// The negative electrode (lead).
    Negative,
    /// The positive electrode (lead dioxide).
    Positive,
}

impl Electrode {
    /// Both electrodes, negative first.
    pub const ALL: [Self; 2] = [Self::Negative, Self::Positive];

    /// Returns `"negative"` or `"positive"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Positive => "positive",
        }
    }

    /// Returns the region the electrode occupies.
    #[must_use]
    pub const fn region(self) -> Region {
        match self {
            Self::Negative => Region::NegativeElectrode,
            Self::Positive => Region::PositiveElectrode,
        }
    }

    /// Returns the sign of the current density delivered to this electrode
    /// by the current collector on discharge.
    #[must_use]
    pub const fn current_sign(self) -> f64 {
        match self {
            Self::Negative => 1.0,
            Self::Positive => -1.0,
        }
    }

    /// Name of the x-averaged porosity.
    #[must_use]
    pub const fn porosity(self) -> &'static str {
        match self {
            Self::Negative => "X-averaged negative electrode porosity",
            Self::Positive => "X-averaged positive electrode porosity",
        }
    }

    /// Name of the x-averaged surface potential difference.
    #[must_use]
    pub const fn surface_potential_difference(self) -> &'static str {
        match self {
            Self::Negative => "X-averaged negative electrode surface potential difference",
            Self::Positive => "X-averaged positive electrode surface potential difference",
        }
    }

    /// Name of the x-averaged interfacial current density of the main reaction.
    #[must_use]
    pub const fn interfacial_current_density(self) -> &'static str {
        match self {
            Self::Negative => "X-averaged negative electrode interfacial current density",
            Self::Positive => "X-averaged positive electrode interfacial current density",
        }
    }

    /// Name of the x-averaged overpotential of the main reaction.
    #[must_use]
    pub const fn reaction_overpotential(self) -> &'static str {
        match self {
            Self::Negative => "X-averaged negative electrode reaction overpotential",
            Self::Positive => "X-averaged positive electrode reaction overpotential",
        }
    }

    /// Name of the x-averaged oxygen interfacial current density.
    #[must_use]
    pub const fn oxygen_interfacial_current_density(self) -> &'static str {
        match self {
            Self::Negative => "X-averaged negative electrode oxygen interfacial current density",
            Self::Positive => "X-averaged positive electrode oxygen interfacial current density",
        }
    }

    /// Name of the x-averaged volume-averaged velocity.
    #[must_use]
    pub const fn volume_averaged_velocity(self) -> &'static str {
        match self {
            Self::Negative => "X-averaged negative electrode volume-averaged velocity",
            Self::Positive => "X-averaged positive electrode volume-averaged velocity",
        }
    }
}

impl fmt::Display for Electrode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} electrode", self.name())
    }
}
