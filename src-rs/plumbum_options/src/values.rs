//! The closed set of values each option key can take.

use std::fmt;

use indexmap::IndexSet;

use crate::{OptionError, OptionKey, OptionValue};

/// Thermal sub-model selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Thermal {
    /// The cell temperature is a fixed parameter.
    #[default]
    Isothermal,
    /// A single lumped cell temperature evolves in time.
    Lumped,
}

impl Thermal {
    pub(crate) fn from_value(value: &OptionValue) -> Result<Self, OptionError> {
        let key = OptionKey::Thermal;
        match value {
            OptionValue::String(name) => match name.as_str() {
                "isothermal" => Ok(Self::Isothermal),
                "lumped" => Ok(Self::Lumped),
                _ => Err(OptionError::invalid_value(key, value.clone())),
            },
            OptionValue::Bool(_)
            | OptionValue::Integer(_)
            | OptionValue::List(_)
            | OptionValue::Map(_) => Err(OptionError::invalid_type(key, value.clone(), "a string")),
        }
    }
}

impl fmt::Display for Thermal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Isothermal => write!(f, "isothermal"),
            Self::Lumped => write!(f, "lumped"),
        }
    }
}

/// How transverse electrolyte convection is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransverseConvection {
    /// The transverse acceleration is uniform over the current collector.
    Uniform,
    /// The separator pressure is solved for over the current collector.
    Full,
}

/// Electrolyte convection sub-model selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Convection {
    /// No convection.
    #[default]
    Off,
    /// Through-cell convection with the given transverse model.
    Transverse(TransverseConvection),
}

impl Convection {
    pub(crate) fn from_value(value: &OptionValue) -> Result<Self, OptionError> {
        let key = OptionKey::Convection;
        match value {
            OptionValue::Bool(false) => Ok(Self::Off),
            OptionValue::Bool(true) => Ok(Self::Transverse(TransverseConvection::Uniform)),
            OptionValue::Map(entries) => {
                if let Some(unknown) = entries.keys().find(|entry| *entry != "transverse") {
                    return Err(OptionError::unknown_key(format!("{key}.{unknown}")));
                }

                let transverse = match entries.get("transverse") {
                    Some(OptionValue::String(name)) => name.as_str(),
                    Some(_) | None => "",
                };

                match transverse {
                    "uniform" => Ok(Self::Transverse(TransverseConvection::Uniform)),
                    "full" => Ok(Self::Transverse(TransverseConvection::Full)),
                    _ => Err(OptionError::invalid_value(key, value.clone())),
                }
            }
            OptionValue::Integer(_) | OptionValue::String(_) | OptionValue::List(_) => Err(
                OptionError::invalid_type(key, value.clone(), "a boolean or a mapping"),
            ),
        }
    }

    /// Returns the transverse model, if convection is on.
    #[must_use]
    pub const fn transverse(self) -> Option<TransverseConvection> {
        match self {
            Self::Off => None,
            Self::Transverse(transverse) => Some(transverse),
        }
    }
}

impl fmt::Display for Convection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "false"),
            Self::Transverse(TransverseConvection::Uniform) => {
                write!(f, "{{\"transverse\": \"uniform\"}}")
            }
            Self::Transverse(TransverseConvection::Full) => {
                write!(f, "{{\"transverse\": \"full\"}}")
            }
        }
    }
}

/// Formulation of the electrode/electrolyte interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SurfaceForm {
    /// The interfacial current is explicit; no surface potential difference
    /// is solved for.
    #[default]
    Off,
    /// The surface potential difference obeys a double-layer ODE.
    Differential,
    /// The surface potential difference is fixed by an algebraic residual.
    Algebraic,
}

impl SurfaceForm {
    pub(crate) fn from_value(value: &OptionValue) -> Result<Self, OptionError> {
        let key = OptionKey::SurfaceForm;
        match value {
            OptionValue::Bool(false) => Ok(Self::Off),
            OptionValue::String(name) => match name.as_str() {
                "differential" => Ok(Self::Differential),
                "algebraic" => Ok(Self::Algebraic),
                _ => Err(OptionError::invalid_value(key, value.clone())),
            },
            OptionValue::Bool(true) => Err(OptionError::invalid_value(key, value.clone())),
            OptionValue::Integer(_) | OptionValue::List(_) | OptionValue::Map(_) => Err(
                OptionError::invalid_type(key, value.clone(), "`false` or a string"),
            ),
        }
    }

    /// Returns whether a surface potential difference is solved for.
    #[must_use]
    pub const fn is_on(self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for SurfaceForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "false"),
            Self::Differential => write!(f, "differential"),
            Self::Algebraic => write!(f, "algebraic"),
        }
    }
}

/// A registered side reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SideReaction {
    /// Oxygen evolution at the positive electrode and reduction at the
    /// negative electrode.
    Oxygen,
}

impl SideReaction {
    /// Every registered side reaction.
    pub const ALL: [Self; 1] = [Self::Oxygen];

    /// Returns the reaction name used in an options record.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Oxygen => "oxygen",
        }
    }

    /// Looks up a side reaction by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reaction| reaction.name() == name)
    }

    pub(crate) fn list_from_value(value: &OptionValue) -> Result<Vec<Self>, OptionError> {
        let key = OptionKey::SideReactions;
        let OptionValue::List(entries) = value else {
            return Err(OptionError::invalid_type(
                key,
                value.clone(),
                "a list of reaction names",
            ));
        };

        let mut reactions = IndexSet::new();
        for entry in entries {
            let OptionValue::String(name) = entry else {
                return Err(OptionError::invalid_type(
                    key,
                    value.clone(),
                    "a list of reaction names",
                ));
            };

            let reaction =
                Self::from_name(name).ok_or_else(|| OptionError::unknown_side_reaction(name))?;

            if !reactions.insert(reaction) {
                return Err(OptionError::duplicate_side_reaction(name));
            }
        }

        Ok(reactions.into_iter().collect())
    }
}

impl fmt::Display for SideReaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current collector sub-model selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CurrentCollector {
    /// The current density is uniform over the current collectors.
    #[default]
    Uniform,
    /// The potentials of both current collectors are solved for.
    PotentialPair,
}

impl CurrentCollector {
    pub(crate) fn from_value(value: &OptionValue) -> Result<Self, OptionError> {
        let key = OptionKey::CurrentCollector;
        match value {
            OptionValue::String(name) => match name.as_str() {
                "uniform" => Ok(Self::Uniform),
                "potential pair" => Ok(Self::PotentialPair),
                _ => Err(OptionError::invalid_value(key, value.clone())),
            },
            OptionValue::Bool(_)
            | OptionValue::Integer(_)
            | OptionValue::List(_)
            | OptionValue::Map(_) => Err(OptionError::invalid_type(key, value.clone(), "a string")),
        }
    }
}

impl fmt::Display for CurrentCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::PotentialPair => write!(f, "potential pair"),
        }
    }
}

/// Number of spatial dimensions the current collectors are resolved in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimensionality {
    /// The current collector is a single point.
    #[default]
    Zero,
    /// The current collector is resolved along `z`.
    One,
    /// The current collector is resolved over `y` and `z`.
    Two,
}

impl Dimensionality {
    pub(crate) fn from_value(value: &OptionValue) -> Result<Self, OptionError> {
        let key = OptionKey::Dimensionality;
        match value {
            OptionValue::Integer(0) => Ok(Self::Zero),
            OptionValue::Integer(1) => Ok(Self::One),
            OptionValue::Integer(2) => Ok(Self::Two),
            OptionValue::Integer(_) => Err(OptionError::invalid_value(key, value.clone())),
            OptionValue::Bool(_)
            | OptionValue::String(_)
            | OptionValue::List(_)
            | OptionValue::Map(_) => {
                Err(OptionError::invalid_type(key, value.clone(), "an integer"))
            }
        }
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Returns whether the current collector is spatially resolved.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Zero)
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
