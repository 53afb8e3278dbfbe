use std::fmt;

use plumbum_shared::error::{AsPlumbumError, Context};

use crate::{OptionKey, OptionValue, SideReaction};

/// Represents an invalid or incompatible options record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// The record contains a key that is not recognized.
    UnknownKey {
        /// The unrecognized key.
        key: String,
    },
    /// A value has the wrong type for its key.
    InvalidType {
        /// The key whose value is invalid.
        key: OptionKey,
        /// The invalid value.
        value: OptionValue,
        /// A description of the expected type.
        expected: &'static str,
    },
    /// A value is outside the allowed set for its key.
    InvalidValue {
        /// The key whose value is invalid.
        key: OptionKey,
        /// The invalid value.
        value: OptionValue,
    },
    /// `side reactions` names a reaction that is not registered.
    UnknownSideReaction {
        /// The unregistered reaction name.
        name: String,
    },
    /// `side reactions` names the same reaction twice.
    DuplicateSideReaction {
        /// The repeated reaction name.
        name: String,
    },
    /// Two otherwise valid options cannot be used together.
    Incompatible(Incompatibility),
}

/// A pair of options that cannot be used together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Incompatibility {
    /// `current collector = "potential pair"` with `dimensionality = 0`.
    PotentialPairRequiresSpatialCurrentCollector,
    /// `convection = {"transverse": "full"}` with `dimensionality = 0`.
    FullConvectionRequiresSpatialCurrentCollector,
    /// Side reactions without a surface form.
    SideReactionsRequireSurfaceForm,
}

impl OptionError {
    /// Creates a new error indicating an unrecognized key.
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }

    /// Creates a new error indicating a value of the wrong type.
    #[must_use]
    pub const fn invalid_type(key: OptionKey, value: OptionValue, expected: &'static str) -> Self {
        Self::InvalidType {
            key,
            value,
            expected,
        }
    }

    /// Creates a new error indicating a value outside the allowed set.
    #[must_use]
    pub const fn invalid_value(key: OptionKey, value: OptionValue) -> Self {
        Self::InvalidValue { key, value }
    }

    /// Creates a new error indicating an unregistered side reaction.
    pub fn unknown_side_reaction(name: impl Into<String>) -> Self {
        Self::UnknownSideReaction { name: name.into() }
    }

    /// Creates a new error indicating a repeated side reaction.
    pub fn duplicate_side_reaction(name: impl Into<String>) -> Self {
        Self::DuplicateSideReaction { name: name.into() }
    }

    /// Creates a new error indicating incompatible options.
    #[must_use]
    pub const fn incompatible(incompatibility: Incompatibility) -> Self {
        Self::Incompatible(incompatibility)
    }

    /// Returns the option key the error is about, if it concerns a single
    /// recognized key.
    #[must_use]
    pub const fn key(&self) -> Option<OptionKey> {
        match self {
            Self::InvalidType { key, .. } | Self::InvalidValue { key, .. } => Some(*key),
            Self::UnknownSideReaction { .. } | Self::DuplicateSideReaction { .. } => {
                Some(OptionKey::SideReactions)
            }
            Self::UnknownKey { .. } | Self::Incompatible(_) => None,
        }
    }
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey { key } => write!(f, "unknown option `{key}`"),
            Self::InvalidType {
                key,
                value,
                expected,
            } => write!(
                f,
                "invalid value {value} for option `{key}`: expected {expected}"
            ),
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value {value} for option `{key}`")
            }
            Self::UnknownSideReaction { name } => write!(f, "unknown side reaction `{name}`"),
            Self::DuplicateSideReaction { name } => {
                write!(f, "side reaction `{name}` is listed more than once")
            }
            Self::Incompatible(incompatibility) => incompatibility.fmt(f),
        }
    }
}

impl fmt::Display for Incompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PotentialPairRequiresSpatialCurrentCollector => write!(
                f,
                "current collector model must be uniform in a 0D model"
            ),
            Self::FullConvectionRequiresSpatialCurrentCollector => write!(
                f,
                "full transverse convection requires a current collector dimensionality of 1 or 2"
            ),
            Self::SideReactionsRequireSurfaceForm => {
                write!(f, "side reactions require a surface form")
            }
        }
    }
}

impl std::error::Error for OptionError {}

impl AsPlumbumError for OptionError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::UnknownKey { .. } => {
                let keys = OptionKey::ALL
                    .iter()
                    .map(|key| format!("`{key}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![Context::Help(format!("recognized options are {keys}"))]
            }
            Self::InvalidType { key, .. } | Self::InvalidValue { key, .. } => {
                vec![allowed_values_help(*key)]
            }
            Self::UnknownSideReaction { .. } => {
                let names = SideReaction::ALL
                    .iter()
                    .map(|reaction| format!("`{reaction}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![Context::Note(format!("registered side reactions are {names}"))]
            }
            Self::DuplicateSideReaction { .. } => vec![],
            Self::Incompatible(incompatibility) => vec![incompatibility.help()],
        }
    }
}

impl Incompatibility {
    fn help(self) -> Context {
        match self {
            Self::PotentialPairRequiresSpatialCurrentCollector => Context::Help(
                "set `dimensionality` to 1 or 2, or use a `uniform` current collector".to_string(),
            ),
            Self::FullConvectionRequiresSpatialCurrentCollector => Context::Help(
                "set `dimensionality` to 1 or 2, or use `uniform` transverse convection"
                    .to_string(),
            ),
            Self::SideReactionsRequireSurfaceForm => Context::Help(
                "set `surface form` to `differential` or `algebraic`".to_string(),
            ),
        }
    }
}

fn allowed_values_help(key: OptionKey) -> Context {
    let allowed = key.allowed_values().join(", ");
    Context::Help(format!("`{key}` accepts {allowed}"))
}
