use std::fmt;

/// A recognized option key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// `thermal`
    Thermal,
    /// `convection`
    Convection,
    /// `surface form`
    SurfaceForm,
    /// `side reactions`
    SideReactions,
    /// `current collector`
    CurrentCollector,
    /// `dimensionality`
    Dimensionality,
}

impl OptionKey {
    /// Every recognized key.
    pub const ALL: [Self; 6] = [
        Self::Thermal,
        Self::Convection,
        Self::SurfaceForm,
        Self::SideReactions,
        Self::CurrentCollector,
        Self::Dimensionality,
    ];

    /// Returns the key as it is written in an options record.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thermal => "thermal",
            Self::Convection => "convection",
            Self::SurfaceForm => "surface form",
            Self::SideReactions => "side reactions",
            Self::CurrentCollector => "current collector",
            Self::Dimensionality => "dimensionality",
        }
    }

    /// Looks up a key by the name used in an options record.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Returns the values this key accepts, as they would be written in an
    /// options record.
    #[must_use]
    pub const fn allowed_values(self) -> &'static [&'static str] {
        match self {
            Self::Thermal => &["\"isothermal\"", "\"lumped\""],
            Self::Convection => &[
                "false",
                "true",
                "{\"transverse\": \"uniform\"}",
                "{\"transverse\": \"full\"}",
            ],
            Self::SurfaceForm => &["false", "\"differential\"", "\"algebraic\""],
            Self::SideReactions => &["[]", "[\"oxygen\"]"],
            Self::CurrentCollector => &["\"uniform\"", "\"potential pair\""],
            Self::Dimensionality => &["0", "1", "2"],
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
