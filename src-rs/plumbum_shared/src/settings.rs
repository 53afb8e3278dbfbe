/// Settings that control how models are assembled and checked.
///
/// Settings are passed explicitly to every stage that reads them. Nothing in
/// the pipeline consults process-wide state, so models built with different
/// settings can be assembled and checked side by side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    debug_mode: bool,
}

impl Settings {
    /// Creates settings with debug mode turned on.
    ///
    /// In debug mode the assembler traces every merged equation and the
    /// well-posedness checker runs its additional output variable rule.
    #[must_use]
    pub const fn debug() -> Self {
        Self { debug_mode: true }
    }

    /// Returns a copy of these settings with debug mode set to `debug_mode`.
    #[must_use]
    pub const fn with_debug_mode(self, debug_mode: bool) -> Self {
        Self { debug_mode }
    }

    /// Returns whether debug mode is on.
    #[must_use]
    pub const fn debug_mode(&self) -> bool {
        self.debug_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_not_debug() {
        assert!(!Settings::default().debug_mode());
    }

    #[test]
    fn debug_mode_can_be_toggled() {
        let settings = Settings::debug();
        assert!(settings.debug_mode());

        let settings = settings.with_debug_mode(false);
        assert!(!settings.debug_mode());
    }
}
