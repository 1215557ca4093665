//! Configuration options for schema compilation

// ============================================================================
// Compile Config
// ============================================================================

/// Options controlling which processors the compiler emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileConfig {
    /// Coerce numeric and boolean strings before type checks
    ///
    /// Off (strict) by default. Query, path and header parameters arrive as
    /// strings and usually need this turned on.
    pub coerce_from_string: bool,

    /// Check the `format` keyword (`date`, `date-time`, `email`, `uuid`,
    /// `uri`)
    pub validate_formats: bool,

    /// Insert property defaults missing from the input
    pub apply_defaults: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            coerce_from_string: false,
            validate_formats: true,
            apply_defaults: true,
        }
    }
}

impl CompileConfig {
    /// Create config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict config: no coercion, as for JSON bodies
    pub fn strict() -> Self {
        Self::default()
    }

    /// Coercive config, as for string-typed parameters
    pub fn coercive() -> Self {
        Self::default().coerce_from_string(true)
    }

    // Builder methods

    pub fn coerce_from_string(mut self, value: bool) -> Self {
        self.coerce_from_string = value;
        self
    }

    pub fn validate_formats(mut self, value: bool) -> Self {
        self.validate_formats = value;
        self
    }

    pub fn apply_defaults(mut self, value: bool) -> Self {
        self.apply_defaults = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompileConfig::default();
        assert!(!config.coerce_from_string);
        assert!(config.validate_formats);
        assert!(config.apply_defaults);
        assert_eq!(config, CompileConfig::strict());
    }

    #[test]
    fn test_builder() {
        let config = CompileConfig::new()
            .coerce_from_string(true)
            .validate_formats(false)
            .apply_defaults(false);

        assert!(config.coerce_from_string);
        assert!(!config.validate_formats);
        assert!(!config.apply_defaults);
        assert!(CompileConfig::coercive().coerce_from_string);
    }
}
