//! Per-run generator options.

use serde::Deserialize;

/// Options for one generation run.
///
/// Passed by reference into every stage that needs it; nothing reads it
/// from shared state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Treat `optional` fields like any other field.
    pub disable_optional_fields: bool,
}

impl GeneratorOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether optional requiredness is ignored.
    pub fn with_disable_optional_fields(mut self, disable: bool) -> Self {
        self.disable_optional_fields = disable;
        self
    }
}
