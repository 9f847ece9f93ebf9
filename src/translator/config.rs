use serde::{Deserialize, Serialize};

/// Default bound on expression nesting
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Translator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Deepest tree accepted, counting the root as 1. `None` disables the
    /// check.
    pub max_depth: Option<usize>,
}

impl TranslatorConfig {
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}
