// src/core/mod.rs — Intent dispatch pipeline

pub mod analysis;
pub mod fallback;
pub mod fuzzy;
pub mod greeting;
pub mod matcher;
pub mod orchestrator;
pub mod trend;
pub mod types;

use regex::Regex;

/// Compile a built-in intent pattern. Only ever called with literals.
pub(crate) fn compile_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in intent pattern must compile")
}
