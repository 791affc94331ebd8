//! Library entry for heroes-cli used by integration tests and embedding.

pub mod commands;
pub mod loader;
pub mod render;

// Re-export commands for convenience
pub use commands::*;

use heroes_core::{StatKey, StoreError};

/// Parse a power stat name given on the command line (any case)
pub fn parse_stat(name: &str) -> Result<StatKey, StoreError> {
    name.parse()
}

// Re-export commonly used items
pub use crate::loader::{JsonFileSource, JsonStrSource};
