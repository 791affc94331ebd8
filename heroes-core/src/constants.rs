//! Defaults shared by the store and its front ends

/// Resource the store is loaded from when no other path is given
pub const DEFAULT_DATA_FILE: &str = "heroes.json";

/// `list` limit meaning "every record"
pub const UNLIMITED: usize = 0;

/// Placeholder shown for descriptive fields the source left blank
pub const UNKNOWN_FIELD: &str = "-";
