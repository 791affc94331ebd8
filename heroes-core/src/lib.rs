//! # Heroes Core
//!
//! An in-memory store of hero records with ordered views and a first-letter index.
//!
//! ## Modules
//!
//! - `constants`: Defaults shared by the store and its front ends
//! - `types`: Record value model (Hero, PowerStats, StatKey, ...)
//! - `compare`: Case-insensitive name ordering and prefix matching
//! - `sort`: Stable merge sort and the descending exchange sort
//! - `search`: Recursive binary search over name-sorted records
//! - `group`: First-letter bucket index
//! - `source`: Bulk-load capability implemented by record loaders
//! - `store`: The record store tying everything together

#![warn(missing_docs)]

pub mod compare;
pub mod constants;
pub mod error;
pub mod group;
pub mod search;
pub mod sort;
pub mod source;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::StoreError;
pub use group::GroupIndex;
pub use source::RecordSource;
pub use store::HeroStore;
pub use types::{Hero, PowerStats, StatKey};

/// Result type alias for store operations
pub type Result<T> = core::result::Result<T, StoreError>;
