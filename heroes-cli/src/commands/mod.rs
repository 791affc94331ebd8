//! One module per CLI command. Every `execute` loads the store once from the
//! data file, runs a single store operation and renders the outcome.

pub mod edit;
pub mod group;
pub mod list;
pub mod remove;
pub mod search;
pub mod sort;

use crate::loader::{write_json, JsonFileSource};
use anyhow::{Context, Result};
use heroes_core::HeroStore;
use tracing::info;

/// Load the store from `data`, failing loudly instead of starting empty
pub fn load_store(data: &str) -> Result<HeroStore> {
    HeroStore::try_from_source(&JsonFileSource::new(data))
        .with_context(|| format!("Failed to load heroes from: {}", data))
}

/// Write the remaining records as a loadable JSON array when `save` is set
pub fn save_store(store: &HeroStore, save: Option<&str>) -> Result<()> {
    if let Some(path) = save {
        write_json(path, store.records())?;
        info!("Saved {} heroes to {}", store.len(), path);
    }
    Ok(())
}
