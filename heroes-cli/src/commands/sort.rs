use crate::loader::write_json;
use crate::render::{self, lines};
use anyhow::Result;
use heroes_core::StatKey;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::load_store;

#[derive(Serialize, Deserialize)]
struct StatEntry {
    id: u32,
    name: String,
    value: i32,
}

/// List heroes by name, descending, ignoring case
pub fn by_name(data: &str, output: Option<&str>) -> Result<()> {
    let store = load_store(data)?;

    let sorted = store.sort_by_name_descending();
    for hero in &sorted {
        render::print_summary(hero);
    }
    println!();

    if let Some(path) = output {
        write_json(path, &lines(&sorted))?;
    }

    Ok(())
}

/// List heroes ascending by one power rating
pub fn by_stat(data: &str, key: StatKey, output: Option<&str>) -> Result<()> {
    let store = load_store(data)?;

    info!("Sorting {} heroes by {}", store.len(), key);
    let sorted = store.sort_by_attribute(key);
    for hero in &sorted {
        render::print_with_stat(hero, key);
    }

    if let Some(path) = output {
        let entries: Vec<StatEntry> = sorted
            .iter()
            .map(|hero| StatEntry {
                id: hero.id,
                name: hero.name.clone(),
                value: hero.stat(key),
            })
            .collect();
        write_json(path, &entries)?;
    }

    Ok(())
}
