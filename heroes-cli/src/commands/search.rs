use crate::loader::write_json;
use crate::render;
use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::load_store;

#[derive(Serialize, Deserialize)]
struct SearchReport {
    name: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u32>,
}

/// Binary search for `name` over the name-sorted view of the store
pub fn execute(data: &str, name: &str, output: Option<&str>) -> Result<()> {
    let store = load_store(data)?;

    let hit = store.search_by_name(name);
    match &hit {
        Some((index, _)) => println!("{} was found at index {}", name, index),
        None => render::failure(&format!("{} was not found", name)),
    }

    if let Some(path) = output {
        let report = SearchReport {
            name: name.to_string(),
            found: hit.is_some(),
            index: hit.as_ref().map(|(index, _)| *index),
            id: hit.as_ref().map(|(_, hero)| hero.id),
        };
        write_json(path, &report)?;
    }

    Ok(())
}
