use crate::loader::write_json;
use crate::render::{self, lines, HeroLine};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{load_store, save_store};

#[derive(Serialize, Deserialize)]
struct RemovalReport {
    removed: Vec<HeroLine>,
    remaining: usize,
}

/// Remove every hero named exactly `name`
pub fn execute(data: &str, name: &str, output: Option<&str>, save: Option<&str>) -> Result<()> {
    let mut store = load_store(data)?;

    let matching: Vec<HeroLine> = lines(store.records().iter().filter(|h| h.name == name));
    if store.remove_by_name(name) {
        render::success("Hero removed.");
    } else {
        render::failure("Hero not found.");
    }

    info!("{} heroes removed", matching.len());

    if let Some(path) = output {
        let report = RemovalReport {
            removed: matching,
            remaining: store.len(),
        };
        write_json(path, &report)?;
    }

    save_store(&store, save)
}

/// Remove every hero whose name starts with `prefix`, ignoring case
pub fn prefix(data: &str, prefix: &str, output: Option<&str>, save: Option<&str>) -> Result<()> {
    let mut store = load_store(data)?;

    let removed = store.remove_all_with_prefix(prefix);
    if removed.is_empty() {
        println!("No heroes found that start with '{}'.", prefix);
    } else {
        println!("The following heroes were removed:");
        for hero in &removed {
            render::print_hero(hero);
        }
    }

    if let Some(path) = output {
        let report = RemovalReport {
            removed: lines(&removed),
            remaining: store.len(),
        };
        write_json(path, &report)?;
    }

    save_store(&store, save)
}

/// Remove one hero through the first-letter index
pub fn grouped(data: &str, name: &str, output: Option<&str>, save: Option<&str>) -> Result<()> {
    let mut store = load_store(data)?;

    let removed = store.remove_by_name_via_group(name);
    match &removed {
        Some(hero) => render::success(&format!("{} was removed.", hero.name)),
        None => render::failure(&format!("{} was not found.", name)),
    }

    if let Some(path) = output {
        let report = RemovalReport {
            removed: lines(removed.iter()),
            remaining: store.len(),
        };
        write_json(path, &report)?;
    }

    save_store(&store, save)
}
