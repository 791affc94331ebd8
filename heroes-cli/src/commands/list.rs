use crate::loader::write_json;
use crate::render::{self, lines};
use anyhow::Result;
use tracing::info;

use super::load_store;

/// Show up to `limit` heroes in store order (`0` = all)
pub fn execute(data: &str, limit: usize, output: Option<&str>) -> Result<()> {
    let store = load_store(data)?;

    if limit > store.len() {
        info!("Limit {} exceeds {} heroes, showing all", limit, store.len());
    }

    let shown: Vec<_> = store.list(limit).collect();
    if limit != 0 {
        println!("Top {} heroes:", shown.len());
    }
    for hero in &shown {
        render::print_summary(hero);
    }

    if let Some(path) = output {
        write_json(path, &lines(shown))?;
    }

    Ok(())
}

/// Show every detail of the first hero named exactly `name`
pub fn show(data: &str, name: &str, output: Option<&str>) -> Result<()> {
    let store = load_store(data)?;

    match store.find_by_name(name) {
        Some(hero) => {
            println!("Hero found:");
            render::print_hero(hero);
            if let Some(path) = output {
                write_json(path, hero)?;
            }
        }
        None => render::failure("Hero not found."),
    }

    Ok(())
}

/// Show heroes whose names start with `prefix`, ignoring case
pub fn starts_with(data: &str, prefix: &str, output: Option<&str>) -> Result<()> {
    let store = load_store(data)?;

    let matches = store.starts_with(prefix);
    println!("Found {} heroes:", matches.len());
    for hero in &matches {
        render::print_summary(hero);
    }

    if let Some(path) = output {
        write_json(path, &lines(matches))?;
    }

    Ok(())
}
