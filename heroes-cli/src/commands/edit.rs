use crate::loader::{read_hero, write_json};
use crate::render::{self, HeroLine};
use anyhow::Result;
use tracing::info;

use super::{load_store, save_store};

/// Append the hero described in the JSON file `from`
pub fn add(data: &str, from: &str, output: Option<&str>, save: Option<&str>) -> Result<()> {
    let mut store = load_store(data)?;
    let hero = read_hero(from)?;

    info!("Adding hero {} ({})", hero.id, hero.name);
    let line = HeroLine::from(&hero);
    store.add(hero);
    render::success(&format!("{} was added ({} heroes).", line.name, store.len()));

    if let Some(path) = output {
        write_json(path, &line)?;
    }

    save_store(&store, save)
}

/// Replace the first hero named exactly `name` with the one in `from`
pub fn update(
    data: &str,
    name: &str,
    from: &str,
    output: Option<&str>,
    save: Option<&str>,
) -> Result<()> {
    let mut store = load_store(data)?;
    let hero = read_hero(from)?;
    let line = HeroLine::from(&hero);

    let updated = store.update_by_name(name, hero);
    if updated {
        render::success(&format!("{} was updated.", name));
    } else {
        render::failure("Hero not found.");
    }

    if let Some(path) = output {
        let report: Option<HeroLine> = updated.then_some(line);
        write_json(path, &report)?;
    }

    save_store(&store, save)
}
