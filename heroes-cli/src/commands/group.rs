use crate::loader::write_json;
use crate::render::{self, lines};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::load_store;

#[derive(Serialize, Deserialize)]
struct GroupCount {
    letter: char,
    count: usize,
}

/// Number of heroes per lowercase first letter
pub fn counts(data: &str, output: Option<&str>) -> Result<()> {
    let mut store = load_store(data)?;

    let counts = store.counts_by_group();
    for (letter, count) in &counts {
        println!("{}: {}", letter, count);
    }

    if let Some(path) = output {
        let report: Vec<GroupCount> = counts
            .into_iter()
            .map(|(letter, count)| GroupCount { letter, count })
            .collect();
        write_json(path, &report)?;
    }

    Ok(())
}

/// Heroes whose names start with `letter`, in store order
pub fn by_letter(data: &str, letter: &str, output: Option<&str>) -> Result<()> {
    let mut chars = letter.chars();
    let wanted = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => bail!("Invalid input. Please enter a single letter."),
    };

    let mut store = load_store(data)?;

    let found = match store.find_by_first_letter(wanted) {
        Some(bucket) => {
            for hero in bucket {
                render::print_summary(hero);
            }
            lines(bucket)
        }
        None => {
            println!("No heroes found whose names start with '{}'", wanted);
            Vec::new()
        }
    };

    if let Some(path) = output {
        write_json(path, &found)?;
    }

    Ok(())
}
