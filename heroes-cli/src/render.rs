//! Console rendering of hero records

use colored::Colorize;
use heroes_core::constants::UNKNOWN_FIELD;
use heroes_core::{Hero, StatKey};
use serde::{Deserialize, Serialize};

/// `id` + `name` pair used in JSON reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroLine {
    /// Record id
    pub id: u32,
    /// Record name
    pub name: String,
}

impl From<&Hero> for HeroLine {
    fn from(hero: &Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name.clone(),
        }
    }
}

/// Collect report lines for a sequence of heroes
pub fn lines<'a>(heroes: impl IntoIterator<Item = &'a Hero>) -> Vec<HeroLine> {
    heroes.into_iter().map(HeroLine::from).collect()
}

/// `id: name`
pub fn print_summary(hero: &Hero) {
    println!("{}: {}", hero.id, hero.name);
}

/// `id: value - name`
pub fn print_with_stat(hero: &Hero, key: StatKey) {
    println!("{}: {} - {}", hero.id, hero.stat(key), hero.name);
}

fn or_unknown(value: &str) -> &str {
    if value.trim().is_empty() {
        UNKNOWN_FIELD
    } else {
        value
    }
}

fn field(label: &str, value: &str) {
    println!("\t\t{}: {}", label, or_unknown(value));
}

fn section(title: &str) {
    println!("\t{}", title.cyan());
}

/// Full detail of one hero
pub fn print_hero(hero: &Hero) {
    println!(
        "{}",
        format!("Id: {}, Name: {}", hero.id, hero.name).yellow()
    );

    section("Powerstats:");
    for key in StatKey::ALL {
        println!("\t\t{}: {}", key, hero.stat(key));
    }

    let appearance = &hero.appearance;
    section("Appearance:");
    field("Gender", &appearance.gender);
    field("Race", &appearance.race);
    field("Height", &appearance.height.join(" / "));
    field("Weight", &appearance.weight.join(" / "));
    field("Eye color", &appearance.eye_color);
    field("Hair color", &appearance.hair_color);

    let bio = &hero.biography;
    section("Biography:");
    field("Full name", &bio.full_name);
    field("Alter egos", &bio.alter_egos);
    field("Aliases", &bio.aliases.join(", "));
    field("Place of birth", &bio.place_of_birth);
    field("First appearance", &bio.first_appearance);
    field("Publisher", &bio.publisher);
    field("Alignment", &bio.alignment);

    section("Work:");
    field("Occupation", &hero.work.occupation);
    field("Base", &hero.work.base);

    section("Connections:");
    field("Group affiliation", &hero.connections.group_affiliation);
    field("Relatives", &hero.connections.relatives);

    section("Images:");
    field("URL", &hero.images.xs);
}

/// Success line
pub fn success(message: &str) {
    println!("{}", message.green());
}

/// Failure / not found line
pub fn failure(message: &str) {
    println!("{}", message.red());
}
