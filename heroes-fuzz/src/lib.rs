//! Fuzzing harness for the text handling in heroes-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_prefix

use heroes_core::{Hero, HeroStore};

/// Split arbitrary bytes into a probe and a list of names
fn split_input(data: &[u8]) -> (String, Vec<String>) {
    let text = String::from_utf8_lossy(data);
    let mut parts = text.split('\n').map(str::to_string);
    let probe = parts.next().unwrap_or_default();
    (probe, parts.collect())
}

fn heroes_from(names: Vec<String>) -> Vec<Hero> {
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| Hero::new(i as u32, name))
        .collect()
}

pub fn fuzz_prefix(data: &[u8]) {
    use heroes_core::compare::{cmp_ignore_case, is_prefix};

    let (probe, names) = split_input(data);
    for name in &names {
        // Should never panic, whatever the lengths
        let _ = is_prefix(&probe, name);
        let _ = cmp_ignore_case(&probe, name);
    }
}

pub fn fuzz_search(data: &[u8]) {
    use heroes_core::search::binary_search_by_name;

    let (probe, names) = split_input(data);
    let heroes = heroes_from(names);

    // Unsorted input breaks the precondition but must not read out of bounds
    let _ = binary_search_by_name(&heroes, &probe);
}

pub fn fuzz_store(data: &[u8]) {
    let (probe, names) = split_input(data);
    let mut store = HeroStore::new(heroes_from(names));

    let _ = store.counts_by_group();
    let _ = store.remove_by_name_via_group(&probe);
    let _ = store.remove_all_with_prefix(&probe);
    let _ = store.search_by_name(&probe);
    if let Some(first) = probe.chars().next() {
        let _ = store.find_by_first_letter(first);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_prefix_empty() {
        fuzz_prefix(&[]);
    }

    #[test]
    fn test_fuzz_prefix_longer_than_names() {
        fuzz_prefix("Batman Beyond\nBat\n\nb".as_bytes());
    }

    #[test]
    fn test_fuzz_search_random() {
        fuzz_search(&[0xFF; 1024]);
    }

    #[test]
    fn test_fuzz_store_unicode() {
        fuzz_store("İ\nİstanbul\nistanbul\nß\nSS".as_bytes());
    }
}
