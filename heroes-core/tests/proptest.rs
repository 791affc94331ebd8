//! Property-based tests using proptest

use heroes_core::{
    compare::{cmp_ignore_case, first_letter_key, is_prefix},
    search::binary_search_by_name,
    sort::{sort_by_name_ascending, sort_by_name_descending, sort_by_stat},
    GroupIndex, Hero, HeroStore, PowerStats, StatKey,
};
use proptest::prelude::*;
use std::cmp::Ordering;

fn arb_hero() -> impl Strategy<Value = Hero> {
    (
        any::<u32>(),
        prop_oneof![9 => "[A-Za-z][A-Za-z -]{0,8}", 1 => Just(String::new())],
        prop::array::uniform6(0i32..100),
    )
        .prop_map(|(id, name, s)| {
            Hero::new(id, name).with_powerstats(PowerStats {
                intelligence: s[0],
                strength: s[1],
                speed: s[2],
                durability: s[3],
                power: s[4],
                combat: s[5],
            })
        })
}

fn arb_heroes() -> impl Strategy<Value = Vec<Hero>> {
    prop::collection::vec(arb_hero(), 0..40).prop_map(|mut heroes| {
        // unique ids so stability can be checked by id position
        for (i, hero) in heroes.iter_mut().enumerate() {
            hero.id = i as u32;
        }
        heroes
    })
}

fn arb_key() -> impl Strategy<Value = StatKey> {
    prop::sample::select(StatKey::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_stat_sort_non_decreasing_and_stable(heroes in arb_heroes(), key in arb_key()) {
        let sorted = sort_by_stat(&heroes, key);
        prop_assert_eq!(sorted.len(), heroes.len());

        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.stat(key) <= b.stat(key));
            if a.stat(key) == b.stat(key) {
                // ids are load positions
                prop_assert!(a.id < b.id);
            }
        }
    }

    #[test]
    fn prop_name_descending_non_increasing(heroes in arb_heroes()) {
        let sorted = sort_by_name_descending(&heroes);
        prop_assert_eq!(sorted.len(), heroes.len());
        for pair in sorted.windows(2) {
            prop_assert_ne!(cmp_ignore_case(&pair[0].name, &pair[1].name), Ordering::Less);
        }
    }

    #[test]
    fn prop_binary_search_finds_every_present_name(heroes in arb_heroes()) {
        let sorted = sort_by_name_ascending(&heroes);
        for hero in &heroes {
            let index = binary_search_by_name(&sorted, &hero.name);
            prop_assert!(index.is_some());
            let found = &sorted[index.unwrap()];
            prop_assert_eq!(cmp_ignore_case(&found.name, &hero.name), Ordering::Equal);
        }
    }

    #[test]
    fn prop_binary_search_absent_is_none(heroes in arb_heroes(), probe in "[0-9]{1,4}") {
        // generated names never start with a digit
        let sorted = sort_by_name_ascending(&heroes);
        prop_assert_eq!(binary_search_by_name(&sorted, &probe), None);
    }

    #[test]
    fn prop_group_index_partitions(heroes in arb_heroes()) {
        let index = GroupIndex::build(&heroes);
        let named = heroes.iter().filter(|h| !h.name.is_empty()).count();
        prop_assert_eq!(index.total(), named);

        for (letter, bucket) in index.iter() {
            for hero in bucket {
                prop_assert_eq!(first_letter_key(&hero.name), Some(letter));
            }
        }
    }

    #[test]
    fn prop_add_then_find(heroes in arb_heroes(), extra in arb_hero()) {
        let mut store = HeroStore::new(heroes);
        let name = extra.name.clone();
        store.add(extra);
        prop_assert!(store.find_by_name(&name).is_some());
    }

    #[test]
    fn prop_remove_then_not_found(heroes in arb_heroes()) {
        let mut store = HeroStore::new(heroes.clone());
        for hero in &heroes {
            store.remove_by_name(&hero.name);
            prop_assert!(store.find_by_name(&hero.name).is_none());
        }
        prop_assert!(store.is_empty());
    }

    #[test]
    fn prop_prefix_never_panics(prefix in "\\PC{0,6}", word in "\\PC{0,6}") {
        let matched = is_prefix(&prefix, &word);
        if prefix.chars().count() > word.chars().count() {
            prop_assert!(!matched);
        }
    }

    #[test]
    fn prop_prefix_removal_partitions(heroes in arb_heroes(), prefix in "[a-zA-Z]{0,2}") {
        let mut store = HeroStore::new(heroes.clone());
        let removed = store.remove_all_with_prefix(&prefix);

        prop_assert_eq!(removed.len() + store.len(), heroes.len());
        prop_assert!(removed.iter().all(|h| is_prefix(&prefix, &h.name)));
        prop_assert!(store.records().iter().all(|h| !is_prefix(&prefix, &h.name)));
    }
}
