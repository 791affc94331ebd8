//! First-letter bucket index
//!
//! Buckets are keyed by the lowercased first character of a hero's name and
//! hold copies of the records in store order. Records with an empty name are
//! not indexed.

use crate::compare::{cmp_ignore_case, first_letter_key, fold_char};
use crate::search::binary_search_by_name;
use crate::sort::merge_sort_by;
use crate::types::Hero;
use core::cmp::Ordering;
use std::collections::BTreeMap;

#[cfg(feature = "logging")]
use tracing::debug;

/// Records partitioned by lowercase first letter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupIndex {
    buckets: BTreeMap<char, Vec<Hero>>,
}

impl GroupIndex {
    /// Build the index with one pass over `heroes`
    pub fn build(heroes: &[Hero]) -> Self {
        let mut buckets: BTreeMap<char, Vec<Hero>> = BTreeMap::new();
        for hero in heroes {
            if let Some(key) = first_letter_key(&hero.name) {
                buckets.entry(key).or_default().push(hero.clone());
            }
        }

        #[cfg(feature = "logging")]
        debug!(
            "Grouped {} heroes into {} buckets",
            heroes.len(),
            buckets.len()
        );

        Self { buckets }
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when no bucket exists
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of indexed records
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// `(letter, count)` for every bucket, ascending by letter
    pub fn counts(&self) -> Vec<(char, usize)> {
        self.buckets
            .iter()
            .map(|(letter, heroes)| (*letter, heroes.len()))
            .collect()
    }

    /// Members of the bucket for `letter` (any case), in store order
    pub fn bucket(&self, letter: char) -> Option<&[Hero]> {
        self.buckets.get(&fold_char(letter)).map(Vec::as_slice)
    }

    /// Iterate over buckets ascending by letter
    pub fn iter(&self) -> impl Iterator<Item = (char, &[Hero])> {
        self.buckets
            .iter()
            .map(|(letter, heroes)| (*letter, heroes.as_slice()))
    }

    /// Locate `name` inside its bucket
    ///
    /// The bucket is kept in store order, so the binary search runs over a
    /// name-sorted view of it. Returns the position within the bucket.
    pub fn locate(&self, name: &str) -> Option<(char, usize)> {
        let key = first_letter_key(name)?;
        let bucket = self.buckets.get(&key)?;

        let mut view: Vec<(usize, &Hero)> = bucket.iter().enumerate().collect();
        merge_sort_by(&mut view, &by_name);
        let sorted: Vec<&Hero> = view.iter().map(|(_, hero)| *hero).collect();

        binary_search_by_name(&sorted, name).map(|hit| (key, view[hit].0))
    }

    /// Remove the entry at `position` of bucket `key`, evicting an emptied bucket
    pub fn take(&mut self, key: char, position: usize) -> Option<Hero> {
        let bucket = self.buckets.get_mut(&key)?;
        if position >= bucket.len() {
            return None;
        }
        let hero = bucket.remove(position);
        if bucket.is_empty() {
            self.buckets.remove(&key);
        }
        Some(hero)
    }
}

fn by_name(a: &(usize, &Hero), b: &(usize, &Hero)) -> Ordering {
    cmp_ignore_case(&a.1.name, &b.1.name)
}
