//! The hero record store
//!
//! [`HeroStore`] owns the records in load order and a lazily built
//! [`GroupIndex`]. The index is rebuilt on the first grouped access after it
//! has been cleared, and it is cleared by every mutation except
//! [`HeroStore::remove_by_name_via_group`], which edits records and index
//! together.

use crate::compare::is_prefix;
use crate::constants::UNLIMITED;
use crate::error::StoreError;
use crate::group::GroupIndex;
use crate::search::binary_search_by_name;
use crate::sort::{sort_by_name_ascending, sort_by_name_descending, sort_by_stat};
use crate::source::RecordSource;
use crate::types::{Hero, StatKey};

#[cfg(feature = "logging")]
use tracing::{debug, info, warn};

/// In-memory collection of hero records
#[derive(Debug, Clone, Default)]
pub struct HeroStore {
    heroes: Vec<Hero>,
    groups: GroupIndex,
}

impl HeroStore {
    /// Create a store holding `heroes` in the given order
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self {
            heroes,
            groups: GroupIndex::default(),
        }
    }

    /// Load every record from `source`, propagating any load failure
    pub fn try_from_source<S: RecordSource + ?Sized>(source: &S) -> Result<Self, StoreError> {
        let heroes = source.load_records()?;

        #[cfg(feature = "logging")]
        info!("Loaded {} heroes", heroes.len());

        Ok(Self::new(heroes))
    }

    /// Load every record from `source`, falling back to an empty store
    ///
    /// An empty store may therefore mean the load failed; use
    /// [`HeroStore::try_from_source`] to tell the two apart.
    pub fn from_source<S: RecordSource + ?Sized>(source: &S) -> Self {
        match Self::try_from_source(source) {
            Ok(store) => store,
            Err(_err) => {
                #[cfg(feature = "logging")]
                warn!("Failed to load heroes, starting empty: {}", _err);

                Self::default()
            }
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    /// True when the store holds no record
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// All records in current order
    pub fn records(&self) -> &[Hero] {
        &self.heroes
    }

    /// Record at `index` in current order
    pub fn get(&self, index: usize) -> Option<&Hero> {
        self.heroes.get(index)
    }

    /// Up to `limit` records in current order; `0` means all of them
    pub fn list(&self, limit: usize) -> impl Iterator<Item = &Hero> {
        let take = if limit == UNLIMITED {
            self.heroes.len()
        } else {
            limit
        };
        self.heroes.iter().take(take)
    }

    /// Append a record; names are not required to be unique
    pub fn add(&mut self, hero: Hero) {
        self.heroes.push(hero);
        self.invalidate_groups();
    }

    /// First record whose name equals `name` exactly
    pub fn find_by_name(&self, name: &str) -> Option<&Hero> {
        self.heroes.iter().find(|hero| hero.name == name)
    }

    /// Remove every record whose name equals `name` exactly
    ///
    /// Returns whether anything was removed.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        let before = self.heroes.len();
        self.heroes.retain(|hero| hero.name != name);
        let removed = before - self.heroes.len();

        #[cfg(feature = "logging")]
        debug!("Removed {} heroes named {:?}", removed, name);

        if removed > 0 {
            self.invalidate_groups();
        }
        removed > 0
    }

    /// Replace the first record whose name equals `name` exactly
    ///
    /// Returns whether a record was replaced.
    pub fn update_by_name(&mut self, name: &str, hero: Hero) -> bool {
        match self.heroes.iter_mut().find(|h| h.name == name) {
            Some(slot) => {
                *slot = hero;
                self.invalidate_groups();
                true
            }
            None => false,
        }
    }

    /// Remove every record whose name starts with `prefix`, ignoring case
    ///
    /// Returns the removed records in store order.
    pub fn remove_all_with_prefix(&mut self, prefix: &str) -> Vec<Hero> {
        let (removed, kept): (Vec<Hero>, Vec<Hero>) = std::mem::take(&mut self.heroes)
            .into_iter()
            .partition(|hero| is_prefix(prefix, &hero.name));
        self.heroes = kept;

        #[cfg(feature = "logging")]
        debug!("Removed {} heroes with prefix {:?}", removed.len(), prefix);

        if !removed.is_empty() {
            self.invalidate_groups();
        }
        removed
    }

    /// Records whose name starts with `prefix`, ignoring case, in current order
    pub fn starts_with(&self, prefix: &str) -> Vec<&Hero> {
        self.heroes
            .iter()
            .filter(|hero| is_prefix(prefix, &hero.name))
            .collect()
    }

    /// New sequence sorted ascending by one power rating (stable merge sort)
    pub fn sort_by_attribute(&self, key: StatKey) -> Vec<Hero> {
        sort_by_stat(&self.heroes, key)
    }

    /// New sequence sorted descending by case-insensitive name (exchange sort)
    pub fn sort_by_name_descending(&self) -> Vec<Hero> {
        sort_by_name_descending(&self.heroes)
    }

    /// New sequence sorted ascending by case-insensitive name (merge sort)
    pub fn sort_by_name_ascending(&self) -> Vec<Hero> {
        sort_by_name_ascending(&self.heroes)
    }

    /// Binary search for `name` over the ascending name-sorted view
    ///
    /// The returned index refers to that sorted view, not to [`records`].
    ///
    /// [`records`]: HeroStore::records
    pub fn search_by_name(&self, name: &str) -> Option<(usize, Hero)> {
        let mut sorted = self.sort_by_name_ascending();
        let index = binary_search_by_name(&sorted, name)?;

        #[cfg(feature = "logging")]
        debug!("Binary search found {:?} at index {}", name, index);

        Some((index, sorted.swap_remove(index)))
    }

    /// Rebuild the first-letter index from the current records
    pub fn group_by_first_letter(&mut self) -> &GroupIndex {
        self.groups = GroupIndex::build(&self.heroes);
        &self.groups
    }

    /// Drop the first-letter index; the next grouped access rebuilds it
    pub fn invalidate_groups(&mut self) {
        self.groups = GroupIndex::default();
    }

    /// The first-letter index, built on demand
    pub fn groups(&mut self) -> &GroupIndex {
        if self.groups.is_empty() {
            self.group_by_first_letter();
        }
        &self.groups
    }

    /// `(letter, count)` per bucket, ascending by letter
    pub fn counts_by_group(&mut self) -> Vec<(char, usize)> {
        self.groups().counts()
    }

    /// Records whose name starts with `letter` (any case), in store order
    pub fn find_by_first_letter(&mut self, letter: char) -> Option<&[Hero]> {
        self.groups().bucket(letter)
    }

    /// Remove one record named `name` (ignoring case) through the index
    ///
    /// The record is removed from both its bucket and the store, and an
    /// emptied bucket is evicted. Returns the removed record.
    pub fn remove_by_name_via_group(&mut self, name: &str) -> Option<Hero> {
        let (key, position) = self.groups().locate(name)?;
        let hero = self.groups.take(key, position)?;

        if let Some(index) = self.heroes.iter().position(|h| *h == hero) {
            self.heroes.remove(index);
        }

        #[cfg(feature = "logging")]
        debug!("Removed {:?} (id {}) through group '{}'", hero.name, hero.id, key);

        Some(hero)
    }
}

impl From<Vec<Hero>> for HeroStore {
    fn from(heroes: Vec<Hero>) -> Self {
        Self::new(heroes)
    }
}
