//! Recursive binary search over name-sorted records

use crate::compare::cmp_ignore_case;
use crate::types::Hero;
use core::borrow::Borrow;
use core::cmp::Ordering;

/// Find `name` in `heroes` by case-insensitive binary search
///
/// `heroes` must already be sorted ascending by case-insensitive name (see
/// [`crate::sort::sort_by_name_ascending`]). This is not checked; on an
/// unsorted slice the result is unspecified but the search still never reads
/// out of bounds. Returns the index of a matching record, or `None`.
pub fn binary_search_by_name<H: Borrow<Hero>>(heroes: &[H], name: &str) -> Option<usize> {
    search_range(heroes, name, 0, heroes.len())
}

// Searches the half-open range [low, high).
fn search_range<H: Borrow<Hero>>(
    heroes: &[H],
    name: &str,
    low: usize,
    high: usize,
) -> Option<usize> {
    if low >= high {
        return None;
    }

    let mid = low + (high - low) / 2;
    match cmp_ignore_case(name, &heroes[mid].borrow().name) {
        Ordering::Less => search_range(heroes, name, low, mid),
        Ordering::Greater => search_range(heroes, name, mid + 1, high),
        Ordering::Equal => Some(mid),
    }
}
