//! Ordered views over hero records
//!
//! Two strategies are provided on purpose:
//!
//! - [`merge_sort_by`]: stable, O(n log n), recursive top-down merge sort.
//! - [`exchange_sort_by`]: adjacent-swap (bubble) sort, O(n²) worst case.
//!
//! Both sort a caller-owned buffer; the `sort_by_*` helpers clone the input
//! first so the source records are never reordered.

use crate::compare::cmp_ignore_case;
use crate::types::{Hero, StatKey};
use core::cmp::Ordering;

#[cfg(feature = "logging")]
use tracing::debug;

/// Stable merge sort of `items` under `compare`
///
/// The range is split at `mid = (len - 1) / 2`, the halves `[0, mid]` and
/// `[mid + 1, len)` are sorted recursively and merged back. On ties the
/// left element is taken first, which keeps equal elements in input order.
pub fn merge_sort_by<T, F>(items: &mut [T], compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }

    let mid = (items.len() - 1) / 2;
    {
        let (left, right) = items.split_at_mut(mid + 1);
        merge_sort_by(left, compare);
        merge_sort_by(right, compare);
    }
    merge(items, mid + 1, compare);
}

fn merge<T, F>(items: &mut [T], split: usize, compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let left = items[..split].to_vec();
    let right = items[split..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        if compare(&left[i], &right[j]) != Ordering::Greater {
            items[k] = left[i].clone();
            i += 1;
        } else {
            items[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    while i < left.len() {
        items[k] = left[i].clone();
        i += 1;
        k += 1;
    }

    while j < right.len() {
        items[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}

/// Adjacent-swap sort of `items` under `compare`
///
/// Passes over the unsorted prefix swapping neighbours that compare
/// `Greater`, shrinking the prefix by one after each pass, until a pass makes
/// no swap. Equal neighbours are never swapped, so the sort is stable.
/// Returns the number of swaps performed.
pub fn exchange_sort_by<T, F>(items: &mut [T], compare: F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut swaps = 0;
    let mut n = items.len();

    loop {
        let mut swapped = false;
        for i in 1..n {
            if compare(&items[i - 1], &items[i]) == Ordering::Greater {
                items.swap(i - 1, i);
                swapped = true;
                swaps += 1;
            }
        }
        n = n.saturating_sub(1);
        if !swapped {
            break;
        }
    }

    swaps
}

/// Records ascending by one power rating, ties in input order
pub fn sort_by_stat(heroes: &[Hero], key: StatKey) -> Vec<Hero> {
    let mut sorted = heroes.to_vec();
    merge_sort_by(&mut sorted, &|a: &Hero, b: &Hero| a.stat(key).cmp(&b.stat(key)));

    #[cfg(feature = "logging")]
    debug!("Merge sorted {} heroes by {}", sorted.len(), key);

    sorted
}

/// Records ascending by case-insensitive name, ties in input order
pub fn sort_by_name_ascending(heroes: &[Hero]) -> Vec<Hero> {
    let mut sorted = heroes.to_vec();
    merge_sort_by(&mut sorted, &|a: &Hero, b: &Hero| cmp_ignore_case(&a.name, &b.name));
    sorted
}

/// Records descending by case-insensitive name, using the exchange sort
pub fn sort_by_name_descending(heroes: &[Hero]) -> Vec<Hero> {
    let mut sorted = heroes.to_vec();
    let _swaps = exchange_sort_by(&mut sorted, |a, b| cmp_ignore_case(&b.name, &a.name));

    #[cfg(feature = "logging")]
    debug!(
        "Exchange sorted {} heroes by name with {} swaps",
        sorted.len(),
        _swaps
    );

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PowerStats;

    fn with_speed(id: u32, speed: i32) -> Hero {
        Hero::new(id, format!("hero{}", id)).with_powerstats(PowerStats {
            speed,
            ..PowerStats::default()
        })
    }

    #[test]
    fn merge_sort_handles_trivial_inputs() {
        let mut empty: Vec<i32> = Vec::new();
        merge_sort_by(&mut empty, &|a: &i32, b: &i32| a.cmp(b));
        assert!(empty.is_empty());

        let mut one = vec![42];
        merge_sort_by(&mut one, &|a: &i32, b: &i32| a.cmp(b));
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn merge_sort_orders_integers() {
        let mut data = vec![5, 3, 9, 1, 1, 0, 7, 2];
        merge_sort_by(&mut data, &|a: &i32, b: &i32| a.cmp(b));
        assert_eq!(data, vec![0, 1, 1, 2, 3, 5, 7, 9]);
    }

    #[test]
    fn stat_sort_is_stable() {
        let heroes = vec![with_speed(1, 50), with_speed(2, 50), with_speed(3, 10)];
        let sorted = sort_by_stat(&heroes, StatKey::Speed);

        let ids: Vec<u32> = sorted.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        // source untouched
        assert_eq!(heroes[0].id, 1);
    }

    #[test]
    fn exchange_sort_counts_swaps() {
        let mut data = vec![3, 2, 1];
        let swaps = exchange_sort_by(&mut data, |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(swaps, 3);

        let mut sorted = vec![1, 2, 3];
        assert_eq!(exchange_sort_by(&mut sorted, |a: &i32, b: &i32| a.cmp(b)), 0);
    }

    #[test]
    fn name_descending_ignores_case_and_keeps_ties() {
        let heroes = vec![
            Hero::new(1, "batman"),
            Hero::new(2, "Aquaman"),
            Hero::new(3, "Cyclops"),
            Hero::new(4, "BATMAN"),
        ];
        let sorted = sort_by_name_descending(&heroes);

        let ids: Vec<u32> = sorted.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![3, 1, 4, 2]);
    }

    #[test]
    fn name_ascending_matches_descending_reversed_for_distinct_names() {
        let heroes = vec![
            Hero::new(1, "Storm"),
            Hero::new(2, "angel"),
            Hero::new(3, "Beast"),
        ];
        let asc: Vec<u32> = sort_by_name_ascending(&heroes).iter().map(|h| h.id).collect();
        let mut desc: Vec<u32> = sort_by_name_descending(&heroes).iter().map(|h| h.id).collect();
        desc.reverse();
        assert_eq!(asc, desc);
        assert_eq!(asc, vec![2, 3, 1]);
    }
}
