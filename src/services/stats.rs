//! Frequency helpers shared by the reporters.
//!
//! Ties are always resolved towards the smallest value in sorted order so
//! repeated runs over the same rows print the same answer.

use std::collections::BTreeMap;

fn count<T: Ord, I: IntoIterator<Item = T>>(values: I) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Counts of each distinct value, most frequent first, ties by value.
pub fn value_counts<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Vec<(T, usize)> {
    let mut counts: Vec<(T, usize)> = count(values).into_iter().collect();
    // stable: equal counts keep ascending key order from the map
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value with its count, or `None` for no input.
pub fn mode_with_count<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Option<(T, usize)> {
    let mut best: Option<(T, usize)> = None;
    for (v, n) in count(values) {
        if best.as_ref().is_none_or(|(_, top)| n > *top) {
            best = Some((v, n));
        }
    }
    best
}

pub fn mode<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    mode_with_count(values).map(|(v, _)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_picks_most_frequent() {
        assert_eq!(mode([3, 1, 3, 2, 3, 1]), Some(3));
        assert_eq!(mode_with_count(["b", "a", "b"]), Some(("b", 2)));
    }

    #[test]
    fn mode_breaks_ties_towards_smallest_value() {
        assert_eq!(mode([9, 4, 9, 4, 7]), Some(4));
        assert_eq!(mode(["Tuesday", "Monday"]), Some("Monday"));
        assert_eq!(mode([("b", "a"), ("a", "z"), ("b", "a"), ("a", "z")]), Some(("a", "z")));
    }

    #[test]
    fn mode_of_nothing_is_none() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn value_counts_orders_by_count_then_value() {
        let counts = value_counts([
            "Subscriber",
            "Customer",
            "Subscriber",
            "Dependent",
            "Customer",
            "Subscriber",
        ]);
        assert_eq!(
            counts,
            vec![("Subscriber", 3), ("Customer", 2), ("Dependent", 1)]
        );

        let tied = value_counts(["Male", "Female"]);
        assert_eq!(tied, vec![("Female", 1), ("Male", 1)]);
    }
}
