//! Exchange (bubble) sort over keyed rows.
//!
//! Rows with equal keys keep their relative order in both directions.

use super::SortDirection;

/// A row paired with the value it is sorted by.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Keyed<K, T> {
    pub key: K,
    pub row: T,
}

/// Sorts `entries` by key in place.
///
/// Each pass walks the whole slice and swaps out-of-order neighbours; passes repeat until one
/// makes no swap. Ascending passes walk left to right and swap when the left key is greater.
/// Descending passes walk right to left and swap when the right key is greater.
pub(crate) fn exchange_sort<K: PartialOrd, T>(
    entries: &mut [Keyed<K, T>],
    direction: SortDirection,
) {
    let len = entries.len();
    if len < 2 {
        return;
    }

    let mut swapped = true;
    while swapped {
        swapped = false;
        match direction {
            SortDirection::Ascending => {
                for i in 0..len - 1 {
                    if entries[i].key > entries[i + 1].key {
                        entries.swap(i, i + 1);
                        swapped = true;
                    }
                }
            }
            SortDirection::Descending => {
                for i in (1..len).rev() {
                    if entries[i].key > entries[i - 1].key {
                        entries.swap(i, i - 1);
                        swapped = true;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed<K: Copy>(keys: &[K]) -> Vec<Keyed<K, usize>> {
        keys.iter()
            .enumerate()
            .map(|(row, &key)| Keyed { key, row })
            .collect()
    }

    fn rows<K>(entries: &[Keyed<K, usize>]) -> Vec<usize> {
        entries.iter().map(|entry| entry.row).collect()
    }

    #[test]
    fn test_ascending() {
        let mut entries = keyed(&[3.0, 1.0, 2.0, -4.0]);
        exchange_sort(&mut entries, SortDirection::Ascending);
        assert_eq!(rows(&entries), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_descending() {
        let mut entries = keyed(&["b", "c", "a"]);
        exchange_sort(&mut entries, SortDirection::Descending);
        assert_eq!(rows(&entries), vec![1, 0, 2]);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let mut entries = keyed(&[2, 1, 2, 1]);
        exchange_sort(&mut entries, SortDirection::Ascending);
        assert_eq!(rows(&entries), vec![1, 3, 0, 2]);

        let mut entries = keyed(&[1, 2, 1, 2]);
        exchange_sort(&mut entries, SortDirection::Descending);
        assert_eq!(rows(&entries), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_short_inputs() {
        let mut empty: Vec<Keyed<i32, usize>> = Vec::new();
        exchange_sort(&mut empty, SortDirection::Descending);
        assert!(empty.is_empty());

        let mut single = keyed(&[5]);
        exchange_sort(&mut single, SortDirection::Ascending);
        assert_eq!(rows(&single), vec![0]);
    }
}
