use crate::chaining_hashmap::ChainingHashMap;
use crate::utils::hash_byte_sum;

/// Finds the most frequent element(s) of `items` and their shared frequency.
///
/// Frequencies are tallied in a [`ChainingHashMap`] sized at roughly a third
/// of the input, keyed by each element's string form and storing the
/// first-seen original value next to its running count. Ties are all
/// reported; result order follows the map's bucket-then-chain enumeration
/// order, which is hash and insertion dependent, not sorted.
///
/// An empty input yields `(vec![], 0)`.
///
/// ```rust
/// use probemap::find_mode;
///
/// let (mut modes, frequency) =
///     find_mode(&["apple", "apple", "grape", "melon", "melon", "peach"]);
/// modes.sort_unstable();
/// assert_eq!(modes, vec!["apple", "melon"]);
/// assert_eq!(frequency, 2);
/// ```
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn find_mode<T>(items: &[T]) -> (Vec<T>, usize)
where
    T: ToString + Clone,
{
    let mut counts: ChainingHashMap<(T, usize)> =
        ChainingHashMap::new(items.len() / 3, hash_byte_sum);

    for item in items {
        let key = item.to_string();
        if let Some((_, count)) = counts.get_mut(&key) {
            *count = count.saturating_add(1);
        } else {
            counts.put(&key, (item.clone(), 1));
        }
    }

    let mut modes = Vec::new();
    let mut best = 0;
    for key in counts.keys() {
        let Some((original, count)) = counts.get(&key) else {
            continue;
        };
        if *count > best {
            best = *count;
            modes.clear();
            modes.push(original.clone());
        } else if *count == best {
            modes.push(original.clone());
        }
    }

    (modes, best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_way_tie() {
        let (mut modes, frequency) =
            find_mode(&["apple", "apple", "grape", "melon", "melon", "peach"]);

        modes.sort_unstable();
        assert_eq!(modes, vec!["apple", "melon"]);
        assert_eq!(frequency, 2);
    }

    #[test]
    fn test_single_mode() {
        let input = [
            "Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu",
            "Ubuntu",
        ];
        let (modes, frequency) = find_mode(&input);

        assert_eq!(modes, vec!["Ubuntu"]);
        assert_eq!(frequency, 4);
    }

    #[test]
    fn test_all_unique_elements_tie() {
        let (mut modes, frequency) = find_mode(&["one", "two", "three", "four", "five"]);

        modes.sort_unstable();
        assert_eq!(modes, vec!["five", "four", "one", "three", "two"]);
        assert_eq!(frequency, 1);
    }

    #[test]
    fn test_three_way_tie() {
        let input = ["2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2"];
        let (mut modes, frequency) = find_mode(&input);

        modes.sort_unstable();
        assert_eq!(modes, vec!["2", "3", "4"]);
        assert_eq!(frequency, 3);
    }

    #[test]
    fn test_original_typed_results() {
        let (mut modes, frequency) = find_mode(&[1, 2, 2, 3, 3]);

        modes.sort_unstable();
        assert_eq!(modes, vec![2, 3]);
        assert_eq!(frequency, 2);
    }

    #[test]
    fn test_empty_input() {
        let (modes, frequency) = find_mode::<&str>(&[]);

        assert!(modes.is_empty());
        assert_eq!(frequency, 0);
    }

    #[test]
    fn test_short_input_clamps_capacity() {
        // Two elements give a requested capacity of zero; the map clamps it.
        let (modes, frequency) = find_mode(&["left", "left"]);

        assert_eq!(modes, vec!["left"]);
        assert_eq!(frequency, 2);
    }
}
