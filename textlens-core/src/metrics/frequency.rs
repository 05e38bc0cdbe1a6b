//! Frequency tables, distributions and averages

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

/// Ordered key/value table, serialized as a map in rank order
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTable<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for RankedTable<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq, V> RankedTable<K, V> {
    /// Value stored for `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }
}

impl<K, V> RankedTable<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in rank order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Keys in rank order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Values in rank order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Keep only the first `n` entries
    pub fn truncated(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    /// Apply `f` to every value, keeping the order
    pub fn map_values<W>(&self, mut f: impl FnMut(&V) -> W) -> RankedTable<K, W>
    where
        K: Clone,
    {
        RankedTable {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), f(value)))
                .collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for RankedTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Serialize, V: Serialize> Serialize for RankedTable<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Count items, most frequent first
///
/// Items with equal counts keep the order in which they were first seen.
pub fn count_by_first_occurrence<K, I>(items: I) -> RankedTable<K, usize>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut entries: Vec<(K, usize)> = Vec::new();

    for item in items {
        match positions.get(&item) {
            Some(&position) => entries[position].1 += 1,
            None => {
                positions.insert(item.clone(), entries.len());
                entries.push((item, 1));
            }
        }
    }

    // stable: ties keep first-occurrence order
    entries.sort_by_key(|(_, count)| Reverse(*count));
    RankedTable { entries }
}

/// Count of each distinct character, most frequent first
pub fn character_frequency(characters: &[char]) -> RankedTable<char, usize> {
    count_by_first_occurrence(characters.iter().copied())
}

/// Share of each character in percent, rounded to 3 decimals
///
/// Empty when there are no characters.
pub fn character_distribution(frequency: &RankedTable<char, usize>) -> RankedTable<char, f64> {
    let total: usize = frequency.values().sum();
    if total == 0 {
        return RankedTable::default();
    }

    frequency.map_values(|&count| round_half_even(count as f64 * 100.0 / total as f64, 3))
}

/// The `n` most frequent words with their counts
pub fn most_used_words(words: &[String], n: usize) -> RankedTable<String, usize> {
    count_by_first_occurrence(words.iter().cloned()).truncated(n)
}

/// Mean character length of `words`, rounded to the nearest integer
pub fn average_word_length(words: &[String]) -> usize {
    let total: usize = words.iter().map(|word| word.chars().count()).sum();
    rounded_mean(total, words.len())
}

/// Mean token count of `sentences`, rounded to the nearest integer
pub fn average_sentence_length<T>(sentences: &[Vec<T>]) -> usize {
    let total: usize = sentences.iter().map(Vec::len).sum();
    rounded_mean(total, sentences.len())
}

fn rounded_mean(total: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    round_half_even(total as f64 / count as f64, 0) as usize
}

/// Round to `decimals` places, ties to even
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    // Snap values like 12.4999999 that stand for an exact tie.
    let nearest_half = (scaled * 2.0).round() / 2.0;
    let scaled = if (scaled - nearest_half).abs() < 1e-9 {
        nearest_half
    } else {
        scaled
    };
    scaled.round_ties_even() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_count_orders_by_count_then_first_occurrence() {
        let table = count_by_first_occurrence(["b", "a", "c", "a", "c", "d"]);
        let keys: Vec<&str> = table.keys().copied().collect();
        assert_eq!(keys, vec!["a", "c", "b", "d"]);
        assert_eq!(table.get(&"a"), Some(&2));
        assert_eq!(table.get(&"d"), Some(&1));
        assert_eq!(table.get(&"z"), None);
    }

    #[test]
    fn test_character_frequency() {
        let table = character_frequency(&['d', 'e', 'e', 'd', 'x']);
        assert_eq!(table.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(), vec![('d', 2), ('e', 2), ('x', 1)]);
    }

    #[test]
    fn test_character_distribution() {
        let frequency = character_frequency(&['a', 'a', 'b']);
        let distribution = character_distribution(&frequency);
        assert_eq!(distribution.get(&'a'), Some(&66.667));
        assert_eq!(distribution.get(&'b'), Some(&33.333));
    }

    #[test]
    fn test_character_distribution_empty() {
        let distribution = character_distribution(&character_frequency(&[]));
        assert!(distribution.is_empty());
    }

    #[test]
    fn test_most_used_words_truncates() {
        let table = most_used_words(&words(&["deed", "anna", "deed", "noon"]), 2);
        assert_eq!(table.len(), 2);
        let keys: Vec<&String> = table.keys().collect();
        assert_eq!(keys, vec!["deed", "anna"]);

        let all = most_used_words(&words(&["deed"]), 10);
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_averages() {
        assert_eq!(average_word_length(&words(&["abcd", "ab", "abc"])), 3);
        assert_eq!(average_word_length(&[]), 0);
        // 2.5 rounds to even
        assert_eq!(average_word_length(&words(&["abc", "ab"])), 2);
        // 3.5 rounds to even
        assert_eq!(average_word_length(&words(&["abcd", "abc"])), 4);

        let sentences = vec![vec!["a"; 4], vec!["b"; 2]];
        assert_eq!(average_sentence_length(&sentences), 3);
        assert_eq!(average_sentence_length::<String>(&[]), 0);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(0.5, 0), 0.0);
        assert_eq!(round_half_even(1.5, 0), 2.0);
        assert_eq!(round_half_even(2.675, 2), 2.68);
        assert_eq!(round_half_even(12.3455, 3), 12.346);
        assert_eq!(round_half_even(12.3465, 3), 12.346);
        assert_eq!(round_half_even(33.33333, 3), 33.333);
    }

    #[test]
    fn test_ranked_table_serializes_in_rank_order() {
        let table = count_by_first_occurrence(["z", "a", "a"]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"a":2,"z":1}"#);

        let chars = character_frequency(&['x', 'y', 'y']);
        assert_eq!(serde_json::to_string(&chars).unwrap(), r#"{"y":2,"x":1}"#);
    }
}
