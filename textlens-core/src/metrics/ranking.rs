//! Longest and shortest words and sentences
//!
//! Both rankings work on deduplicated sequences that keep the first
//! occurrence of every element. Because the segmenter sorts words and
//! sentences longest first with a stable sort, the deduplicated sequence is
//! still ordered longest first and the shortest elements are its tail.

use crate::segmenter::Sentence;
use std::collections::HashSet;

/// Distinct words, in the order of their first occurrence
pub fn unique_words(words: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    words
        .iter()
        .map(String::as_str)
        .filter(|word| seen.insert(*word))
        .collect()
}

/// Distinct sentences by exact token sequence, in the order of their first occurrence
pub fn unique_sentences(sentences: &[Sentence]) -> Vec<&Sentence> {
    let mut seen = HashSet::new();
    sentences
        .iter()
        .filter(|&sentence| seen.insert(sentence.as_slice()))
        .collect()
}

/// First `n` elements of a longest-first sequence
pub fn longest<T: Clone>(ranked: &[T], n: usize) -> Vec<T> {
    ranked.iter().take(n).cloned().collect()
}

/// Last `n` elements of a longest-first sequence, shortest first
pub fn shortest<T: Clone>(ranked: &[T], n: usize) -> Vec<T> {
    ranked.iter().rev().take(n).cloned().collect()
}

/// The `n` longest distinct words
pub fn longest_words(words: &[String], n: usize) -> Vec<String> {
    longest(&unique_words(words), n)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// The `n` shortest distinct words, shortest first
pub fn shortest_words(words: &[String], n: usize) -> Vec<String> {
    shortest(&unique_words(words), n)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// The `n` longest distinct sentences, space-joined
pub fn longest_sentences(sentences: &[Sentence], n: usize) -> Vec<String> {
    longest(&unique_sentences(sentences), n)
        .into_iter()
        .map(|sentence| sentence.join(" "))
        .collect()
}

/// The `n` shortest distinct sentences, space-joined, shortest first
pub fn shortest_sentences(sentences: &[Sentence], n: usize) -> Vec<String> {
    shortest(&unique_sentences(sentences), n)
        .into_iter()
        .map(|sentence| sentence.join(" "))
        .collect()
}
