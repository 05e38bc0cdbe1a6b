//! Metrics engine
//!
//! [`analyze`] computes every statistic from a [`SegmentedText`]. Each
//! statistic is an independent function in one of the submodules; this
//! module only assembles the result record.

pub mod frequency;
pub mod palindrome;
pub mod ranking;
pub mod reversal;

pub use frequency::RankedTable;

use crate::segmenter::SegmentedText;
use serde::Serialize;

/// Key and human readable title of every reported metric, in report order
pub const METRICS: &[(&str, &str)] = &[
    ("paragraphs", "The number of paragraphs"),
    ("sentences", "The number of sentences"),
    ("words", "The number of words"),
    ("characters", "The number of characters"),
    ("characters_frequency", "Frequency of characters"),
    ("characters_distribution", "Distribution of characters"),
    ("average_word_length", "The average word length"),
    ("average_words_in_sentence", "The average number of words in a sentence"),
    ("most_used_words", "Top most used words"),
    ("longest_words", "Top longest words"),
    ("shortest_words", "Top shortest words"),
    ("longest_sentences", "Top longest sentences"),
    ("shortest_sentences", "Top shortest sentences"),
    ("palindromes", "Palindrome words"),
    ("palindrome_count", "The number of palindrome words"),
    ("longest_palindromes", "Top longest palindrome words"),
    ("is_text_palindrome", "Is the whole text a palindrome"),
    ("is_all_words_palindromes", "Are all words in the text palindromes"),
    ("reversed_text", "Reversed text"),
    ("reversed_words_intact", "Reversed text with the characters order in the words kept intact"),
];

/// Human readable title of a metric key
pub fn metric_title(key: &str) -> Option<&'static str> {
    METRICS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, title)| *title)
}

/// Every statistic computed for one document
///
/// Serializes as a mapping from metric key to value, in [`METRICS`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMetrics {
    pub paragraphs: usize,
    pub sentences: usize,
    pub words: usize,
    pub characters: usize,
    pub characters_frequency: RankedTable<char, usize>,
    pub characters_distribution: RankedTable<char, f64>,
    pub average_word_length: usize,
    pub average_words_in_sentence: usize,
    pub most_used_words: RankedTable<String, usize>,
    pub longest_words: Vec<String>,
    pub shortest_words: Vec<String>,
    pub longest_sentences: Vec<String>,
    pub shortest_sentences: Vec<String>,
    pub palindromes: Vec<String>,
    pub palindrome_count: usize,
    pub longest_palindromes: Vec<String>,
    pub is_text_palindrome: bool,
    pub is_all_words_palindromes: bool,
    pub reversed_text: String,
    pub reversed_words_intact: String,
}

/// Compute all metrics, using `top_n` entries for every ranked list
pub fn analyze(text: &SegmentedText, top_n: usize) -> TextMetrics {
    let words = text.words();
    let sentences = text.sentences();

    let characters_frequency = frequency::character_frequency(text.characters());
    let characters_distribution = frequency::character_distribution(&characters_frequency);

    let palindromes = palindrome::palindrome_words(words);
    let longest_palindromes = ranking::longest(&palindromes, top_n);

    TextMetrics {
        paragraphs: text.paragraphs().len(),
        sentences: sentences.len(),
        words: words.len(),
        characters: text.characters().len(),
        characters_frequency,
        characters_distribution,
        average_word_length: frequency::average_word_length(words),
        average_words_in_sentence: frequency::average_sentence_length(sentences),
        most_used_words: frequency::most_used_words(words, top_n),
        longest_words: ranking::longest_words(words, top_n),
        shortest_words: ranking::shortest_words(words, top_n),
        longest_sentences: ranking::longest_sentences(sentences, top_n),
        shortest_sentences: ranking::shortest_sentences(sentences, top_n),
        palindrome_count: palindromes.len(),
        longest_palindromes,
        is_text_palindrome: palindrome::is_text_palindrome(text.raw().text()),
        is_all_words_palindromes: palindrome::is_all_words_palindromes(words, &palindromes),
        palindromes,
        reversed_text: reversal::reverse_text(text.raw().text()),
        reversed_words_intact: reversal::reverse_words_intact(text.sentences_in_document_order()),
    }
}
