//! Character-level and structural text reversal

use crate::segmenter::Sentence;
use regex::Regex;
use std::sync::OnceLock;

static SPACE_BEFORE_PUNCTUATION: OnceLock<Regex> = OnceLock::new();

fn space_before_punctuation() -> &'static Regex {
    SPACE_BEFORE_PUNCTUATION.get_or_init(|| {
        Regex::new(r#" ([.,:;'"!?\[\]\-])"#).expect("punctuation pattern is valid")
    })
}

/// `text` reversed character by character
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Reverse the order of sentences and of the tokens inside each sentence,
/// leaving every token readable
///
/// `sentences` are given in document order. Punctuation is attached to the
/// token before it and runs of whitespace are collapsed.
pub fn reverse_words_intact<'a, I>(sentences: I) -> String
where
    I: IntoIterator<Item = &'a Sentence>,
{
    let sentences: Vec<&Sentence> = sentences.into_iter().collect();
    let joined = sentences
        .iter()
        .rev()
        .map(|sentence| {
            sentence
                .iter()
                .rev()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" ");

    let attached = space_before_punctuation().replace_all(&joined, "$1");
    attached.split_whitespace().collect::<Vec<_>>().join(" ")
}
