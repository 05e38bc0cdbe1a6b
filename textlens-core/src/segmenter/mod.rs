//! Segmentation of raw text into paragraphs, sentences, words and characters
//!
//! [`Segmenter::segment`] is a pure function of the input text and the
//! stop-word set. Its output, [`SegmentedText`], is immutable.
//!
//! # Ordering contract
//!
//! `sentences` and `words` are sorted by length, longest first, with a
//! stable sort: elements of equal length keep their document order. The
//! top-N longest/shortest metrics rely on this tie-break.

pub mod tokenizer;

use crate::config::StopWords;
use crate::source::RawText;
use std::cmp::Reverse;

/// Ordered tokens of one sentence
pub type Sentence = Vec<String>;

/// Ordered sentences of one paragraph
pub type Paragraph = Vec<Sentence>;

/// Analysis-ready view of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedText {
    raw: RawText,
    paragraphs: Vec<Paragraph>,
    sentences: Vec<Sentence>,
    words: Vec<String>,
    characters: Vec<char>,
}

impl SegmentedText {
    /// The document this view was derived from
    pub fn raw(&self) -> &RawText {
        &self.raw
    }

    /// Paragraphs in document order
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Sentences, longest first (stable)
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Sentences in document order
    pub fn sentences_in_document_order(&self) -> impl Iterator<Item = &Sentence> {
        self.paragraphs.iter().flatten()
    }

    /// Filtered, lower-cased words, longest first (stable)
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Characters of `words`, in `words` order
    pub fn characters(&self) -> &[char] {
        &self.characters
    }
}

/// Turns raw text into a [`SegmentedText`]
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    stop_words: &'a StopWords,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter that filters with the given stop words
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self { stop_words }
    }

    /// Segment a document
    pub fn segment(&self, raw: &RawText) -> SegmentedText {
        let paragraphs: Vec<Paragraph> = tokenizer::split_paragraphs(raw.text())
            .into_iter()
            .map(|paragraph| {
                tokenizer::split_sentences(paragraph)
                    .into_iter()
                    .map(tokenizer::tokenize)
                    .filter(|sentence| !sentence.is_empty())
                    .collect::<Paragraph>()
            })
            .filter(|paragraph| !paragraph.is_empty())
            .collect();

        let mut sentences: Vec<Sentence> = paragraphs.iter().flatten().cloned().collect();
        sentences.sort_by_key(|sentence| Reverse(sentence.len()));

        let mut words: Vec<String> = paragraphs
            .iter()
            .flatten()
            .flatten()
            .filter_map(|token| self.filter_word(token))
            .collect();
        words.sort_by_key(|word| Reverse(word.chars().count()));

        let characters = words.iter().flat_map(|word| word.chars()).collect();

        SegmentedText {
            raw: raw.clone(),
            paragraphs,
            sentences,
            words,
            characters,
        }
    }

    /// Lower-cased form of `token` if it is an alphabetic, non-stop word of
    /// at least two characters
    pub fn filter_word(&self, token: &str) -> Option<String> {
        let mut chars = token.chars();
        let is_long_enough = chars.next().is_some() && chars.next().is_some();
        if !is_long_enough || !token.chars().all(char::is_alphabetic) {
            return None;
        }

        let lowered = token.to_lowercase();
        if self.stop_words.contains(&lowered) {
            None
        } else {
            Some(lowered)
        }
    }
}
