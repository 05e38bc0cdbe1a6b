//! End-to-end tests for the complete analysis pipeline

use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use textlens_core::{
    AnalyzerConfig, Input, RawText, SourceKind, StopWords, TextAnalyzer, TextError, TextSource,
};

const STORY: &str = "\
The fox jumped over the fence. The fox was quick!

A dog watched the fox. The dog did nothing at all.
Noon came and the dog slept.";

#[test]
fn test_complete_pipeline_on_story() {
    let analyzer = TextAnalyzer::new();
    let metrics = analyzer.analyze_text("story.txt", STORY).metrics;

    assert_eq!(metrics.paragraphs, 2);
    assert_eq!(metrics.sentences, 5);
    // fox jumped fence fox quick dog watched fox dog nothing noon came dog slept
    assert_eq!(metrics.words, 14);

    let most_used: Vec<(&str, usize)> = metrics
        .most_used_words
        .iter()
        .map(|(word, count)| (word.as_str(), *count))
        .collect();
    assert_eq!(most_used[0], ("fox", 3));
    assert_eq!(most_used[1], ("dog", 3));

    assert_eq!(metrics.longest_words[0], "watched");
    assert_eq!(metrics.palindromes, vec!["noon"]);
    assert!(!metrics.is_all_words_palindromes);
    assert_eq!(metrics.longest_sentences[0], "The fox jumped over the fence .");
}

#[test]
fn test_file_input_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("palindrome.txt");
    fs::write(&path, "Madam Anna sees a deed.").unwrap();

    let analysis = TextAnalyzer::new()
        .analyze_source(&Input::from_file(&path))
        .unwrap();

    assert_eq!(analysis.identifier, "palindrome.txt");
    assert!(analysis.metrics.is_all_words_palindromes);
    assert_eq!(analysis.metrics.palindrome_count, 4);
}

#[test]
fn test_whole_text_palindrome() {
    let metrics = TextAnalyzer::new()
        .analyze_text("panama.txt", "A man, a plan, a canal: Panama!")
        .metrics;
    assert!(metrics.is_text_palindrome);
}

#[test]
fn test_repeated_palindromes_still_count_as_all_palindromes() {
    let metrics = TextAnalyzer::new()
        .analyze_text("repeat.txt", "Deed deed deed. Noon noon.")
        .metrics;
    assert_eq!(metrics.words, 5);
    assert_eq!(metrics.palindromes, vec!["deed", "noon"]);
    assert!(metrics.is_all_words_palindromes);
}

#[test]
fn test_only_punctuation_and_digits() {
    let metrics = TextAnalyzer::new()
        .analyze_text("numbers.txt", "1, 2, 3... 42!")
        .metrics;
    assert_eq!(metrics.words, 0);
    assert_eq!(metrics.characters, 0);
    assert!(metrics.characters_distribution.is_empty());
    assert_eq!(metrics.average_word_length, 0);
    assert!(metrics.sentences > 0);
}

#[test]
fn test_unicode_text() {
    let metrics = TextAnalyzer::new()
        .analyze_text("cafe.txt", "Café über naïve. Été!")
        .metrics;
    assert_eq!(metrics.words, 4);
    assert!(metrics.palindromes.contains(&"été".to_string()));
    assert_eq!(metrics.reversed_text, "!étÉ .evïan rebü éfaC");
}

#[test]
fn test_config_and_stop_words_from_toml() {
    let stop_words = StopWords::from_toml_str(
        "[metadata]\nlanguage = \"tiny\"\n\n[stopwords]\nwords = [\"fox\"]\n",
    )
    .unwrap();
    let config = AnalyzerConfig::builder().top_n(2).build().unwrap();
    let analyzer = TextAnalyzer::with_config(config, Arc::new(stop_words));

    let metrics = analyzer.analyze_text("story.txt", STORY).metrics;
    assert!(!metrics.most_used_words.iter().any(|(word, _)| word == "fox"));
    assert_eq!(metrics.most_used_words.len(), 2);
    assert_eq!(metrics.longest_words.len(), 2);
}

#[test]
fn test_source_shape_check() {
    assert_eq!(SourceKind::classify("story.txt").unwrap(), SourceKind::LocalFile);
    assert!(matches!(
        SourceKind::classify("story.docx"),
        Err(TextError::UnsupportedSource { .. })
    ));
}

#[test]
fn test_raw_text_is_its_own_source() {
    let raw = RawText::new("raw.txt", "Level.");
    assert_eq!(raw.identifier(), "raw.txt");
    let analysis = TextAnalyzer::new().analyze_source(&raw).unwrap();
    assert_eq!(analysis.metrics.palindromes, vec!["level"]);
}

#[test]
fn test_repeated_runs_are_identical() {
    let analyzer = TextAnalyzer::new();
    let first = analyzer.analyze_text("story.txt", STORY).metrics;
    let second = analyzer.analyze_text("story.txt", STORY).metrics;
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
