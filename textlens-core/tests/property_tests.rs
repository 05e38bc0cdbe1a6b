//! Property-based tests for the metrics engine

use proptest::prelude::*;
use textlens_core::metrics::palindrome::is_palindrome;
use textlens_core::metrics::reversal::reverse_text;
use textlens_core::TextAnalyzer;

/// Sentences built from a small alphabet so that repeats and palindromes occur
fn document() -> impl Strategy<Value = String> {
    let word = "[a-dA-D]{1,6}";
    let sentence = prop::collection::vec(word, 1..8).prop_map(|words| words.join(" ") + ".");
    let paragraph = prop::collection::vec(sentence, 1..4).prop_map(|s| s.join(" "));
    prop::collection::vec(paragraph, 0..4).prop_map(|p| p.join("\n\n"))
}

proptest! {
    #[test]
    fn reversal_is_an_involution(text in any::<String>()) {
        prop_assert_eq!(reverse_text(&reverse_text(&text)), text);
    }

    #[test]
    fn palindromes_read_the_same_backwards(text in document()) {
        let metrics = TextAnalyzer::new().analyze_text("doc.txt", &text).metrics;
        for word in &metrics.palindromes {
            let lowered = word.to_lowercase();
            prop_assert_eq!(lowered.clone(), lowered.chars().rev().collect::<String>());
        }
        prop_assert_eq!(metrics.palindrome_count, metrics.palindromes.len());
    }

    #[test]
    fn all_words_palindromes_iff_every_word_is_one(text in document()) {
        let analyzer = TextAnalyzer::new();
        let segmented = analyzer.segment(&textlens_core::RawText::new("doc.txt", text.as_str()));
        let metrics = textlens_core::analyze(&segmented, 10);
        let expected = segmented.words().iter().all(|word| is_palindrome(word));
        prop_assert_eq!(metrics.is_all_words_palindromes, expected);
    }

    #[test]
    fn distribution_sums_to_one_hundred(text in document()) {
        let metrics = TextAnalyzer::new().analyze_text("doc.txt", &text).metrics;
        if metrics.characters == 0 {
            prop_assert!(metrics.characters_distribution.is_empty());
        } else {
            let sum: f64 = metrics.characters_distribution.values().sum();
            let tolerance = 0.0005 * metrics.characters_distribution.len() as f64 + 1e-9;
            prop_assert!((sum - 100.0).abs() <= tolerance, "sum was {}", sum);
        }
    }

    #[test]
    fn longest_and_shortest_words_are_disjoint(text in document(), n in 1usize..6) {
        let analyzer = TextAnalyzer::new();
        let segmented = analyzer.segment(&textlens_core::RawText::new("doc.txt", text.as_str()));
        let unique = textlens_core::metrics::ranking::unique_words(segmented.words()).len();
        let metrics = textlens_core::analyze(&segmented, n);
        if 2 * n <= unique {
            for word in &metrics.longest_words {
                prop_assert!(!metrics.shortest_words.contains(word));
            }
        }
        prop_assert!(metrics.longest_words.len() <= n);
        prop_assert!(metrics.shortest_words.len() <= n);
    }

    #[test]
    fn analysis_is_deterministic(text in document()) {
        let analyzer = TextAnalyzer::new();
        let first = analyzer.analyze_text("doc.txt", &text).metrics;
        let second = analyzer.analyze_text("doc.txt", &text).metrics;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn characters_derive_from_words(text in document()) {
        let analyzer = TextAnalyzer::new();
        let segmented = analyzer.segment(&textlens_core::RawText::new("doc.txt", text.as_str()));
        let expected: usize = segmented.words().iter().map(|w| w.chars().count()).sum();
        prop_assert_eq!(segmented.characters().len(), expected);
        for pair in segmented.words().windows(2) {
            prop_assert!(pair[0].chars().count() >= pair[1].chars().count());
        }
    }
}
