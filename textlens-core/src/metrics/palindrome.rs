//! Palindrome detection

use super::ranking::unique_words;

/// Whether `word` reads the same backwards, ignoring case
pub fn is_palindrome(word: &str) -> bool {
    let lowered: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    lowered.iter().eq(lowered.iter().rev())
}

/// Distinct palindrome words, longest first
///
/// `words` must already be ordered longest first; ties keep that order.
pub fn palindrome_words(words: &[String]) -> Vec<String> {
    unique_words(words)
        .into_iter()
        .filter(|word| is_palindrome(word))
        .map(str::to_string)
        .collect()
}

/// Whether the alphanumeric characters of `text`, lower-cased, form a palindrome
///
/// Text without any alphanumeric character is trivially a palindrome.
pub fn is_text_palindrome(text: &str) -> bool {
    let filtered: Vec<char> = text
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    filtered.iter().eq(filtered.iter().rev())
}

/// Whether every distinct retained word is a palindrome
///
/// Repeated words are compared once, so a palindrome that occurs several
/// times does not make the answer false. Vacuously true without words.
pub fn is_all_words_palindromes(words: &[String], palindromes: &[String]) -> bool {
    let mut distinct = unique_words(words);
    let mut palindromes: Vec<&str> = palindromes.iter().map(String::as_str).collect();
    distinct.sort_unstable();
    palindromes.sort_unstable();
    distinct == palindromes
}
