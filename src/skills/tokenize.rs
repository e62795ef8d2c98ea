//! Tokenization for skill names and descriptions
//!
//! Produces lowercase word tokens, with hyphenated compounds additionally
//! split into their parts so both `react-hooks` and `hooks` are searchable.

use unicode_normalization::UnicodeNormalization;

/// Lowercase NFKC-folded text with everything outside `[a-z0-9-]`
/// collapsed to separators.
fn normalize(text: &str) -> String {
    text.nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Tokenize text for indexing.
///
/// Every hyphenated token also yields its hyphen-separated sub-tokens:
/// `"basic-skill"` produces `"basic-skill"`, `"basic"`, `"skill"`.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in normalize(text).split_whitespace() {
        tokens.push(word.to_string());
        if word.contains('-') {
            for part in word.split('-') {
                if !part.is_empty() {
                    tokens.push(part.to_string());
                }
            }
        }
    }
    tokens
}

/// Tokenize a search query. No hyphen expansion: substring matching in the
/// ranker already covers compound terms.
pub fn tokenize_query(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
