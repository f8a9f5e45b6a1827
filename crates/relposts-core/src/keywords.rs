//! Keyword extraction from raw document text.
//!
//! The tokenizer is deliberately naive: split on single spaces, trim a fixed
//! punctuation set from both ends, keep words longer than
//! [`MIN_KEYWORD_LEN`] bytes. No case folding, no stemming, no dedup.

/// Characters trimmed from both ends of every token.
pub const STRIP_CHARS: [char; 5] = ['?', '.', ';', ',', '"'];

/// Tokens must be strictly longer than this (UTF-8 bytes) to count.
pub const MIN_KEYWORD_LEN: usize = 4;

/// Default per-field keyword cap.
pub const DEFAULT_KEYWORDS_PER_FIELD: usize = 5;

/// Returns the first `max_count` qualifying words of `text`, in order.
pub fn extract_keywords(text: &str, max_count: usize) -> Vec<String> {
    let mut keywords = Vec::new();
    if max_count == 0 { return keywords; }
    for token in text.split(' ') {
        let word = token.trim_matches(STRIP_CHARS);
        if word.len() <= MIN_KEYWORD_LEN { continue; }
        keywords.push(word.to_string());
        if keywords.len() == max_count { break; }
    }
    keywords
}
