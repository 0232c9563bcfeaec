//! A small embedded word list for demos and tests. Not a complete English
//! dictionary — callers that want a bigger or different vocabulary supply
//! their own via `filter_words`.

use std::sync::OnceLock;

const WORDS: &str = include_str!("words.txt");

/// The built-in word list, split into lines and cached after the first call.
pub fn builtin_word_list() -> &'static [&'static str] {
    static WORDS_LIST: OnceLock<Vec<&'static str>> = OnceLock::new();
    WORDS_LIST
        .get_or_init(|| WORDS.lines().map(|w| w.trim()).filter(|w| !w.is_empty()).collect())
        .as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_is_nonempty_and_uppercase() {
        let words = builtin_word_list();
        assert!(!words.is_empty());
        for w in words {
            assert!(w.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
