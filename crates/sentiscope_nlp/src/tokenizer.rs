use regex::Regex;
use sentiscope_core::{CapabilityError, WordTokenizer};
use std::sync::LazyLock;

/// Words (with inner hyphens/apostrophes), ellipses, or any single
/// non-space symbol such as punctuation or an emoji.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}_]+(?:[-'’][\p{L}\p{N}_]+)*|\.\.\.|[^\s\p{L}\p{N}_]").unwrap()
});

/// Checked in order; the first matching suffix is split off.
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Treebank-style word tokenizer.
///
/// Punctuation becomes its own token and English clitics are split off the
/// way the Penn Treebank does it: `don't` → `do` `n't`, `it's` → `it` `'s`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

impl WordTokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, CapabilityError> {
        let mut tokens = Vec::new();
        for m in TOKEN_RE.find_iter(text) {
            let word = m.as_str().replace('’', "'");
            split_clitics(word, &mut tokens);
        }
        Ok(tokens)
    }
}

fn split_clitics(word: String, out: &mut Vec<String>) {
    for clitic in CLITICS {
        if word.len() <= clitic.len() {
            continue;
        }
        let cut = word.len() - clitic.len();
        if word.get(cut..).is_some_and(|tail| tail.eq_ignore_ascii_case(clitic)) {
            out.push(word[..cut].to_string());
            out.push(word[cut..].to_string());
            return;
        }
    }
    out.push(word);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str) -> Vec<String> {
        TreebankTokenizer.tokenize(text).unwrap()
    }

    #[test]
    fn test_punctuation_is_separate() {
        assert_eq!(tok("wow, amazing!"), vec!["wow", ",", "amazing", "!"]);
    }

    #[test]
    fn test_contractions() {
        assert_eq!(tok("i don't know"), vec!["i", "do", "n't", "know"]);
        assert_eq!(tok("it's fine"), vec!["it", "'s", "fine"]);
        assert_eq!(tok("can't"), vec!["ca", "n't"]);
        assert_eq!(tok("we’re here"), vec!["we", "'re", "here"]);
    }

    #[test]
    fn test_hyphenated_word_stays_whole() {
        assert_eq!(tok("a well-known fact"), vec!["a", "well-known", "fact"]);
    }

    #[test]
    fn test_emoji_is_a_token() {
        assert_eq!(tok("happy 😀"), vec!["happy", "😀"]);
    }

    #[test]
    fn test_ellipsis() {
        assert_eq!(tok("well... ok"), vec!["well", "...", "ok"]);
    }

    #[test]
    fn test_empty() {
        assert!(tok("").is_empty());
        assert!(tok("   ").is_empty());
    }
}
