// Tokenizer - splits text into alternating word and whitespace runs

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
}

/// A single run of text borrowed from the tokenized input.
///
/// Either a maximal whitespace run or the (possibly empty) text between two
/// whitespace runs. Equality is plain content equality.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Token<'a> {
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

/// Splits `text` on whitespace runs, keeping each run as its own token.
///
/// Behaves like a regex split with a capturing group: the result always starts
/// and ends with a non-whitespace slot, which is empty when the input starts or
/// ends with whitespace. An empty input yields a single empty token.
/// Joining every token in order reproduces `text` exactly.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for run in WHITESPACE_RUN.find_iter(text) {
        tokens.push(Token::new(&text[last..run.start()]));
        tokens.push(Token::new(run.as_str()));
        last = run.end();
    }
    tokens.push(Token::new(&text[last..]));

    tokens
}

/// Concatenates token texts back into a single string.
pub fn join_tokens(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_single_word() {
        assert_eq!(texts(&tokenize("hello")), vec!["hello"]);
    }

    #[test]
    fn test_tokenize_keeps_whitespace_runs() {
        assert_eq!(
            texts(&tokenize("hello  world")),
            vec!["hello", "  ", "world"]
        );
    }

    #[test]
    fn test_tokenize_mixed_whitespace_is_one_run() {
        assert_eq!(
            texts(&tokenize("a \t\n b")),
            vec!["a", " \t\n ", "b"]
        );
    }

    #[test]
    fn test_tokenize_empty_string_yields_one_empty_token() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "");
    }

    #[test]
    fn test_tokenize_leading_and_trailing_whitespace() {
        assert_eq!(texts(&tokenize(" a ")), vec!["", " ", "a", " ", ""]);
    }

    #[test]
    fn test_tokenize_whitespace_only() {
        assert_eq!(texts(&tokenize("   ")), vec!["", "   ", ""]);
    }

    #[test]
    fn test_tokenize_no_normalization() {
        assert_eq!(texts(&tokenize("Hello HELLO")), vec!["Hello", " ", "HELLO"]);
    }

    #[test]
    fn test_tokenize_unicode() {
        assert_eq!(
            texts(&tokenize("naïve café\u{3000}日本")),
            vec!["naïve", " ", "café", "\u{3000}", "日本"]
        );
    }

    #[test]
    fn test_join_reproduces_input() {
        let inputs = [
            "",
            "word",
            "  padded  ",
            "line one\nline two\n\n",
            "tabs\tand   spaces",
            "ünïcödé  テキスト",
        ];
        for input in inputs {
            assert_eq!(join_tokens(&tokenize(input)), input, "input {:?}", input);
        }
    }

    #[test]
    fn test_words_and_whitespace_alternate() {
        let tokens = tokenize(" one two  three ");
        for (index, token) in tokens.iter().enumerate() {
            let whitespace = !token.text.is_empty() && token.text.chars().all(char::is_whitespace);
            assert_eq!(whitespace, index % 2 == 1, "token {}", index);
        }
    }
}
