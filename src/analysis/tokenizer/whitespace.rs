//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut word_start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            match (c.is_whitespace(), word_start) {
                (true, Some(start)) => {
                    tokens.push(Token::with_offsets(
                        &text[start..offset],
                        tokens.len(),
                        start,
                        offset,
                    ));
                    word_start = None;
                }
                (false, None) => word_start = Some(offset),
                _ => {}
            }
        }

        if let Some(start) = word_start {
            tokens.push(Token::with_offsets(
                &text[start..],
                tokens.len(),
                start,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_whitespace_offsets_repeated_words() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize(" buy buy now").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (1, 4));
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (5, 8));
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (9, 12));
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("  \n ").unwrap().count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
