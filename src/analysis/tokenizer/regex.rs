//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SpamestError};

/// A regex-based tokenizer that extracts tokens using regular expressions.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    ///
    /// The default pattern `r"\w+"` matches sequences of word characters.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(Self::compile(pattern)?),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(Self::compile(pattern)?),
            gaps: true,
        })
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern)
            .map_err(|e| SpamestError::analysis(format!("Invalid regex pattern: {e}")))
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = if self.gaps {
            let mut tokens = Vec::new();
            let mut last_end = 0;

            for mat in self.pattern.find_iter(text) {
                if mat.start() > last_end {
                    tokens.push(Token::with_offsets(
                        &text[last_end..mat.start()],
                        tokens.len(),
                        last_end,
                        mat.start(),
                    ));
                }
                last_end = mat.end();
            }

            if last_end < text.len() {
                tokens.push(Token::with_offsets(
                    &text[last_end..],
                    tokens.len(),
                    last_end,
                    text.len(),
                ));
            }

            tokens
        } else {
            self.pattern
                .find_iter(text)
                .enumerate()
                .map(|(position, mat)| {
                    Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                })
                .collect()
        };

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
