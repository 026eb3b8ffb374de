//! Token types and utilities for text analysis.
//!
//! # Examples
//!
//! ```
//! use spamest::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the token and file it under `field`.
    pub fn into_field_token(self, field: &str) -> FieldToken {
        FieldToken::new(field, self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// A token text together with the field it was found in.
///
/// This is the key of the frequency model. The field and the text are kept
/// apart, so no token text can ever pose as a token of another field: body
/// text `"subject:free"` and the word `"free"` in the `subject` field are two
/// different keys. The primary message body is the empty field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldToken {
    /// Field name, empty for the primary message.
    pub field: String,
    /// Token text as produced by the analyzer.
    pub text: String,
}

impl FieldToken {
    /// Create a token of the given field.
    pub fn new<F: Into<String>, S: Into<String>>(field: F, text: S) -> Self {
        FieldToken {
            field: field.into(),
            text: text.into(),
        }
    }

    /// Create a token of the primary message.
    pub fn primary<S: Into<String>>(text: S) -> Self {
        Self::new(String::new(), text)
    }

    /// Whether this token comes from the primary message.
    pub fn is_primary(&self) -> bool {
        self.field.is_empty()
    }
}

impl fmt::Display for FieldToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_primary() {
            write!(f, "{}", self.text)
        } else {
            write!(f, "{}:{}", self.field, self.text)
        }
    }
}
