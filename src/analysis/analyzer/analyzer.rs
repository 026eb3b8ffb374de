//! Core analyzer trait definition.
//!
//! The [`Analyzer`] trait is the tokenizer collaborator of the estimator:
//! it turns a field's raw text into the field tokens that get counted.
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 … Filter N → field tokens
//! ```
//!
//! # Examples
//!
//! ```
//! use spamest::analysis::analyzer::Analyzer;
//! use spamest::analysis::analyzer::standard::StandardAnalyzer;
//! use spamest::analysis::token::FieldToken;
//!
//! let analyzer = StandardAnalyzer::new();
//! assert_eq!(
//!     analyzer.tokenize("Free Money", "subject").unwrap(),
//!     vec![FieldToken::new("subject", "free"), FieldToken::new("subject", "money")]
//! );
//! ```

use crate::analysis::token::{FieldToken, TokenStream};
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Implementations must be deterministic: the same text always yields the
/// same tokens. The trait requires `Send + Sync` so that one analyzer can
/// serve concurrent training and scoring.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;

    /// Analyze `text` and file every token under the field `prefix`.
    ///
    /// The empty prefix is the primary message body. The field travels next
    /// to the text instead of inside it, so the same word in two different
    /// fields never shares a model entry.
    fn tokenize(&self, text: &str, prefix: &str) -> Result<Vec<FieldToken>> {
        Ok(self
            .analyze(text)?
            .map(|token| token.into_field_token(prefix))
            .collect())
    }
}
