//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers.
//!
//! # Examples
//!
//! ```
//! use spamest::analysis::token_filter::Filter;
//! use spamest::analysis::token_filter::lowercase::LowercaseFilter;
//! use spamest::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("FREE", 0), Token::new("Money", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "free");
//! assert_eq!(filtered[1].text, "money");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;

pub use lowercase::LowercaseFilter;
