//! Text analysis module for spamest.
//!
//! This module turns raw message text into the token strings the estimator
//! counts. A [`Tokenizer`](tokenizer::Tokenizer) splits text, zero or more
//! [`Filter`](token_filter::Filter)s normalize the tokens, and an
//! [`Analyzer`](analyzer::Analyzer) ties both together and namespaces the
//! result by field prefix.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
