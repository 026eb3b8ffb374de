//! Analyzers combine a tokenizer with token filters.
//!
//! - [`standard::StandardAnalyzer`] - Unicode words, lowercased (the estimator default)
//! - [`simple::SimpleAnalyzer`] - Whitespace split, no filtering
//! - [`pipeline::PipelineAnalyzer`] - Any tokenizer with any filter chain

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod pipeline;
pub mod simple;
pub mod standard;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use simple::SimpleAnalyzer;
pub use standard::StandardAnalyzer;
