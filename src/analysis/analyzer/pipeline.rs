//! Pipeline analyzer that runs a tokenizer and then a chain of filters.
//!
//! # Examples
//!
//! ```
//! use spamest::analysis::analyzer::Analyzer;
//! use spamest::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use spamest::analysis::tokenizer::regex::RegexTokenizer;
//! use spamest::analysis::token_filter::lowercase::LowercaseFilter;
//! use std::sync::Arc;
//!
//! let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .with_name("words");
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello WORLD").unwrap().collect();
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(analyzer.name(), "words");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Tokenizer followed by filters applied in insertion order.
///
/// The default name is `pipeline_<tokenizer>`.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Start a pipeline from a tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Append a filter.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Rename the analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(text)?, |tokens, filter| {
                filter.filter(tokens)
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filters: Vec<&str> = self.filters.iter().map(|filter| filter.name()).collect();
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &filters)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::FieldToken;
    use crate::analysis::token_filter::lowercase::LowercaseFilter;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

    #[test]
    fn test_pipeline_analyzer() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()));

        let tokens: Vec<String> = analyzer
            .analyze("Buy NOW")
            .unwrap()
            .map(|token| token.text)
            .collect();

        assert_eq!(tokens, vec!["buy", "now"]);
        assert_eq!(analyzer.name(), "pipeline_whitespace");
        assert!(format!("{analyzer:?}").contains("lowercase"));
    }

    #[test]
    fn test_pipeline_without_filters() {
        let analyzer =
            PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new())).with_name("raw");

        let tokens = analyzer.tokenize("Free money", "subject").unwrap();
        assert_eq!(
            tokens,
            vec![FieldToken::new("subject", "Free"), FieldToken::new("subject", "money")]
        );
        assert_eq!(analyzer.name(), "raw");
    }

    #[test]
    fn test_token_stream_moves_across_threads() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()));
        let stream = analyzer.analyze("One TWO three").unwrap();

        let texts = std::thread::spawn(move || stream.map(|token| token.text).collect::<Vec<_>>())
            .join()
            .unwrap();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }
}
