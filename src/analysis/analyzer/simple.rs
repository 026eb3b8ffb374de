//! Simple analyzer: whitespace tokenization, no filtering.

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// An analyzer that splits on whitespace and keeps tokens exactly as written.
#[derive(Clone, Debug, Default)]
pub struct SimpleAnalyzer {
    tokenizer: WhitespaceTokenizer,
}

impl SimpleAnalyzer {
    /// Create a new simple analyzer.
    pub fn new() -> Self {
        SimpleAnalyzer {
            tokenizer: WhitespaceTokenizer::new(),
        }
    }
}

impl Analyzer for SimpleAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.tokenizer.tokenize(text)
    }

    fn name(&self) -> &str {
        "simple"
    }
}
