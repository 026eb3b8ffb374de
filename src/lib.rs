//! # spamest
//!
//! An incremental, token-frequency spam estimator.
//!
//! ## Features
//!
//! - Incremental training from labeled messages, one message or a batch at a time
//! - Per-field token namespaces: `free` in the subject is not `free` in the body
//! - A document-frequency model: a token counts once per message field
//! - Thread-safe training and scoring behind a read-write lock
//! - Pluggable text analysis (Unicode word, whitespace and regex tokenizers)
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use spamest::prelude::*;
//!
//! let estimator = Estimator::new();
//! let no_fields = HashMap::new();
//!
//! estimator.good("free money now", &no_fields).unwrap();
//! estimator.bad("hello friend", &no_fields).unwrap();
//!
//! // No token has been seen twice yet, so the score is the prior 1/3.
//! assert_eq!(estimator.estimate("free money").unwrap(), 1.0 / 3.0);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod estimator;
pub mod model;
pub mod types;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
    pub use crate::config::{EstimatorConfig, ZeroPositivePolicy};
    pub use crate::error::{Result, SpamestError};
    pub use crate::estimator::Estimator;
    pub use crate::model::ModelSnapshot;
    pub use crate::types::{EstimatorStats, TrainingSample};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
