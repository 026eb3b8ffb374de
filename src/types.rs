//! Types shared by the estimator and its callers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One labeled training message.
///
/// This is also the line format of a JSON-lines training corpus:
///
/// ```json
/// {"spam": true, "message": "free money now", "fields": {"subject": "WIN"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Whether the message is spam.
    pub spam: bool,
    /// The primary message text.
    pub message: String,
    /// Extra named fields, each tokenized under its own prefix.
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

impl TrainingSample {
    /// A spam sample with no extra fields.
    pub fn spam<S: Into<String>>(message: S) -> Self {
        Self {
            spam: true,
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// A non-spam sample with no extra fields.
    pub fn ham<S: Into<String>>(message: S) -> Self {
        Self {
            spam: false,
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a named field.
    pub fn with_field<K: Into<String>, V: Into<String>>(mut self, name: K, text: V) -> Self {
        self.fields.insert(name.into(), text.into());
        self
    }
}

/// Summary of what an estimator has learned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorStats {
    /// Documents trained.
    pub documents: u64,
    /// Spam documents trained.
    pub spam_documents: u64,
    /// Distinct tokens across all documents.
    pub vocabulary_size: usize,
    /// Distinct tokens across spam documents.
    pub spam_vocabulary_size: usize,
    /// Score of a message that carries no usable evidence.
    pub prior: f64,
}
