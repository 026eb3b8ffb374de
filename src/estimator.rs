//! The spam estimator.
//!
//! An [`Estimator`] learns from labeled messages and scores new ones by how
//! strongly their tokens resemble previously seen spam.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use spamest::estimator::Estimator;
//!
//! let estimator = Estimator::new();
//! let no_fields = HashMap::new();
//!
//! estimator.good("free money now", &no_fields).unwrap();
//! estimator.bad("hello friend", &no_fields).unwrap();
//! estimator.good("free offer now", &no_fields).unwrap();
//!
//! // prior 2/4, times (2 * 4) / (2 * 2) for "free"
//! assert_eq!(estimator.estimate("free").unwrap(), 1.0);
//! ```
//!
//! # Concurrency
//!
//! The model sits behind a read-write lock. Training holds the write lock for
//! the whole update, so counters and token maps always change together;
//! scoring holds the read lock for the whole computation and therefore sees
//! one consistent model. Tokenization happens outside the lock.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use ahash::AHashSet;
use log::{debug, trace};
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::analysis::token::FieldToken;
use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::model::{FrequencyModel, ModelSnapshot};
use crate::types::{EstimatorStats, TrainingSample};

/// Prefix of the primary message. Caller fields with this name are ignored.
pub const PRIMARY_PREFIX: &str = "";

/// Incremental token-frequency spam estimator.
pub struct Estimator {
    /// Analyzer used for both training and scoring.
    analyzer: Arc<dyn Analyzer>,
    /// Scoring constants.
    config: EstimatorConfig,
    /// Learned counts.
    model: RwLock<FrequencyModel>,
}

impl std::fmt::Debug for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let model = self.model.read();
        f.debug_struct("Estimator")
            .field("analyzer", &self.analyzer.name())
            .field("config", &self.config)
            .field("documents", &model.all_count())
            .field("spam_documents", &model.spam_count())
            .field("vocabulary_size", &model.vocabulary_size())
            .finish()
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator {
    /// Create an empty estimator with the standard analyzer and default config.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(StandardAnalyzer::new()))
    }

    /// Create an empty estimator with the given analyzer and default config.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            analyzer,
            config: EstimatorConfig::default(),
            model: RwLock::new(FrequencyModel::new()),
        }
    }

    /// Create an empty estimator with a custom config.
    pub fn with_config(config: EstimatorConfig, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            analyzer,
            config,
            model: RwLock::new(FrequencyModel::new()),
        })
    }

    /// Restore an estimator from a snapshot taken with [`Estimator::snapshot`].
    pub fn from_snapshot(
        snapshot: ModelSnapshot,
        config: EstimatorConfig,
        analyzer: Arc<dyn Analyzer>,
    ) -> Result<Self> {
        config.validate()?;
        let model = FrequencyModel::from_snapshot(snapshot)?;
        Ok(Self {
            analyzer,
            config,
            model: RwLock::new(model),
        })
    }

    /// Learn from one labeled message.
    ///
    /// The primary `message` is tokenized under the empty prefix and every
    /// entry of `fields` under its own name. A field named `""` is replaced by
    /// the primary message. Within each field a token is counted once no
    /// matter how often it occurs.
    ///
    /// All fields are tokenized before the model is touched, so an analyzer
    /// error leaves the model exactly as it was.
    pub fn train(
        &self,
        is_positive: bool,
        message: &str,
        fields: &HashMap<String, String>,
    ) -> Result<()> {
        let token_sets = self.tokenize_fields(message, fields)?;
        let token_total: usize = token_sets.iter().map(|tokens| tokens.len()).sum();

        let mut model = self.model.write();
        model.record(is_positive, token_sets);

        debug!(
            "trained {} message with {} unique tokens ({} documents, {} spam)",
            if is_positive { "spam" } else { "ham" },
            token_total,
            model.all_count(),
            model.spam_count()
        );

        Ok(())
    }

    /// Learn from a spam message.
    pub fn good(&self, message: &str, fields: &HashMap<String, String>) -> Result<()> {
        self.train(true, message, fields)
    }

    /// Learn from a non-spam message.
    pub fn bad(&self, message: &str, fields: &HashMap<String, String>) -> Result<()> {
        self.train(false, message, fields)
    }

    /// Learn from many samples at once.
    ///
    /// Samples are tokenized in parallel and then recorded in input order
    /// under a single write lock. If any sample fails to tokenize, nothing is
    /// recorded. Returns the number of samples recorded.
    pub fn train_samples(&self, samples: &[TrainingSample]) -> Result<usize> {
        let prepared = samples
            .par_iter()
            .map(|sample| {
                self.tokenize_fields(&sample.message, &sample.fields)
                    .map(|token_sets| (sample.spam, token_sets))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut model = self.model.write();
        for (is_positive, token_sets) in prepared {
            model.record(is_positive, token_sets);
        }

        debug!(
            "trained batch of {} samples ({} documents, {} spam)",
            samples.len(),
            model.all_count(),
            model.spam_count()
        );

        Ok(samples.len())
    }

    /// Score a message.
    ///
    /// Only the primary tokenization is used; named fields play no part in
    /// scoring. Higher is more spam-like. The score is not a probability and
    /// is not bounded by 1.
    ///
    /// With the default config this fails with
    /// [`SpamestError::DivisionByZero`](crate::error::SpamestError::DivisionByZero)
    /// when no spam has been trained yet but the message contains a token
    /// that reaches the evidence threshold.
    pub fn estimate(&self, message: &str) -> Result<f64> {
        let tokens = self.message_tokens(message)?;

        let model = self.model.read();
        let score = model.score(&tokens, &self.config)?;

        trace!("scored message with {} unique tokens: {}", tokens.len(), score);

        Ok(score)
    }

    /// Score many messages against one consistent view of the model.
    ///
    /// Results are in input order. The first failure aborts the whole batch.
    pub fn estimate_all<S>(&self, messages: &[S]) -> Result<Vec<f64>>
    where
        S: AsRef<str> + Sync,
    {
        let token_sets = messages
            .par_iter()
            .map(|message| self.message_tokens(message.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let guard = self.model.read();
        let model: &FrequencyModel = &guard;
        token_sets
            .par_iter()
            .map(|tokens| model.score(tokens, &self.config))
            .collect()
    }

    /// Document counts `(all, spam)` recorded for `token` in `field`.
    ///
    /// The primary message is the field `""`.
    pub fn token_counts(&self, field: &str, token: &str) -> (u64, u64) {
        let key = FieldToken::new(field, token);
        let model = self.model.read();
        (model.token_count(&key), model.spam_token_count(&key))
    }

    /// Summary of the learned model.
    pub fn stats(&self) -> EstimatorStats {
        let model = self.model.read();
        EstimatorStats {
            documents: model.all_count(),
            spam_documents: model.spam_count(),
            vocabulary_size: model.vocabulary_size(),
            spam_vocabulary_size: model.spam_vocabulary_size(),
            prior: model.prior(&self.config),
        }
    }

    /// Copy the learned model into a serializable snapshot.
    pub fn snapshot(&self) -> ModelSnapshot {
        self.model.read().snapshot()
    }

    /// Get the analyzer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Get the config.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    fn message_tokens(&self, message: &str) -> Result<BTreeSet<FieldToken>> {
        Ok(self
            .analyzer
            .tokenize(message, PRIMARY_PREFIX)?
            .into_iter()
            .collect())
    }

    fn tokenize_fields(
        &self,
        message: &str,
        fields: &HashMap<String, String>,
    ) -> Result<Vec<AHashSet<FieldToken>>> {
        let mut token_sets: Vec<AHashSet<FieldToken>> = Vec::with_capacity(fields.len() + 1);

        for (prefix, text) in fields {
            if prefix == PRIMARY_PREFIX {
                continue;
            }
            token_sets.push(self.analyzer.tokenize(text, prefix)?.into_iter().collect());
        }
        token_sets.push(
            self.analyzer
                .tokenize(message, PRIMARY_PREFIX)?
                .into_iter()
                .collect(),
        );

        Ok(token_sets)
    }
}
