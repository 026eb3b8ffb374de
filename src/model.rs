//! Document-frequency model behind the estimator.
//!
//! [`FrequencyModel`] is the unlocked state of an estimator: two token-count
//! maps and two document counters, plus the arithmetic that updates and scores
//! them. It knows nothing about text; callers hand it field token sets.
//!
//! # Invariants
//!
//! - `spam_count <= all_count`
//! - `spam_counts[t] <= all_counts[t]` for every token `t`
//! - counts only ever grow, and a missing token counts as zero

use std::collections::{BTreeMap, BTreeSet};

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::analysis::token::FieldToken;
use crate::config::{EstimatorConfig, ZeroPositivePolicy};
use crate::error::{Result, SpamestError};

/// Token and document counts learned from labeled messages.
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    /// Token -> number of documents containing it.
    all_counts: AHashMap<FieldToken, u64>,
    /// Token -> number of spam documents containing it.
    spam_counts: AHashMap<FieldToken, u64>,
    /// Documents seen.
    all_count: u64,
    /// Spam documents seen.
    spam_count: u64,
}

impl FrequencyModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one labeled document.
    ///
    /// `fields` holds the deduplicated token set of each field of the
    /// document. Every token of every field is counted once.
    pub fn record<I>(&mut self, is_positive: bool, fields: I)
    where
        I: IntoIterator<Item = AHashSet<FieldToken>>,
    {
        self.all_count += 1;
        if is_positive {
            self.spam_count += 1;
        }

        for tokens in fields {
            for token in tokens {
                if is_positive {
                    *self.spam_counts.entry(token.clone()).or_insert(0) += 1;
                }
                *self.all_counts.entry(token).or_insert(0) += 1;
            }
        }
    }

    /// The score before any token evidence is applied.
    pub fn prior(&self, config: &EstimatorConfig) -> f64 {
        self.spam_count as f64 / self.adjusted_total(config) as f64
    }

    /// Score a deduplicated token set against the model.
    ///
    /// Starts from the prior and multiplies in one factor per token seen in at
    /// least `min_token_count` documents:
    ///
    /// ```text
    /// factor = (spam_counts[t] or floor) * (all_count + smoothing)
    ///          ---------------------------------------------------
    ///                   all_counts[t] * spam_count
    /// ```
    ///
    /// The tokens are visited in sorted order so the product is rounded the
    /// same way on every call. The result is a raw statistic, not a
    /// probability, and may exceed 1.
    pub fn score(&self, tokens: &BTreeSet<FieldToken>, config: &EstimatorConfig) -> Result<f64> {
        let adjusted_total = self.adjusted_total(config) as f64;
        let prior = self.spam_count as f64 / adjusted_total;
        let mut score = prior;

        for token in tokens {
            let token_total = self.token_count(token);
            if token_total < config.min_token_count {
                continue;
            }

            if self.spam_count == 0 {
                return match config.zero_positive {
                    ZeroPositivePolicy::Fail => Err(SpamestError::division_by_zero(format!(
                        "token '{token}' appears in {token_total} documents but no spam has been trained"
                    ))),
                    ZeroPositivePolicy::Prior => {
                        log::warn!(
                            "no spam trained yet; ignoring token evidence and returning the prior"
                        );
                        Ok(prior)
                    }
                };
            }

            let token_spam = match self.spam_token_count(token) {
                0 => config.missing_spam_floor,
                count => count as f64,
            };
            let numerator = token_spam * adjusted_total;
            let denominator = token_total as f64 * self.spam_count as f64;

            score *= numerator / denominator;
        }

        Ok(score)
    }

    /// Number of documents that contained `token`.
    pub fn token_count(&self, token: &FieldToken) -> u64 {
        self.all_counts.get(token).copied().unwrap_or(0)
    }

    /// Number of spam documents that contained `token`.
    pub fn spam_token_count(&self, token: &FieldToken) -> u64 {
        self.spam_counts.get(token).copied().unwrap_or(0)
    }

    /// Number of documents seen.
    pub fn all_count(&self) -> u64 {
        self.all_count
    }

    /// Number of spam documents seen.
    pub fn spam_count(&self) -> u64 {
        self.spam_count
    }

    /// Number of distinct tokens seen in any document.
    pub fn vocabulary_size(&self) -> usize {
        self.all_counts.len()
    }

    /// Number of distinct tokens seen in spam documents.
    pub fn spam_vocabulary_size(&self) -> usize {
        self.spam_counts.len()
    }

    /// Copy the model into a serializable snapshot.
    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            all_counts: group_by_field(&self.all_counts),
            spam_counts: group_by_field(&self.spam_counts),
            all_count: self.all_count,
            spam_count: self.spam_count,
        }
    }

    /// Rebuild a model from a snapshot, rejecting one that breaks the invariants.
    pub fn from_snapshot(snapshot: ModelSnapshot) -> Result<Self> {
        snapshot.validate()?;

        Ok(Self {
            all_counts: flatten_fields(snapshot.all_counts),
            spam_counts: flatten_fields(snapshot.spam_counts),
            all_count: snapshot.all_count,
            spam_count: snapshot.spam_count,
        })
    }

    fn adjusted_total(&self, config: &EstimatorConfig) -> u64 {
        self.all_count.saturating_add(config.prior_smoothing)
    }
}

/// Field -> token text -> count.
pub type FieldCounts = BTreeMap<String, BTreeMap<String, u64>>;

fn group_by_field(counts: &AHashMap<FieldToken, u64>) -> FieldCounts {
    let mut grouped = FieldCounts::new();
    for (token, count) in counts {
        grouped
            .entry(token.field.clone())
            .or_default()
            .insert(token.text.clone(), *count);
    }
    grouped
}

fn flatten_fields(counts: FieldCounts) -> AHashMap<FieldToken, u64> {
    counts
        .into_iter()
        .flat_map(|(field, texts)| {
            texts
                .into_iter()
                .map(move |(text, count)| (FieldToken::new(field.clone(), text), count))
        })
        .collect()
}

/// A plain copy of a [`FrequencyModel`] for embedders that persist it.
///
/// Counts are grouped by field, the primary message under `""`. The maps are
/// sorted so that serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    /// Field -> token -> number of documents containing it.
    pub all_counts: FieldCounts,
    /// Field -> token -> number of spam documents containing it.
    pub spam_counts: FieldCounts,
    /// Documents seen.
    pub all_count: u64,
    /// Spam documents seen.
    pub spam_count: u64,
}

impl ModelSnapshot {
    /// Documents containing `text` in `field`.
    pub fn token_count(&self, field: &str, text: &str) -> u64 {
        lookup(&self.all_counts, field, text)
    }

    /// Spam documents containing `text` in `field`.
    pub fn spam_token_count(&self, field: &str, text: &str) -> u64 {
        lookup(&self.spam_counts, field, text)
    }

    /// Check the model invariants.
    pub fn validate(&self) -> Result<()> {
        if self.spam_count > self.all_count {
            return Err(SpamestError::invalid_snapshot(format!(
                "spam_count {} exceeds all_count {}",
                self.spam_count, self.all_count
            )));
        }

        for (field, texts) in &self.spam_counts {
            for (text, spam) in texts {
                let all = self.token_count(field, text);
                if *spam > all {
                    return Err(SpamestError::invalid_snapshot(format!(
                        "token '{}' has spam count {spam} above its total {all}",
                        FieldToken::new(field.as_str(), text.as_str())
                    )));
                }
            }
        }

        Ok(())
    }
}

fn lookup(counts: &FieldCounts, field: &str, text: &str) -> u64 {
    counts
        .get(field)
        .and_then(|texts| texts.get(text))
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> AHashSet<FieldToken> {
        tokens.iter().map(|t| FieldToken::primary(*t)).collect()
    }

    fn sorted(tokens: &[&str]) -> BTreeSet<FieldToken> {
        tokens.iter().map(|t| FieldToken::primary(*t)).collect()
    }

    fn field_set(field: &str, tokens: &[&str]) -> AHashSet<FieldToken> {
        tokens.iter().map(|t| FieldToken::new(field, *t)).collect()
    }

    fn body(text: &str) -> FieldToken {
        FieldToken::primary(text)
    }

    #[test]
    fn test_record_counts() {
        let mut model = FrequencyModel::new();
        model.record(true, [set(&["free", "money"])]);
        model.record(false, [set(&["free", "lunch"])]);

        assert_eq!(model.all_count(), 2);
        assert_eq!(model.spam_count(), 1);
        assert_eq!(model.token_count(&body("free")), 2);
        assert_eq!(model.spam_token_count(&body("free")), 1);
        assert_eq!(model.spam_token_count(&body("lunch")), 0);
        assert_eq!(model.token_count(&body("missing")), 0);
        assert_eq!(model.vocabulary_size(), 3);
        assert_eq!(model.spam_vocabulary_size(), 2);
    }

    #[test]
    fn test_record_keeps_fields_apart() {
        let mut model = FrequencyModel::new();
        model.record(true, [set(&["subject:free"]), field_set("subject", &["free"])]);

        assert_eq!(model.all_count(), 1);
        assert_eq!(model.vocabulary_size(), 2);
        assert_eq!(model.token_count(&body("subject:free")), 1);
        assert_eq!(model.token_count(&FieldToken::new("subject", "free")), 1);
        assert_eq!(model.token_count(&body("free")), 0);
    }

    #[test]
    fn test_score_empty_model() {
        let model = FrequencyModel::new();
        let config = EstimatorConfig::default();

        assert_eq!(model.prior(&config), 0.0);
        assert_eq!(model.score(&sorted(&["anything"]), &config).unwrap(), 0.0);
        assert_eq!(model.score(&BTreeSet::new(), &config).unwrap(), 0.0);
    }

    #[test]
    fn test_score_floor_for_ham_only_token() {
        let mut model = FrequencyModel::new();
        model.record(true, [set(&["offer"])]);
        model.record(false, [set(&["meeting"])]);
        model.record(false, [set(&["meeting"])]);
        let config = EstimatorConfig::default();

        // prior = 1/4, factor = (0.1 * 4) / (2 * 1)
        let score = model.score(&sorted(&["meeting"]), &config).unwrap();
        assert!((score - 0.25 * 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_score_zero_positive_policies() {
        let mut model = FrequencyModel::new();
        model.record(false, [set(&["hello"])]);
        model.record(false, [set(&["hello"])]);

        let fail = EstimatorConfig::default();
        assert!(matches!(
            model.score(&sorted(&["hello"]), &fail),
            Err(SpamestError::DivisionByZero(_))
        ));
        // No token reaches the threshold, so there is nothing to divide.
        assert_eq!(model.score(&sorted(&["other"]), &fail).unwrap(), 0.0);

        let prior = EstimatorConfig::default().with_zero_positive(ZeroPositivePolicy::Prior);
        assert_eq!(model.score(&sorted(&["hello"]), &prior).unwrap(), 0.0);
    }

    #[test]
    fn test_custom_threshold() {
        let mut model = FrequencyModel::new();
        model.record(true, [set(&["win"])]);
        let config = EstimatorConfig {
            min_token_count: 1,
            ..Default::default()
        };

        // prior = 1/2, factor = (1 * 2) / (1 * 1)
        assert_eq!(model.score(&sorted(&["win"]), &config).unwrap(), 1.0);
    }

    #[test]
    fn test_snapshot_restores_model() {
        let mut model = FrequencyModel::new();
        model.record(true, [set(&["free", "now"]), field_set("subject", &["win"])]);
        model.record(false, [set(&["now"])]);

        let snapshot = model.snapshot();
        assert_eq!(snapshot.token_count("", "now"), 2);
        assert_eq!(snapshot.spam_token_count("subject", "win"), 1);
        assert_eq!(snapshot.token_count("", "subject:win"), 0);

        let restored = FrequencyModel::from_snapshot(snapshot.clone()).unwrap();
        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(restored.token_count(&FieldToken::new("subject", "win")), 1);
    }

    #[test]
    fn test_snapshot_rejects_broken_invariants() {
        let snapshot = ModelSnapshot {
            all_count: 1,
            spam_count: 2,
            ..Default::default()
        };
        assert!(matches!(
            FrequencyModel::from_snapshot(snapshot),
            Err(SpamestError::InvalidSnapshot(_))
        ));

        let mut snapshot = ModelSnapshot {
            all_count: 2,
            spam_count: 1,
            ..Default::default()
        };
        snapshot
            .spam_counts
            .entry(String::new())
            .or_default()
            .insert("free".to_string(), 1);
        assert!(FrequencyModel::from_snapshot(snapshot).is_err());
    }
}
