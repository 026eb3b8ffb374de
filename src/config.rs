//! Configuration for the spam estimator.
//!
//! The defaults reproduce the classic estimator exactly: a `+1` smoothing term
//! on the document total, a `0.1` floor for tokens never seen in spam, and a
//! minimum of two observations before a token counts as evidence.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpamestError};

/// What `estimate` does when evidence must be divided by a zero spam count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPositivePolicy {
    /// Return `SpamestError::DivisionByZero`.
    #[default]
    Fail,
    /// Ignore the token evidence and return the bare prior.
    Prior,
}

/// Configuration for an [`Estimator`](crate::estimator::Estimator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Tokens seen in fewer documents than this contribute no evidence.
    pub min_token_count: u64,
    /// Stand-in for the spam count of a token never seen in spam.
    pub missing_spam_floor: f64,
    /// Added to the document total before it is used as a denominator.
    pub prior_smoothing: u64,
    /// Behavior when no spam has been trained but evidence is present.
    pub zero_positive: ZeroPositivePolicy,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            min_token_count: 2,
            missing_spam_floor: 0.1,
            prior_smoothing: 1,
            zero_positive: ZeroPositivePolicy::Fail,
        }
    }
}

impl EstimatorConfig {
    /// Set the zero-positive policy.
    pub fn with_zero_positive(mut self, policy: ZeroPositivePolicy) -> Self {
        self.zero_positive = policy;
        self
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing keys fall back to their defaults. The loaded configuration is
    /// validated before it is returned.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EstimatorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration cannot produce an ill-defined score.
    pub fn validate(&self) -> Result<()> {
        if self.prior_smoothing == 0 {
            return Err(SpamestError::invalid_config(
                "prior_smoothing must be at least 1",
            ));
        }

        if self.min_token_count == 0 {
            return Err(SpamestError::invalid_config(
                "min_token_count must be at least 1",
            ));
        }

        if !self.missing_spam_floor.is_finite() || self.missing_spam_floor <= 0.0 {
            return Err(SpamestError::invalid_config(format!(
                "missing_spam_floor must be a positive finite number, got {}",
                self.missing_spam_floor
            )));
        }

        Ok(())
    }
}
