//! Model configuration: regulatory constants and responder tuning.
//!
//! Loaded once from `{data_dir}/model_config.json`. Missing keys fall back
//! to the built-in defaults, so a partial file only overrides what it names.
//! In tests, use `ModelConfig::default()`.

use crate::{
    error::{read_file, FtzResult},
    types::Usd,
};
use serde::{Deserialize, Serialize};

/// Statutory MPF ceiling per formal entry.
pub const DEFAULT_MPF_CAP_PER_ENTRY: Usd = 634.62;

pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.58;
pub const DEFAULT_TOKEN_WEIGHT: f64 = 0.65;
pub const DEFAULT_SEQUENCE_WEIGHT: f64 = 0.35;

pub const DEFAULT_ESCALATION_MESSAGE: &str =
    "I don't have a confident answer for that one. Please reach out to your FTZ \
     program manager or licensed customs broker, who can review your specific \
     situation in detail.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Per-entry Merchandise Processing Fee ceiling.
    pub mpf_cap_per_entry: Usd,
    pub responder: ResponderConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            mpf_cap_per_entry: DEFAULT_MPF_CAP_PER_ENTRY,
            responder: ResponderConfig::default(),
        }
    }
}

/// Tuning for the FAQ matcher. The defaults are empirical; keep them
/// configurable rather than baked into the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// Minimum blended score for a catalog answer.
    pub match_threshold: f64,
    /// Weight of the token-set overlap component.
    pub token_weight: f64,
    /// Weight of the character sequence ratio component.
    pub sequence_weight: f64,
    /// Returned verbatim when nothing clears the threshold.
    pub escalation_message: String,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            token_weight: DEFAULT_TOKEN_WEIGHT,
            sequence_weight: DEFAULT_SEQUENCE_WEIGHT,
            escalation_message: DEFAULT_ESCALATION_MESSAGE.to_string(),
        }
    }
}

impl ModelConfig {
    /// Load from the data/ directory.
    pub fn load(data_dir: &str) -> FtzResult<Self> {
        let path = format!("{data_dir}/model_config.json");
        let content = read_file(&path)?;
        let config: ModelConfig = serde_json::from_str(&content)?;
        config.check()?;
        log::debug!(
            "model config loaded from {path}: mpf_cap={:.2} threshold={:.2}",
            config.mpf_cap_per_entry,
            config.responder.match_threshold
        );
        Ok(config)
    }

    /// Reject values no sane config file would carry.
    fn check(&self) -> FtzResult<()> {
        if !(self.mpf_cap_per_entry >= 0.0) {
            return Err(anyhow::anyhow!(
                "mpf_cap_per_entry must be non-negative, got {}",
                self.mpf_cap_per_entry
            )
            .into());
        }
        let r = &self.responder;
        if !(0.0..=1.0).contains(&r.match_threshold) {
            return Err(anyhow::anyhow!(
                "responder.match_threshold must be in [0, 1], got {}",
                r.match_threshold
            )
            .into());
        }
        if r.token_weight < 0.0 || r.sequence_weight < 0.0 {
            return Err(anyhow::anyhow!("responder weights must be non-negative").into());
        }
        Ok(())
    }
}
