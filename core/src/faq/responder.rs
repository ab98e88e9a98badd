//! Ranks the catalog against one question and picks an answer.
//!
//! RULES:
//!   - Stateless: nothing from an earlier question influences a later one.
//!   - An entry scores as its best pattern, never a sum over patterns.
//!   - Ties go to the earlier catalog entry.
//!   - Blank input gets an empty reply and is never matched.

use super::{
    catalog::{FaqEntry, TemplateId, CATALOG},
    similarity::{blended_score, Prepared},
    templates::{render, ReturnMetrics},
};
use crate::{config::ResponderConfig, cost_model::DerivedFigures};

struct PreparedEntry {
    template: TemplateId,
    patterns: Vec<(&'static str, Prepared)>,
}

/// Best-scoring catalog entry for a question.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub template: TemplateId,
    /// The catalog phrasing that produced the score.
    pub pattern: &'static str,
    pub score: f64,
}

pub struct FaqResponder {
    config: ResponderConfig,
    entries: Vec<PreparedEntry>,
}

impl FaqResponder {
    /// Responder over the built-in catalog.
    pub fn new(config: ResponderConfig) -> Self {
        Self::with_catalog(config, CATALOG)
    }

    pub fn with_catalog(config: ResponderConfig, catalog: &[FaqEntry]) -> Self {
        let entries = catalog
            .iter()
            .map(|entry| PreparedEntry {
                template: entry.template,
                patterns: entry
                    .patterns
                    .iter()
                    .map(|p| (*p, Prepared::new(p)))
                    .collect(),
            })
            .collect();
        Self { config, entries }
    }

    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    /// Highest-scoring entry regardless of the threshold.
    /// `None` only when the catalog is empty.
    pub fn best_match(&self, text: &str) -> Option<MatchResult> {
        let input = Prepared::new(text);
        let mut best: Option<MatchResult> = None;

        for entry in &self.entries {
            for (pattern, prepared) in &entry.patterns {
                let score = blended_score(
                    &input,
                    prepared,
                    self.config.token_weight,
                    self.config.sequence_weight,
                );
                if best.as_ref().map_or(true, |b| score > b.score) {
                    best = Some(MatchResult {
                        template: entry.template,
                        pattern: *pattern,
                        score,
                    });
                }
            }
        }
        best
    }

    /// Answer one question against the current figures.
    pub fn respond(&self, text: &str, figures: &DerivedFigures) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        match self.best_match(text) {
            Some(m) if m.score >= self.config.match_threshold => {
                log::debug!(
                    "faq: matched {:?} via {:?} (score {:.3})",
                    m.template,
                    m.pattern,
                    m.score
                );
                let metrics = ReturnMetrics::from_figures(figures);
                render(m.template, figures, &metrics)
            }
            other => {
                log::info!(
                    "faq: no confident match (best {:.3}), escalating",
                    other.map_or(0.0, |m| m.score)
                );
                self.config.escalation_message.clone()
            }
        }
    }
}
