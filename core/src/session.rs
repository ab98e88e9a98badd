//! Session: the one piece of mutable state in the calculator.
//!
//! Owns the current inputs, the figures derived from them, the responder
//! and the chat transcript. Everything is passed by reference from here;
//! there are no process-wide singletons.

use crate::{
    config::ModelConfig,
    cost_model::{compute, DerivedFigures},
    faq::FaqResponder,
    insights::Insights,
    params::InputParameters,
    types::SessionId,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::User      => "You",
            Speaker::Assistant => "AI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

/// Append-only record of one session's conversation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatTranscript {
    turns: Vec<Turn>,
}

impl ChatTranscript {
    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.turns.push(Turn {
            speaker,
            text: text.into(),
            at: Utc::now(),
        });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    fn clear(&mut self) {
        self.turns.clear();
    }
}

pub struct Session {
    pub id: SessionId,
    config: ModelConfig,
    params: InputParameters,
    figures: DerivedFigures,
    responder: FaqResponder,
    transcript: ChatTranscript,
}

impl Session {
    pub fn new(config: ModelConfig, params: InputParameters) -> Self {
        let id = uuid::Uuid::new_v4();
        let figures = compute(&params, &config);
        let responder = FaqResponder::new(config.responder.clone());
        log::info!("session {id}: started");
        Self {
            id,
            config,
            params,
            figures,
            responder,
            transcript: ChatTranscript::default(),
        }
    }

    pub fn params(&self) -> &InputParameters {
        &self.params
    }

    pub fn figures(&self) -> &DerivedFigures {
        &self.figures
    }

    pub fn insights(&self) -> Insights {
        Insights::from_figures(&self.figures)
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    /// Replace the inputs and recompute every figure.
    pub fn update_params(&mut self, params: InputParameters) {
        self.figures = compute(&params, &self.config);
        self.params = params;
        log::debug!(
            "session {}: recomputed, net savings ${:.2}",
            self.id,
            self.figures.net_savings_to_brand
        );
    }

    /// Ask one question. Blank input is ignored and leaves the transcript
    /// untouched; otherwise both turns are appended and the answer returned.
    pub fn ask(&mut self, question: &str) -> Option<String> {
        let answer = self.responder.respond(question, &self.figures);
        if answer.is_empty() {
            return None;
        }
        self.transcript.push(Speaker::User, question);
        self.transcript.push(Speaker::Assistant, answer.clone());
        Some(answer)
    }

    /// Start the conversation over. Inputs and figures are kept.
    pub fn reset(&mut self) {
        log::info!(
            "session {}: reset after {} turns",
            self.id,
            self.transcript.len()
        );
        self.transcript.clear();
    }
}
