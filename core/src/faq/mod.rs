//! FAQ responder: fuzzy matching of free-text questions to templated answers.

pub mod catalog;
pub mod responder;
pub mod similarity;
pub mod templates;

pub use catalog::{FaqEntry, TemplateId, CATALOG};
pub use responder::{FaqResponder, MatchResult};
pub use templates::ReturnMetrics;
