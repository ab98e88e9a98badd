//! ftz-core: FTZ vs non-FTZ landed cost comparison and the FAQ responder
//! that explains it.

pub mod config;
pub mod cost_model;
pub mod error;
pub mod faq;
pub mod format;
pub mod insights;
pub mod params;
pub mod session;
pub mod types;
