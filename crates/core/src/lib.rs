//! Core logic of the diary friend: the analysis pipeline, the conversation
//! state machine, emotion banding and the spectrum presentation adapter.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod analysis;
pub mod credentials;
pub mod emotion;
mod error;
mod model_client;
pub mod score;
pub mod session;
pub mod spectrum;

pub use analysis::{Analyzer, Prompts, SubmitOutcome};
pub use error::{AnalyzeError, ConfigError, ExtractionError, ServiceError};
