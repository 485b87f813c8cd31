//! Orchestration: intent classification, prompt assembly and fallback
//! routing across the configured providers.
//!
//! This is the only layer the UI talks to. It accepts plain data (user text,
//! history, optional media) and returns normalized [`TurnOutcome`] values;
//! provider-specific shapes and errors never cross this boundary.

pub mod intent;
pub mod placeholder;
pub mod policy;
pub mod prompt;
pub mod replies;
pub mod router;

pub use intent::{Intent, IntentClassifier, PatternClassifier};
pub use policy::contains_explicit_content;
pub use prompt::PromptAssembler;
pub use router::Orchestrator;

pub use shankhnaad_core::TurnOutcome;
