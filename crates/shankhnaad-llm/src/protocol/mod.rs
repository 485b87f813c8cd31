//! Wire request/response types, one module per provider shape.
//!
//! All conversion goes through the neutral [`crate::ChatRequest`] hub; the
//! provider clients never see each other's wire types.

pub mod gemini;
pub mod openai;
