//! Application services - Use case implementations
//!
//! The grooming flow is a straight pipeline: build the prompt, ask the LLM
//! once, normalize whatever comes back into backlog items.

pub mod grooming_service;
pub mod llm;

pub use grooming_service::{GroomingError, GroomingService};
