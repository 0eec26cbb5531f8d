//! Prompt building and response parsing for LLM requests

pub mod prompt_builder;
pub mod response_normalizer;
