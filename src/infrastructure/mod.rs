//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - OpenAI: chat-completion client implementing the LLM port
//! - HTTP: REST API routes and the embedded browser page
//! - Export: spreadsheet flattening of groomed items
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod export;
pub mod http;
pub mod openai;
pub mod state;
