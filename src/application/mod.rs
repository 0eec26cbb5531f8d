//! Application layer - Use cases and the ports they depend on
//!
//! This layer contains:
//! - Ports: the outbound LLM interface the grooming use case requires
//! - Services: prompt building, response normalization and the grooming flow
//! - DTOs: request/response shapes for the HTTP boundary

pub mod dto;
pub mod ports;
pub mod services;
