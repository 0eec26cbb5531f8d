//! Domain layer - Core backlog model
//!
//! This layer contains:
//! - Entities: BacklogItem and its Priority
//!
//! Entities carry serde derives because the JSON shape of a backlog item is the
//! contract shared by the model provider, the REST API and the browser page.

pub mod entities;
