//! Grooming and export DTOs

use serde::{Deserialize, Serialize};

use crate::domain::entities::BacklogItem;

/// Successful grooming response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroomResponseDto {
    pub items: Vec<BacklogItem>,
}

/// Error body shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Items to export, as currently displayed by the client
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequestDto {
    #[serde(default)]
    pub items: Vec<BacklogItem>,
}
