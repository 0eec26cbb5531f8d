//! Export API routes

use axum::{
    body::Body,
    http::header,
    response::{IntoResponse, Response},
};

use super::body::read_json_body;
use super::ApiError;
use crate::application::dto::ExportRequestDto;
use crate::infrastructure::export::{BacklogSheet, EXPORT_FILENAME};

/// Export posted backlog items as a CSV download
pub async fn export_backlog(body: Body) -> Result<Response, ApiError> {
    let payload = read_json_body(body).await?;
    let request: ExportRequestDto =
        serde_json::from_value(payload).map_err(|_| ApiError::InvalidBody)?;

    let sheet = BacklogSheet::from_items(&request.items);
    let csv = sheet
        .to_csv()
        .inspect_err(|e| tracing::error!("CSV export failed: {}", e))?;

    tracing::debug!("Exported {} rows to CSV", sheet.rows().len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        csv,
    )
        .into_response())
}
