//! Tabular view of backlog items

use serde::Serialize;

use crate::domain::entities::BacklogItem;

/// File name offered to the browser for CSV downloads
pub const EXPORT_FILENAME: &str = "groomed_backlog.csv";

const HEADERS: [&str; 5] = ["Title", "User Story", "Acceptance Criteria", "Priority", "Tags"];

/// One spreadsheet row; every cell is plain text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "User Story")]
    pub user_story: String,
    /// Criteria joined by newlines
    #[serde(rename = "Acceptance Criteria")]
    pub acceptance_criteria: String,
    #[serde(rename = "Priority")]
    pub priority: String,
    /// Tags joined by ", "
    #[serde(rename = "Tags")]
    pub tags: String,
}

impl From<&BacklogItem> for ExportRow {
    fn from(item: &BacklogItem) -> Self {
        Self {
            title: item.title.clone(),
            user_story: item.user_story.clone(),
            acceptance_criteria: item.acceptance_criteria.join("\n"),
            priority: item.priority.to_string(),
            tags: item.tags.join(", "),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Spreadsheet built from a list of backlog items
#[derive(Debug, Clone, Default)]
pub struct BacklogSheet {
    rows: Vec<ExportRow>,
}

impl BacklogSheet {
    pub fn from_items(items: &[BacklogItem]) -> Self {
        Self {
            rows: items.iter().map(ExportRow::from).collect(),
        }
    }

    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }

    /// Render as CSV. The header row is always present, even with no items.
    pub fn to_csv(&self) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer.write_record(HEADERS)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }

        writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
    }
}
