use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, Result};

/// One repository to analyze. Fields other than `name` in the input are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkItem {
    pub name: String,
}

/// Read the JSON list of repositories.
///
/// Any failure here is fatal for the batch and happens before the first submission.
pub async fn load_work_items(path: &Path) -> Result<Vec<WorkItem>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::Input(format!("Failed to read {}: {e}", path.display())))?;

    let items: Vec<WorkItem> = serde_json::from_str(&raw)
        .map_err(|e| AppError::Input(format!("Failed to parse {}: {e}", path.display())))?;

    tracing::debug!(path = %path.display(), count = items.len(), "Loaded work items");
    Ok(items)
}
