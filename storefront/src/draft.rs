//! DraftStore - durable pending-order slot
//!
//! A single JSON record under the client data directory, written when a
//! user initiates checkout and deleted once a finalization call succeeds.
//! The slot is global: starting a new checkout before the previous pending
//! order is resolved overwrites it (single outstanding checkout at a time).

use std::path::{Path, PathBuf};

use shared::models::PendingOrder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stored draft record
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct DraftRecord {
    pending: PendingOrder,
    /// Unix seconds at save time
    saved_at: i64,
}

/// Single-slot pending-order storage
///
/// File path: `{data}/checkout/draft.json`
pub struct DraftStore {
    file_path: PathBuf,
}

impl DraftStore {
    /// Create a store rooted at the client data directory
    pub fn new(data_path: &Path) -> Self {
        Self {
            file_path: data_path.join("checkout/draft.json"),
        }
    }

    /// Write the slot, overwriting any previous draft
    pub fn save(&self, pending: &PendingOrder) -> Result<(), DraftError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let record = DraftRecord {
            pending: pending.clone(),
            saved_at: chrono::Utc::now().timestamp(),
        };
        let content = serde_json::to_string_pretty(&record)?;
        std::fs::write(&self.file_path, content)?;

        tracing::debug!("Pending order draft saved");
        Ok(())
    }

    /// Read the slot
    ///
    /// A missing, unreadable, or unparseable record reads as `None` - a
    /// malformed draft is treated the same as no pending order.
    pub fn load(&self) -> Option<PendingOrder> {
        if !self.file_path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read pending order draft");
                return None;
            }
        };

        match serde_json::from_str::<DraftRecord>(&content) {
            Ok(record) => Some(record.pending),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed pending order draft, treating as absent");
                None
            }
        }
    }

    /// Whether the slot currently holds a record
    pub fn exists(&self) -> bool {
        self.file_path.exists()
    }

    /// Delete the slot
    pub fn clear(&self) -> Result<(), DraftError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("Pending order draft cleared");
        }
        Ok(())
    }
}
