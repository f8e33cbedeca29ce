//! Data types for the image export service.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Errors that can occur while exporting an image.
///
/// Degenerate geometry is not represented here; it yields an empty result,
/// not an error. These variants cover cooperative cancellation and genuine
/// backend failures, the only conditions the export service propagates.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Rasterization failed: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save exported image: {0}")]
    Save(#[from] std::io::Error),

    #[error("Export cancelled")]
    Cancelled,

    #[error("Export task failed: {0}")]
    Task(String),
}

/// Cooperative cancellation flag for export operations.
///
/// Cloned handles share one flag; the export checks it before starting
/// expensive rasterization and aborts with [`ExportError::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals every clone of this token to abort.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
