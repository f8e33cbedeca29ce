//! Asynchronous export pipeline.
//!
//! Rasterization and encoding are CPU-bound and must not block input
//! handling, so the pipeline runs them on the blocking thread pool. The
//! request carries an owned snapshot of the stroke data; the live
//! collections are never touched from the worker.

use std::path::PathBuf;

use super::file::{self, FileSaveConfig};
use super::image::{ExportOptions, render_strokes_to_png};
use super::types::{CancelToken, ExportError};
use crate::draw::Stroke;
use tokio::task;

/// A self-contained export job.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Snapshot of the strokes to render, taken at request time.
    pub strokes: Vec<Stroke>,
    pub options: ExportOptions,
    /// When set, the encoded PNG is also written to disk.
    pub save_config: Option<FileSaveConfig>,
}

/// Result of a completed export job.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Encoded PNG bytes; `None` when there was nothing to draw.
    pub png_data: Option<Vec<u8>>,
    /// Path the image was saved to (if saving was requested and there was
    /// content to save).
    pub saved_path: Option<PathBuf>,
}

/// Runs an export job off the caller's thread.
///
/// Degenerate geometry resolves to an outcome with no data; cancellation and
/// backend failures surface as [`ExportError`]s.
pub async fn perform_export(
    request: ExportRequest,
    cancel: CancelToken,
) -> Result<ExportOutcome, ExportError> {
    log::info!("Starting export of {} stroke(s)", request.strokes.len());

    let ExportRequest {
        strokes,
        options,
        save_config,
    } = request;

    let render_cancel = cancel.clone();
    let png_data = task::spawn_blocking(move || {
        render_strokes_to_png(&strokes, &options, &render_cancel)
    })
    .await
    .map_err(|e| ExportError::Task(format!("Render task failed: {e}")))??;

    let Some(data) = png_data else {
        log::debug!("Export produced no image (nothing to draw)");
        return Ok(ExportOutcome {
            png_data: None,
            saved_path: None,
        });
    };

    let saved_path = match save_config {
        Some(config) => {
            let bytes = data.clone();
            Some(
                task::spawn_blocking(move || file::save_image(&bytes, &config))
                    .await
                    .map_err(|e| ExportError::Task(format!("Save task failed: {e}")))??,
            )
        }
        None => None,
    };

    Ok(ExportOutcome {
        png_data: Some(data),
        saved_path,
    })
}
