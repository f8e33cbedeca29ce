//! File saving functionality for exported images.

use super::types::ExportError;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for saving exported images to disk.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save images to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join("Inkboard"),
            filename_template: "drawing_%Y-%m-%d_%H%M%S".to_string(),
        }
    }
}

/// Generate a PNG filename from the template and current time.
pub fn generate_filename(template: &str) -> String {
    let now = Local::now();
    format!("{}.png", now.format(template))
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized path when resolvable.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save encoded image data to a file.
///
/// # Returns
/// Path to the saved file.
pub fn save_image(image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;

    let filename = generate_filename(&config.filename_template);
    let file_path = directory.join(&filename);

    log::info!(
        "Saving export to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    // Restrict to user read/write only.
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    log::debug!("Export saved: {}", file_path.display());

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generated_filename_uses_template() {
        let filename = generate_filename("sketch_%Y%m%d");
        assert!(filename.starts_with("sketch_"));
        assert!(filename.ends_with(".png"));
        assert!(filename.contains("20"));
    }

    #[test]
    fn save_writes_bytes_to_disk() {
        let temp = TempDir::new().unwrap();
        let config = FileSaveConfig {
            save_directory: temp.path().join("exports"),
            filename_template: "test_%s".to_string(),
        };

        let path = save_image(b"not-a-real-png", &config).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap(), b"not-a-real-png");
    }

    #[test]
    fn expand_tilde_resolves_home() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with('~'));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn default_config_points_at_inkboard_directory() {
        let config = FileSaveConfig::default();
        assert!(
            config
                .save_directory
                .to_string_lossy()
                .contains("Inkboard")
        );
    }
}
