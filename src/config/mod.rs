//! Configuration file support for inkboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/inkboard/config.toml`. Settings
//! include stroke defaults, surface policies, background paints, and export
//! file delivery.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, PaintSpec, StopSpec};
pub use types::{DrawingConfig, ExportConfig, SurfaceConfig};

use crate::draw::{MIN_GRANULARITY, StrokeStyle};
use crate::export::{FileSaveConfig, Paint, file::expand_tilde};
use crate::surface::SurfacePolicy;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root type that gets deserialized from the TOML file. All
/// fields have sensible defaults and will use those if not specified.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_width = 5.0
/// granularity = 8
/// smooth_paths = true
///
/// [surface]
/// multi_line = true
/// clear_on_finish = false
///
/// [export]
/// directory = "~/Pictures/Sketches"
/// filename_template = "sketch_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Stroke defaults (color, width, granularity, smoothing)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Surface collection policies and background paint
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Export file delivery settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Ensures user-provided values won't cause rendering issues. Invalid
    /// values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 32.0
    /// - `granularity`: >= 5
    /// - `filename_template`: non-empty
    fn validate_and_clamp(&mut self) {
        // Stroke width: 1.0 - 32.0
        if !(1.0..=32.0).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 1.0-32.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = self.drawing.default_width.clamp(1.0, 32.0);
        }

        // Granularity floor
        if self.drawing.granularity < MIN_GRANULARITY {
            log::warn!(
                "Invalid granularity {}, clamping to minimum {}",
                self.drawing.granularity,
                MIN_GRANULARITY
            );
            self.drawing.granularity = MIN_GRANULARITY;
        }

        // An empty template would produce bare ".png" filenames
        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty export filename_template, using default");
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {config:?}");

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML and writes it to
    /// `~/.config/inkboard/config.toml`, creating the parent directory if
    /// needed.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<()> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// The stroke style the surface stamps onto new strokes.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.drawing.default_color.to_color(),
            width: self.drawing.default_width,
            granularity: self.drawing.granularity.max(MIN_GRANULARITY),
            smooth: self.drawing.smooth_paths,
        }
    }

    /// The collection policies the surface applies.
    pub fn surface_policy(&self) -> SurfacePolicy {
        SurfacePolicy {
            multi_line: self.surface.multi_line,
            clear_on_finish: self.surface.clear_on_finish,
            max_strokes: self.surface.max_strokes,
        }
    }

    /// The background paint for rendering and export.
    pub fn background_paint(&self) -> Paint {
        self.surface.background.to_paint()
    }

    /// File delivery settings for the export pipeline.
    pub fn file_save_config(&self) -> FileSaveConfig {
        let mut save_config = FileSaveConfig {
            filename_template: self.export.filename_template.clone(),
            ..FileSaveConfig::default()
        };
        if !self.export.directory.trim().is_empty() {
            save_config.save_directory = expand_tilde(self.export.directory.trim());
        }
        save_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLACK;

    #[test]
    fn defaults_are_usable_without_a_file() {
        let config = Config::default();
        let style = config.stroke_style();
        assert_eq!(style.color, BLACK);
        assert_eq!(style.width, 5.0);
        assert_eq!(style.granularity, 5);
        assert!(style.smooth);

        let policy = config.surface_policy();
        assert!(!policy.multi_line);
        assert_eq!(policy.max_strokes, 0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            default_width = 500.0
            granularity = 1
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_width, 32.0);
        assert_eq!(config.drawing.granularity, 5);
    }

    #[test]
    fn empty_filename_template_falls_back() {
        let mut config: Config = toml::from_str(
            r#"
            [export]
            filename_template = "  "
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(
            config.export.filename_template,
            ExportConfig::default().filename_template
        );
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [surface]
            multi_line = true
            "#,
        )
        .unwrap();

        assert!(config.surface.multi_line);
        assert_eq!(config.drawing.default_width, 5.0);
        assert!(config.export.directory.is_empty());
    }

    #[test]
    fn export_directory_is_expanded() {
        let config: Config = toml::from_str(
            r#"
            [export]
            directory = "/tmp/inkboard-test"
            "#,
        )
        .unwrap();

        let save_config = config.file_save_config();
        assert_eq!(
            save_config.save_directory,
            PathBuf::from("/tmp/inkboard-test")
        );
    }

    #[test]
    fn example_config_parses_and_validates() {
        let example = include_str!("../../config.example.toml");
        let mut config: Config = toml::from_str(example).expect("example config must parse");
        config.validate_and_clamp();
        assert!(config.drawing.default_width >= 1.0);
    }
}
