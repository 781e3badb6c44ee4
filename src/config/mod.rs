// Configuration management module

use crate::error::{Result, ResolverError};
use crate::log_info;
use crate::utils::fs::{atomic_write, ensure_dir};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_CONFIG_DIR: &str = ".media_resolver";
const APP_CONFIG_NAME: &str = "config.json";

/// Main configuration structure for the media resolver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    pub version: String,
    /// Directory tree of downloaded media, one subdirectory per mapped name
    pub working_dir: PathBuf,
    /// Binary tweet log input
    pub log_path: PathBuf,
    /// JSON map of expanded URL to directory name
    pub url_map_path: PathBuf,
    /// Where the resolved tweet log is written
    pub export_path: PathBuf,
    /// Stem suffix marking an image as a video thumbnail
    pub thumbnail_suffix: String,
    /// Extensions enumerated as media (dot included)
    pub image_formats: Vec<String>,
    /// Extensions tried when resolving a thumbnail to a local video,
    /// in priority order (dot included)
    pub video_formats: Vec<String>,
    /// Print a progress line every this many tweets
    pub progress_interval: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            working_dir: PathBuf::from("media"),
            log_path: PathBuf::from("log.bin"),
            url_map_path: PathBuf::from("url_to_name.json"),
            export_path: PathBuf::from("log_media_resolved.bin"),
            thumbnail_suffix: "_thumb".to_string(),
            image_formats: vec![".jpg".to_string(), ".png".to_string()],
            video_formats: vec![
                ".mp4".to_string(),
                ".webm".to_string(),
                ".mkv".to_string(),
            ],
            progress_interval: 100,
        }
    }
}

impl ResolverConfig {
    /// Load configuration from disk, creating default if not exists
    pub fn load() -> Result<Self> {
        let config_path = get_config_path();

        log_info!("Loading configuration from {}", config_path.display());

        let config = if config_path.exists() {
            let data = std::fs::read_to_string(&config_path).map_err(|e| {
                ResolverError::Config(format!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                ))
            })?;

            serde_json::from_str(&data)
                .map_err(|e| ResolverError::Config(format!("Failed to parse config file: {}", e)))?
        } else {
            log_info!("Config file not found, creating default configuration");
            Self::default()
        };

        config.validate()?;
        config.save()?;

        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path();

        log_info!("Saving configuration to {}", config_path.display());

        ensure_dir(&get_config_dir())?;

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ResolverError::Config(format!("Failed to serialize config: {}", e)))?;

        atomic_write(&config_path, json.as_bytes())?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.thumbnail_suffix.is_empty() {
            return Err(ResolverError::Config(
                "Thumbnail suffix must not be empty".to_string(),
            ));
        }

        if self.image_formats.is_empty() || self.video_formats.is_empty() {
            return Err(ResolverError::Config(
                "Image and video format lists must not be empty".to_string(),
            ));
        }

        for ext in self.image_formats.iter().chain(self.video_formats.iter()) {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ResolverError::Config(format!(
                    "Invalid media extension (leading dot required): {}",
                    ext
                )));
            }
        }

        if self.progress_interval == 0 {
            return Err(ResolverError::Config(
                "Progress interval must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Get the configuration directory path
pub fn get_config_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|parent| parent.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_CONFIG_DIR)
}

/// Get the configuration file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join(APP_CONFIG_NAME)
}

/// Get the log directory path
pub fn get_log_dir() -> PathBuf {
    get_config_dir().join("logs")
}
