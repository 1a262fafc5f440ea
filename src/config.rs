//! Configuration management for likert
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_BANNER, DEFAULT_COMMENT_PLACEHOLDER, DEFAULT_COMMENT_PROMPT, DEFAULT_FOOTER,
    DEFAULT_HIGH_ANCHOR, DEFAULT_LOW_ANCHOR, DEFAULT_QUESTION, DEFAULT_SUBTITLE, DEFAULT_TITLE,
    MAX_SCALE_VALUES, SUBMISSION_MAX_ATTEMPTS, TOAST_MAX_SECS,
};
use crate::icons::IconTheme;
use crate::survey::{Scale, ScalePreset, SubmissionPolicy};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub survey: SurveyConfig,
    pub submission: SubmissionConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Survey content and scale granularity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Built-in scale: "eleven_point" (0-10) or "five_point" (1-5)
    pub scale: ScalePreset,
    /// Overrides `scale` when present
    pub custom_scale: Option<CustomScaleConfig>,
    pub title: String,
    pub subtitle: String,
    pub question: String,
    pub comment_prompt: String,
    pub comment_placeholder: String,
    /// Caption under the lowest score
    pub low_anchor: String,
    /// Caption under the highest score
    pub high_anchor: String,
}

/// A fully custom scale definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomScaleConfig {
    pub min: u8,
    pub max: u8,
    /// First score counted as passive
    pub passive_from: u8,
    /// First score counted as promoter
    pub promoter_from: u8,
    /// One label per score, lowest first
    pub labels: Vec<String>,
}

/// Submission behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Artificial latency of the simulated backend, in milliseconds
    pub simulated_delay_ms: u64,
    /// Give up on an attempt after this many milliseconds
    pub timeout_ms: u64,
    /// Attempts per submit (timeouts and transport errors are retried)
    pub max_attempts: u32,
    /// Make the simulated backend fail every submission
    pub simulate_failure: bool,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (hover preview and click to select)
    pub mouse_enabled: bool,
    pub icon_theme: IconTheme,
    /// How long toasts stay on screen, in seconds
    pub toast_duration_secs: u64,
    /// Banner above the card; empty to hide
    pub banner: String,
    /// Footer below the card; empty to hide
    pub footer: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in addition to the in-app log view
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            scale: ScalePreset::ElevenPoint,
            custom_scale: None,
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            question: DEFAULT_QUESTION.to_string(),
            comment_prompt: DEFAULT_COMMENT_PROMPT.to_string(),
            comment_placeholder: DEFAULT_COMMENT_PLACEHOLDER.to_string(),
            low_anchor: DEFAULT_LOW_ANCHOR.to_string(),
            high_anchor: DEFAULT_HIGH_ANCHOR.to_string(),
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 800,
            timeout_ms: 10_000,
            max_attempts: 1,
            simulate_failure: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            icon_theme: IconTheme::Emoji,
            toast_duration_secs: 4,
            banner: DEFAULT_BANNER.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl SurveyConfig {
    /// Resolve the configured scale, preferring the custom definition
    pub fn build_scale(&self) -> Result<Scale> {
        let Some(custom) = &self.custom_scale else {
            return Ok(self.scale.scale());
        };

        let scale = Scale::new(
            custom.min,
            custom.max,
            custom.passive_from,
            custom.promoter_from,
            custom.labels.clone(),
        )
        .context("Invalid custom_scale")?;

        if scale.len() > MAX_SCALE_VALUES {
            anyhow::bail!(
                "custom_scale has {} values, at most {} fit on the card",
                scale.len(),
                MAX_SCALE_VALUES
            );
        }
        Ok(scale)
    }
}

impl SubmissionConfig {
    #[must_use]
    pub fn policy(&self) -> SubmissionPolicy {
        SubmissionPolicy {
            timeout: Duration::from_millis(self.timeout_ms),
            max_attempts: self.max_attempts,
        }
    }

    #[must_use]
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("likert.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("likert").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.survey.build_scale()?;

        if self.survey.question.trim().is_empty() {
            anyhow::bail!("survey.question cannot be empty");
        }

        if self.submission.timeout_ms == 0 {
            anyhow::bail!("submission.timeout_ms must be greater than 0");
        }

        if self.submission.max_attempts == 0 || self.submission.max_attempts > SUBMISSION_MAX_ATTEMPTS {
            anyhow::bail!(
                "submission.max_attempts must be between 1 and {}, got {}",
                SUBMISSION_MAX_ATTEMPTS,
                self.submission.max_attempts
            );
        }

        if self.ui.toast_duration_secs == 0 || self.ui.toast_duration_secs > TOAST_MAX_SECS {
            anyhow::bail!(
                "ui.toast_duration_secs must be between 1 and {}, got {}",
                TOAST_MAX_SECS,
                self.ui.toast_duration_secs
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# likert Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("likert"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
