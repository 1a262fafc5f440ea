//! Command-line arguments.

use crate::config::Config;
use crate::survey::ScalePreset;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Scale choices accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScaleArg {
    /// 0 to 10
    ElevenPoint,
    /// 1 to 5
    FivePoint,
}

impl From<ScaleArg> for ScalePreset {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::ElevenPoint => ScalePreset::ElevenPoint,
            ScaleArg::FivePoint => ScalePreset::FivePoint,
        }
    }
}

#[derive(Parser, Debug, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Read configuration from this file instead of the default locations
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured scale
    #[arg(short, long, value_enum)]
    pub scale: Option<ScaleArg>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub generate_config: Option<Option<PathBuf>>,

    /// Make every submission fail
    #[arg(long)]
    pub simulate_failure: bool,

    /// Submit this score without starting the UI
    #[arg(long)]
    pub score: Option<u8>,

    /// Comment to send along with --score
    #[arg(long, requires = "score")]
    pub comment: Option<String>,
}

impl CliArgs {
    pub fn is_headless(&self) -> bool {
        self.score.is_some()
    }

    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(scale) = self.scale {
            config.survey.scale = scale.into();
            config.survey.custom_scale = None;
        }
        if self.simulate_failure {
            config.submission.simulate_failure = true;
        }
    }
}
