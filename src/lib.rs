//! Likert - a terminal customer satisfaction survey
//!
//! This library provides a single-question survey card: a Likert rating
//! scale with hover preview and sentiment banding, an optional comment, and
//! a submission flow with toast feedback. The UI is built with Ratatui; the
//! survey state machine is usable on its own.
//!
//! # Modules
//!
//! * [`survey`] - Scales, score selection and the form state machine
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`logger`] - In-app log buffer and the `log` backend
//! * [`utils`] - Colour helpers

/// Command-line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Rating scales, the score selector and the survey form
pub mod survey;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility helpers
pub mod utils;
