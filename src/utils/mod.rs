//! Utility modules for the survey application.
//!
//! - [`color`] - Band and accent colors shared by the UI components

pub mod color;
