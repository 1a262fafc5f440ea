//! Core UI functionality for the survey application.
//!
//! This module contains the fundamental building blocks for the user interface:
//! event handling, actions, the component abstraction, and background task
//! management. It provides the foundation that all UI components build upon.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and focus targets
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard/mouse input polling and frame timing
//! - [`task_manager`] - Background submission handling
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** are returned by components and applied by the app component
//! 3. **Events** are processed through the [`EventHandler`] system
//! 4. **Tasks** run asynchronously via the [`TaskManager`] and report back as actions

// Core UI modules
pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, FocusTarget};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
