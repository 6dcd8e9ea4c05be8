//! UI rendering module for clima
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod help_overlay;
pub mod search;

pub use help_overlay::render as render_help_overlay;
pub use search::render as render_search;
