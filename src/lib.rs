//! tabshell - a tabbed terminal app shell with a slide-out navigation drawer
//!
//! This library provides a small application shell built with Ratatui: a
//! header bar with a menu trigger, four tab screens, and a slide-out drawer
//! that overlays the tab content. The one piece of cross-cutting state is
//! the drawer's visibility, shared between the header (which opens it) and
//! the drawer surface (which closes it) through a handle constructed once
//! at the application root.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`errors`] - Shared error types
//! * [`icons`] - Icon themes for the header, tab bar, and drawer
//! * [`logger`] - In-memory and file logging
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Shared error types
pub mod errors;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;
