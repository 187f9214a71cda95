//! Core UI functionality for the tabshell application.
//!
//! This module contains the fundamental building blocks for the user
//! interface: event handling, shared state, and component abstractions.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Application context and shared state management
//! - [`drawer`] - Drawer visibility state and its shared handle
//! - [`event_handler`] - Event processing and keyboard/mouse input handling
//!
//! # Architecture
//!
//! The UI follows a component-based architecture where:
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Context** provides shared application state and services
//! 4. **Events** are processed through the [`EventHandler`] system
//!
//! The drawer handle is the one piece of state shared between components:
//! the context constructs it once and every consumer receives a clone at
//! construction time, never through an ambient lookup.

pub mod actions;
pub mod component;
pub mod context;
pub mod drawer;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, TabSelection};
pub use component::Component;
pub use context::AppContext;
pub use drawer::{DrawerHandle, DrawerState};
pub use event_handler::{EventHandler, EventType};
