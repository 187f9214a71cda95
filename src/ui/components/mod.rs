//! UI components for the tabshell application.

pub mod drawer_surface;
pub mod header_bar;
pub mod logs_overlay;
pub mod screens;
pub mod tab_bar;

pub use drawer_surface::{DrawerEntry, DrawerSurface};
pub use header_bar::HeaderBar;
pub use logs_overlay::LogsOverlay;
pub use screens::ScreenView;
pub use tab_bar::TabBar;
