//! Constants used throughout the application
//!
//! This module centralizes UI text and layout constant values to improve
//! maintainability and consistency.

// UI Layout Constants
/// Minimum drawer panel width in columns
pub const DRAWER_MIN_WIDTH: u16 = 20;
/// Maximum drawer panel width in columns
pub const DRAWER_MAX_WIDTH: u16 = 60;
/// Default drawer panel width in columns
pub const DRAWER_DEFAULT_WIDTH: u16 = 32;
/// Header bar height in rows (content line + bottom border)
pub const HEADER_HEIGHT: u16 = 2;
/// Tab bar height in rows (top border + labels)
pub const TAB_BAR_HEIGHT: u16 = 2;

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DRAWER_TITLE: &str = " Navigation ";
pub const LOGS_TITLE: &str = " Debug Logs - Press 'Esc' or 'G' to close ";

// Logging
pub const LOG_FILE_NAME: &str = "tabshell.log";
