//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the
//! application, supporting different themes like emoji, Unicode, and ASCII
//! fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Header bar icons
#[derive(Debug, Clone)]
pub struct HeaderIcons {
    pub menu: &'static str,
    pub profile: &'static str,
    pub notifications: &'static str,
}

/// Tab bar icons
#[derive(Debug, Clone)]
pub struct TabIcons {
    pub home: &'static str,
    pub explore: &'static str,
    pub favorites: &'static str,
    pub settings: &'static str,
}

/// Drawer entry icons
#[derive(Debug, Clone)]
pub struct DrawerIcons {
    pub about: &'static str,
    pub logs: &'static str,
    pub close: &'static str,
}

/// Resolves icon glyphs for the configured theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconService {
    theme: IconTheme,
}

impl IconService {
    pub fn new(theme: IconTheme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> IconTheme {
        self.theme
    }

    pub fn header(&self) -> HeaderIcons {
        match self.theme {
            IconTheme::Emoji => HeaderIcons {
                menu: "☰",
                profile: "👤",
                notifications: "🔔",
            },
            IconTheme::Unicode => HeaderIcons {
                menu: "≡",
                profile: "●",
                notifications: "◉",
            },
            IconTheme::Ascii => HeaderIcons {
                menu: "=",
                profile: "@",
                notifications: "!",
            },
        }
    }

    pub fn tabs(&self) -> TabIcons {
        match self.theme {
            IconTheme::Emoji => TabIcons {
                home: "🏠",
                explore: "🧭",
                favorites: "❤️",
                settings: "⚙️",
            },
            IconTheme::Unicode => TabIcons {
                home: "⌂",
                explore: "◎",
                favorites: "♥",
                settings: "✦",
            },
            IconTheme::Ascii => TabIcons {
                home: "+",
                explore: "o",
                favorites: "*",
                settings: "#",
            },
        }
    }

    pub fn drawer(&self) -> DrawerIcons {
        match self.theme {
            IconTheme::Emoji => DrawerIcons {
                about: "ℹ️",
                logs: "🔍",
                close: "✖",
            },
            IconTheme::Unicode => DrawerIcons {
                about: "ⓘ",
                logs: "§",
                close: "×",
            },
            IconTheme::Ascii => DrawerIcons {
                about: "i",
                logs: "?",
                close: "x",
            },
        }
    }
}
