/// Represents the currently active tab in the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabSelection {
    #[default]
    Home,
    Explore,
    Favorites,
    Settings,
}

impl TabSelection {
    pub const ALL: [TabSelection; 4] = [
        TabSelection::Home,
        TabSelection::Explore,
        TabSelection::Favorites,
        TabSelection::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TabSelection::Home => "Home",
            TabSelection::Explore => "Explore",
            TabSelection::Favorites => "Favorites",
            TabSelection::Settings => "Settings",
        }
    }

    pub fn next(&self) -> TabSelection {
        match self {
            TabSelection::Home => TabSelection::Explore,
            TabSelection::Explore => TabSelection::Favorites,
            TabSelection::Favorites => TabSelection::Settings,
            TabSelection::Settings => TabSelection::Home,
        }
    }

    pub fn previous(&self) -> TabSelection {
        match self {
            TabSelection::Home => TabSelection::Settings,
            TabSelection::Explore => TabSelection::Home,
            TabSelection::Favorites => TabSelection::Explore,
            TabSelection::Settings => TabSelection::Favorites,
        }
    }

    /// Parse a config value like `start_tab = "explore"`
    pub fn from_name(name: &str) -> Option<TabSelection> {
        match name.to_lowercase().as_str() {
            "home" => Some(TabSelection::Home),
            "explore" => Some(TabSelection::Explore),
            "favorites" => Some(TabSelection::Favorites),
            "settings" => Some(TabSelection::Settings),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NavigateToTab(TabSelection),
    ShowAbout,
    LeaveAbout,

    // UI operations
    ShowLogs(bool),

    // App control
    Quit,
    None,
}
