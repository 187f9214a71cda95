//! Slide-out drawer surface.
//!
//! Renders nothing while the drawer is closed. While open it covers the
//! whole screen: a dimmed backdrop plus a left-anchored navigation panel.
//! Esc or a click on the backdrop closes it through the shared handle; the
//! header that opened it is never referenced directly.

use crate::constants::DRAWER_TITLE;
use crate::errors::ShellError;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::core::{actions::Action, AppContext, Component, DrawerHandle, TabSelection};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// One selectable row in the drawer panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEntry {
    Tab(TabSelection),
    About,
    Logs,
}

impl DrawerEntry {
    pub fn title(&self) -> &'static str {
        match self {
            DrawerEntry::Tab(tab) => tab.title(),
            DrawerEntry::About => "About",
            DrawerEntry::Logs => "Logs",
        }
    }
}

#[derive(Debug)]
pub struct DrawerSurface {
    drawer: DrawerHandle,
    logger: Logger,
    icons: IconService,
    entries: Vec<DrawerEntry>,
    list_state: ListState,
    width: u16,
}

impl DrawerSurface {
    pub fn new(ctx: &AppContext) -> Result<Self, ShellError> {
        let mut entries: Vec<DrawerEntry> =
            TabSelection::ALL.iter().copied().map(DrawerEntry::Tab).collect();
        entries.push(DrawerEntry::About);
        entries.push(DrawerEntry::Logs);

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Ok(Self {
            drawer: ctx.drawer()?,
            logger: ctx.logger.clone(),
            icons: ctx.icons,
            entries,
            list_state,
            width: ctx.config.effective_drawer_width(),
        })
    }

    pub fn is_visible(&self) -> bool {
        self.drawer.is_open()
    }

    fn select_next(&mut self) {
        let current = self.list_state.selected().unwrap_or(0);
        let next = (current + 1) % self.entries.len();
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        let current = self.list_state.selected().unwrap_or(0);
        let previous = if current == 0 { self.entries.len() - 1 } else { current - 1 };
        self.list_state.select(Some(previous));
    }

    fn activate_selected(&mut self) -> Action {
        let index = self.list_state.selected().unwrap_or(0);
        let Some(entry) = self.entries.get(index).copied() else {
            return Action::None;
        };

        self.logger
            .log(format!("Drawer: entry '{}' activated, closing drawer", entry.title()));
        self.drawer.close();

        match entry {
            DrawerEntry::Tab(tab) => Action::NavigateToTab(tab),
            DrawerEntry::About => Action::ShowAbout,
            DrawerEntry::Logs => Action::ShowLogs(true),
        }
    }

    fn entry_icon(&self, entry: DrawerEntry) -> &'static str {
        let tab_icons = self.icons.tabs();
        let drawer_icons = self.icons.drawer();
        match entry {
            DrawerEntry::Tab(TabSelection::Home) => tab_icons.home,
            DrawerEntry::Tab(TabSelection::Explore) => tab_icons.explore,
            DrawerEntry::Tab(TabSelection::Favorites) => tab_icons.favorites,
            DrawerEntry::Tab(TabSelection::Settings) => tab_icons.settings,
            DrawerEntry::About => drawer_icons.about,
            DrawerEntry::Logs => drawer_icons.logs,
        }
    }

    /// Handle a mouse event given the full area the overlay was rendered into
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        if !self.is_visible() {
            return Action::None;
        }
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Action::None;
        };

        let panel = LayoutManager::drawer_panel(area, self.width);
        let in_panel = mouse.column >= panel.x
            && mouse.column < panel.x + panel.width
            && mouse.row >= panel.y
            && mouse.row < panel.y + panel.height;

        if !in_panel {
            // Backdrop click dismisses
            self.logger.log("Drawer: backdrop clicked, closing drawer".to_string());
            self.drawer.close();
            return Action::None;
        }

        // Rows inside the panel border map onto entries
        let first_entry_row = panel.y + 1;
        if mouse.row >= first_entry_row {
            let index = (mouse.row - first_entry_row) as usize;
            if index < self.entries.len() {
                self.list_state.select(Some(index));
                return self.activate_selected();
            }
        }
        Action::None
    }
}

impl Component for DrawerSurface {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_visible() {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => {
                self.logger.log("Drawer: Esc pressed, closing drawer".to_string());
                self.drawer.close();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Enter => self.activate_selected(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_visible() {
            return;
        }

        // Dimmed backdrop over the whole screen
        f.render_widget(Clear, rect);
        f.render_widget(Block::default().style(Style::default().bg(Color::Black)), rect);

        let panel = LayoutManager::drawer_panel(rect, self.width);
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| ListItem::new(Line::from(format!(" {} {}", self.entry_icon(*entry), entry.title()))))
            .collect();

        let drawer_icons = self.icons.drawer();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green))
                    .title(DRAWER_TITLE)
                    .title_bottom(Line::from(format!(" Esc {} close ", drawer_icons.close))),
            )
            .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        f.render_widget(Clear, panel);
        f.render_stateful_widget(list, panel, &mut self.list_state);
    }
}
