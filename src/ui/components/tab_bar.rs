//! Bottom tab bar component.
//!
//! Keys `1`-`4` select a tab directly; Tab and BackTab cycle. The tab bar
//! owns no screen content, it only emits navigation actions.

use crate::icons::IconService;
use crate::ui::core::{actions::Action, AppContext, Component, TabSelection};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug)]
pub struct TabBar {
    active: TabSelection,
    icons: IconService,
}

impl TabBar {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            active: TabSelection::default(),
            icons: ctx.icons,
        }
    }

    pub fn set_active(&mut self, tab: TabSelection) {
        self.active = tab;
    }

    pub fn active(&self) -> TabSelection {
        self.active
    }

    fn tab_icon(&self, tab: TabSelection) -> &'static str {
        let icons = self.icons.tabs();
        match tab {
            TabSelection::Home => icons.home,
            TabSelection::Explore => icons.explore,
            TabSelection::Favorites => icons.favorites,
            TabSelection::Settings => icons.settings,
        }
    }
}

impl Component for TabBar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('1') => Action::NavigateToTab(TabSelection::Home),
            KeyCode::Char('2') => Action::NavigateToTab(TabSelection::Explore),
            KeyCode::Char('3') => Action::NavigateToTab(TabSelection::Favorites),
            KeyCode::Char('4') => Action::NavigateToTab(TabSelection::Settings),
            KeyCode::Tab => Action::NavigateToTab(self.active.next()),
            KeyCode::BackTab => Action::NavigateToTab(self.active.previous()),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut spans = Vec::new();
        for (index, tab) in TabSelection::ALL.iter().enumerate() {
            let style = if *tab == self.active {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(
                format!(" {} {} [{}] ", self.tab_icon(*tab), tab.title(), index + 1),
                style,
            ));
        }

        let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(bar, rect);
    }
}
