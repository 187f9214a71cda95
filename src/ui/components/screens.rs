//! Tab screen bodies and the About screen.
//!
//! Pure presentation: a title and a subtitle centered in the body area.

use crate::ui::core::{actions::Action, Component, TabSelection};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn screen_copy(tab: TabSelection) -> (&'static str, &'static str) {
    match tab {
        TabSelection::Home => ("Home", "Welcome back! Here's what's happening today"),
        TabSelection::Explore => ("Explore", "Discover new content and features"),
        TabSelection::Favorites => ("Favorites", "Your saved items live here"),
        TabSelection::Settings => ("Settings", "Manage your app preferences"),
    }
}

#[derive(Debug)]
pub struct ScreenView {
    tab: TabSelection,
    showing_about: bool,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenView {
    pub fn new() -> Self {
        Self {
            tab: TabSelection::default(),
            showing_about: false,
        }
    }

    pub fn set_tab(&mut self, tab: TabSelection) {
        self.tab = tab;
    }

    pub fn show_about(&mut self, showing: bool) {
        self.showing_about = showing;
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        if self.showing_about {
            return vec![
                Line::from(Span::styled(
                    "About",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "tabshell - a tabbed shell with a slide-out drawer",
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Esc to go back home",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
        }

        let (title, subtitle) = screen_copy(self.tab);
        vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
        ]
    }
}

impl Component for ScreenView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.showing_about {
            match key.code {
                KeyCode::Enter | KeyCode::Char('b') => return Action::LeaveAbout,
                _ => {}
            }
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let lines = self.body_lines();
        let height = lines.len() as u16;
        let body = LayoutManager::centered_rect_lines(80, height, rect);
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(paragraph, body);
    }
}
