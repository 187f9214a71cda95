//! Header bar component with the drawer trigger and user block.
//!
//! The menu trigger is the drawer's opening consumer: activating it invokes
//! `open()` on the shared drawer handle and nothing else. The header keeps
//! no drawer state of its own.

use crate::errors::ShellError;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::core::{actions::Action, AppContext, Component, DrawerHandle};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width in columns of the clickable menu-trigger zone at the left edge
const MENU_TRIGGER_WIDTH: u16 = 4;

#[derive(Debug)]
pub struct HeaderBar {
    drawer: DrawerHandle,
    logger: Logger,
    icons: IconService,
    greeting_name: String,
    greeting_email: String,
}

impl HeaderBar {
    pub fn new(ctx: &AppContext) -> Result<Self, ShellError> {
        Ok(Self {
            drawer: ctx.drawer()?,
            logger: ctx.logger.clone(),
            icons: ctx.icons,
            greeting_name: ctx.config.display.greeting_name.clone(),
            greeting_email: ctx.config.display.greeting_email.clone(),
        })
    }

    /// Handle a mouse event given the area the header was rendered into
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let in_trigger = mouse.row == area.y
                && mouse.column >= area.x
                && mouse.column < area.x + MENU_TRIGGER_WIDTH;
            if in_trigger {
                self.logger.log("Header: menu trigger clicked, opening drawer".to_string());
                self.drawer.open();
            }
        }
        Action::None
    }
}

impl Component for HeaderBar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('m') => {
                self.logger.log("Header: menu key pressed, opening drawer".to_string());
                self.drawer.open();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let header_icons = self.icons.header();

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", header_icons.menu),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("{} ", header_icons.profile), Style::default().fg(Color::Green)),
            Span::styled(
                format!("Hello, {}!", self.greeting_name),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", self.greeting_email),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("  {}", header_icons.notifications),
                Style::default().fg(Color::Green),
            ),
        ]);

        let header = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(header, rect);
    }
}
