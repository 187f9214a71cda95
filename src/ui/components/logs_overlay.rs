//! Debug logs overlay, opened with `G` or from the drawer.

use crate::constants::LOGS_TITLE;
use crate::logger::Logger;
use crate::ui::core::{actions::Action, AppContext, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug)]
pub struct LogsOverlay {
    logger: Logger,
    scroll_offset: u16,
}

impl LogsOverlay {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            logger: ctx.logger.clone(),
            scroll_offset: 0,
        }
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }
}

impl Component for LogsOverlay {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::ShowLogs(false),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let popup = LayoutManager::centered_rect(80, 70, rect);
        f.render_widget(Clear, popup);

        let lines: Vec<Line> = self.logger.get_logs().into_iter().map(Line::from).collect();
        let paragraph = Paragraph::new(lines)
            .scroll((self.scroll_offset, 0))
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(LOGS_TITLE),
            );
        f.render_widget(paragraph, popup);
    }
}
