//! Navigation shell: header bar + active tab screen + tab bar, with the
//! drawer surface rendered last so it overlays everything.

use crate::logger::Logger;
use crate::ui::components::{DrawerSurface, HeaderBar, LogsOverlay, ScreenView, TabBar};
use crate::ui::core::{
    actions::Action,
    event_handler::EventType,
    AppContext, Component, DrawerHandle, TabSelection,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Application state separate from UI concerns
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    pub active_tab: TabSelection,
    pub showing_about: bool,
    pub show_logs: bool,
}

#[derive(Debug)]
pub struct AppComponent {
    // Component composition
    header: HeaderBar,
    tab_bar: TabBar,
    screen: ScreenView,
    drawer_surface: DrawerSurface,
    logs: LogsOverlay,

    // Application state
    state: AppState,

    // Shell's own clone of the shared drawer handle, for global keys
    drawer: DrawerHandle,
    logger: Logger,

    last_area: Rect,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(ctx: &AppContext) -> anyhow::Result<Self> {
        let header = HeaderBar::new(ctx)?;
        let drawer_surface = DrawerSurface::new(ctx)?;
        let drawer = ctx.drawer()?;

        let start_tab = TabSelection::from_name(&ctx.config.ui.start_tab).unwrap_or_default();
        let mut tab_bar = TabBar::new(ctx);
        tab_bar.set_active(start_tab);
        let mut screen = ScreenView::new();
        screen.set_tab(start_tab);

        Ok(Self {
            header,
            tab_bar,
            screen,
            drawer_surface,
            logs: LogsOverlay::new(ctx),
            state: AppState {
                active_tab: start_tab,
                ..Default::default()
            },
            drawer,
            logger: ctx.logger.clone(),
            last_area: Rect::default(),
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer.is_open()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Update all components with current state
    fn sync_component_data(&mut self) {
        self.tab_bar.set_active(self.state.active_tab);
        self.screen.set_tab(self.state.active_tab);
        self.screen.show_about(self.state.showing_about);
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('t') => {
                self.logger.log("Global key: 't' - toggling drawer".to_string());
                self.drawer.toggle();
                Action::None
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs overlay".to_string());
                Action::ShowLogs(true)
            }
            KeyCode::Esc => {
                if self.state.showing_about {
                    self.logger.log("Global key: Esc - leaving About screen".to_string());
                    Action::LeaveAbout
                } else {
                    self.logger.log("Global key: Esc - quitting application".to_string());
                    Action::Quit
                }
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that mutate shell state
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::NavigateToTab(tab) => {
                self.logger
                    .log(format!("Navigation: switching to tab '{}'", tab.title()));
                self.state.active_tab = tab;
                self.state.showing_about = false;
                Action::None
            }
            Action::ShowAbout => {
                self.logger.log("Navigation: showing About screen".to_string());
                self.state.showing_about = true;
                Action::None
            }
            Action::LeaveAbout => {
                self.state.showing_about = false;
                Action::None
            }
            Action::ShowLogs(visible) => {
                self.logger.log(format!("Logs overlay: visible = {}", visible));
                if visible {
                    self.logs.reset_scroll();
                }
                self.state.show_logs = visible;
                Action::None
            }
            Action::None => Action::None,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                if self.state.show_logs {
                    // Logs overlay has priority when visible
                    self.logs.handle_key_events(key)
                } else if self.drawer_surface.is_visible() {
                    // Open drawer has input priority over everything below it
                    self.drawer_surface.handle_key_events(key)
                } else {
                    // Header first (menu trigger), then tab bar, then the
                    // active screen, finally global keys
                    let header_action = self.header.handle_key_events(key);
                    if header_action != Action::None {
                        header_action
                    } else {
                        let tab_action = self.tab_bar.handle_key_events(key);
                        if tab_action != Action::None {
                            tab_action
                        } else {
                            let screen_action = self.screen.handle_key_events(key);
                            if screen_action != Action::None {
                                screen_action
                            } else {
                                self.handle_global_key(key)
                            }
                        }
                    }
                }
            }
            EventType::Mouse(mouse) => {
                if self.state.show_logs {
                    // Logs overlay is modal for mouse input too; clicks must
                    // not reach the trigger underneath it
                    Action::None
                } else if self.drawer_surface.is_visible() {
                    self.drawer_surface.handle_mouse(mouse, self.last_area)
                } else {
                    let chunks = LayoutManager::shell_layout(self.last_area);
                    self.header.handle_mouse(mouse, chunks[0])
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.handle_app_action(action);
        self.sync_component_data();

        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.last_area = rect;
        let chunks = LayoutManager::shell_layout(rect);

        self.header.render(f, chunks[0]);
        self.screen.render(f, chunks[1]);
        self.tab_bar.render(f, chunks[2]);

        if self.state.show_logs {
            self.logs.render(f, rect);
        }

        // Drawer renders last so it overlays all tab content
        self.drawer_surface.render(f, rect);
    }
}
