use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use tabshell::config::Config;
use tabshell::errors::ShellError;
use tabshell::logger::Logger;
use tabshell::ui::core::{AppContext, Component, EventType, TabSelection};
use tabshell::ui::AppComponent;

fn test_context() -> AppContext {
    AppContext::new(Config::default(), Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn click(app: &mut AppComponent, column: u16, row: u16) {
    app.handle_event(EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
    .unwrap();
}

fn render_to_string(app: &mut AppComponent) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

#[test]
fn starts_on_home_with_drawer_closed() {
    let ctx = test_context();
    let app = AppComponent::new(&ctx).unwrap();
    assert_eq!(app.state().active_tab, TabSelection::Home);
    assert!(!app.drawer_open());
    assert!(!app.state().showing_about);
}

#[test]
fn start_tab_comes_from_config() {
    let mut config = Config::default();
    config.ui.start_tab = "settings".to_string();
    let ctx = AppContext::new(config, Logger::new());
    let app = AppComponent::new(&ctx).unwrap();
    assert_eq!(app.state().active_tab, TabSelection::Settings);
}

#[test]
fn menu_key_opens_and_escape_closes() {
    let ctx = test_context();
    let mut app = AppComponent::new(&ctx).unwrap();

    press(&mut app, KeyCode::Char('m'));
    assert!(app.drawer_open());

    press(&mut app, KeyCode::Esc);
    assert!(!app.drawer_open());
}

#[test]
fn toggle_key_flips_drawer() {
    let ctx = test_context();
    let mut app = AppComponent::new(&ctx).unwrap();

    press(&mut app, KeyCode::Char('t'));
    assert!(app.drawer_open());
    press(&mut app, KeyCode::Char('t'));
    assert!(!app.drawer_open());
}

#[test]
fn number_keys_switch_tabs() {
    let ctx = test_context();
    let mut app = AppComponent::new(&ctx).unwrap();

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.state().active_tab, TabSelection::Explore);
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.state().active_tab, TabSelection::Settings);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().active_tab, TabSelection::Home);
}

#[test]
fn tab_keys_are_captured_by_open_drawer() {
    let ctx = test_context();
    let mut app = AppComponent::new(&ctx).unwrap();

    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('2'));
    // The open drawer has input priority, so the tab did not change
    assert_eq!(app.state().active_tab, TabSelection::Home);
    assert!(app.drawer_open());
}

#[test]
fn drawer_navigation_to_about_and_back() {
    let ctx = test_context();
    let mut app = AppComponent::new(&ctx).unwrap();

    press(&mut app, KeyCode::Char('m'));
    for _ in 0..4 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);
    assert!(!app.drawer_open());
    assert!(app.state().showing_about);

    press(&mut app, KeyCode::Esc);
    assert!(!app.state().showing_about);
}

#[test]
fn quit_key_stops_the_app() {
    let ctx = test_context();
    let mut app = AppComponent::new(&ctx).unwrap();
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn logs_overlay_opens_and_closes() {
    let ctx = test_context();
    let mut app = AppComponent::new(&ctx).unwrap();

    press(&mut app, KeyCode::Char('G'));
    assert!(app.state().show_logs);
    press(&mut app, KeyCode::Esc);
    assert!(!app.state().show_logs);
}

#[test]
fn logs_overlay_swallows_clicks_on_the_trigger_beneath_it() {
    let ctx = test_context();
    let mut app = AppComponent::new(&ctx).unwrap();

    // Render once so mouse routing knows the header area
    render_to_string(&mut app);

    press(&mut app, KeyCode::Char('G'));
    assert!(app.state().show_logs);

    // Click where the menu trigger sits; the overlay must keep it from
    // opening the drawer underneath
    click(&mut app, 1, 0);
    assert!(!app.drawer_open());
    assert!(app.state().show_logs);

    // Esc still closes the overlay the user actually sees
    press(&mut app, KeyCode::Esc);
    assert!(!app.state().show_logs);
    assert!(!app.drawer_open());
}

#[test]
fn unwired_context_propagates_configuration_error() {
    let ctx = AppContext::without_drawer(Config::default(), Logger::new());
    let err = AppComponent::new(&ctx).expect_err("shell must not build without a drawer");
    assert!(matches!(err.downcast_ref::<ShellError>(), Some(ShellError::DrawerUnwired)));
}

#[test]
fn drawer_overlays_screen_content_when_open() {
    let ctx = test_context();
    let mut app = AppComponent::new(&ctx).unwrap();

    let closed = render_to_string(&mut app);
    assert!(closed.contains("Home"));
    assert!(closed.contains("Hello, Caleb!"));
    assert!(!closed.contains("Navigation"));

    press(&mut app, KeyCode::Char('m'));
    let open = render_to_string(&mut app);
    assert!(open.contains("Navigation"));
    assert!(open.contains("About"));
}
