use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tabshell::config::Config;
use tabshell::logger::Logger;
use tabshell::ui::components::{DrawerSurface, HeaderBar};
use tabshell::ui::core::{actions::Action, AppContext, Component, TabSelection};

fn test_context() -> AppContext {
    AppContext::new(Config::default(), Logger::new())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn menu_key_opens_drawer() {
    let ctx = test_context();
    let mut header = HeaderBar::new(&ctx).unwrap();
    let drawer = ctx.drawer().unwrap();
    assert!(!drawer.is_open());

    let action = header.handle_key_events(key(KeyCode::Char('m')));
    assert_eq!(action, Action::None);
    assert!(drawer.is_open());

    // Pressing the trigger again while open is a no-op
    header.handle_key_events(key(KeyCode::Char('m')));
    assert!(drawer.is_open());
}

#[test]
fn menu_trigger_click_opens_drawer() {
    let ctx = test_context();
    let mut header = HeaderBar::new(&ctx).unwrap();
    let drawer = ctx.drawer().unwrap();
    let header_area = Rect::new(0, 0, 80, 2);

    header.handle_mouse(left_click(1, 0), header_area);
    assert!(drawer.is_open());
}

#[test]
fn click_outside_trigger_does_not_open_drawer() {
    let ctx = test_context();
    let mut header = HeaderBar::new(&ctx).unwrap();
    let drawer = ctx.drawer().unwrap();
    let header_area = Rect::new(0, 0, 80, 2);

    header.handle_mouse(left_click(40, 0), header_area);
    assert!(!drawer.is_open());
}

#[test]
fn header_without_provider_fails_at_construction() {
    let ctx = AppContext::without_drawer(Config::default(), Logger::new());
    assert!(HeaderBar::new(&ctx).is_err());
}

#[test]
fn escape_closes_open_drawer() {
    let ctx = test_context();
    let mut surface = DrawerSurface::new(&ctx).unwrap();
    let drawer = ctx.drawer().unwrap();

    drawer.open();
    let action = surface.handle_key_events(key(KeyCode::Esc));
    assert_eq!(action, Action::None);
    assert!(!drawer.is_open());
}

#[test]
fn backdrop_click_closes_open_drawer() {
    let ctx = test_context();
    let mut surface = DrawerSurface::new(&ctx).unwrap();
    let drawer = ctx.drawer().unwrap();
    let area = Rect::new(0, 0, 80, 24);

    drawer.open();
    // Default drawer width is 32 columns, so column 70 lands on the backdrop
    surface.handle_mouse(left_click(70, 10), area);
    assert!(!drawer.is_open());
}

#[test]
fn panel_click_activates_entry_instead_of_closing_blindly() {
    let ctx = test_context();
    let mut surface = DrawerSurface::new(&ctx).unwrap();
    let drawer = ctx.drawer().unwrap();
    let area = Rect::new(0, 0, 80, 24);

    drawer.open();
    // Second entry row (panel border at row 0, entries start at row 1)
    let action = surface.handle_mouse(left_click(5, 2), area);
    assert_eq!(action, Action::NavigateToTab(TabSelection::Explore));
    assert!(!drawer.is_open());
}

#[test]
fn enter_activates_selection_and_closes() {
    let ctx = test_context();
    let mut surface = DrawerSurface::new(&ctx).unwrap();
    let drawer = ctx.drawer().unwrap();

    drawer.open();
    let action = surface.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::NavigateToTab(TabSelection::Home));
    assert!(!drawer.is_open());
}

#[test]
fn about_entry_emits_show_about() {
    let ctx = test_context();
    let mut surface = DrawerSurface::new(&ctx).unwrap();
    let drawer = ctx.drawer().unwrap();

    drawer.open();
    // Entries: four tabs, then About
    for _ in 0..4 {
        surface.handle_key_events(key(KeyCode::Down));
    }
    let action = surface.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::ShowAbout);
    assert!(!drawer.is_open());
}

#[test]
fn closed_surface_ignores_input() {
    let ctx = test_context();
    let mut surface = DrawerSurface::new(&ctx).unwrap();
    let drawer = ctx.drawer().unwrap();

    let action = surface.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::None);
    assert!(!drawer.is_open());
}

#[test]
fn surface_without_provider_fails_at_construction() {
    let ctx = AppContext::without_drawer(Config::default(), Logger::new());
    assert!(DrawerSurface::new(&ctx).is_err());
}
