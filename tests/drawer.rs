use tabshell::ui::core::drawer::{DrawerHandle, DrawerState};

#[test]
fn starts_closed() {
    let drawer = DrawerHandle::new();
    assert!(!drawer.is_open());
}

#[test]
fn open_is_idempotent() {
    let drawer = DrawerHandle::new();
    drawer.open();
    assert!(drawer.is_open());
    drawer.open();
    assert!(drawer.is_open());
}

#[test]
fn close_is_idempotent() {
    let drawer = DrawerHandle::new();
    drawer.close();
    assert!(!drawer.is_open());

    drawer.open();
    drawer.close();
    assert!(!drawer.is_open());
    drawer.close();
    assert!(!drawer.is_open());
}

#[test]
fn toggle_flips_state_from_both_sides() {
    let drawer = DrawerHandle::new();
    drawer.toggle();
    assert!(drawer.is_open());
    drawer.toggle();
    assert!(!drawer.is_open());
}

#[test]
fn clones_share_one_state() {
    let drawer = DrawerHandle::new();
    let header_view = drawer.clone();
    let surface_view = drawer.clone();

    header_view.open();
    assert!(drawer.is_open());
    assert!(surface_view.is_open());

    surface_view.close();
    assert!(!drawer.is_open());
    assert!(!header_view.is_open());

    drawer.toggle();
    assert!(header_view.is_open());
    assert!(surface_view.is_open());
}

#[test]
fn full_open_close_toggle_scenario() {
    let drawer = DrawerHandle::new();
    assert!(!drawer.is_open());
    drawer.open();
    assert!(drawer.is_open());
    drawer.close();
    assert!(!drawer.is_open());
    drawer.toggle();
    assert!(drawer.is_open());
    drawer.toggle();
    assert!(!drawer.is_open());
}

#[test]
fn default_state_is_closed() {
    assert_eq!(DrawerState::default(), DrawerState { open: false });
}
