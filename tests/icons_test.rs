use tabshell::icons::{IconService, IconTheme};

#[test]
fn every_theme_provides_all_glyphs() {
    for theme in [IconTheme::Emoji, IconTheme::Unicode, IconTheme::Ascii] {
        let icons = IconService::new(theme);

        let header = icons.header();
        assert!(!header.menu.is_empty());
        assert!(!header.profile.is_empty());
        assert!(!header.notifications.is_empty());

        let tabs = icons.tabs();
        assert!(!tabs.home.is_empty());
        assert!(!tabs.explore.is_empty());
        assert!(!tabs.favorites.is_empty());
        assert!(!tabs.settings.is_empty());

        let drawer = icons.drawer();
        assert!(!drawer.about.is_empty());
        assert!(!drawer.logs.is_empty());
        assert!(!drawer.close.is_empty());
    }
}

#[test]
fn ascii_theme_is_the_default() {
    assert_eq!(IconService::default().theme(), IconTheme::Ascii);
}

#[test]
fn ascii_glyphs_are_plain_ascii() {
    let icons = IconService::new(IconTheme::Ascii);
    for glyph in [
        icons.header().menu,
        icons.header().profile,
        icons.header().notifications,
        icons.tabs().home,
        icons.tabs().explore,
        icons.tabs().favorites,
        icons.tabs().settings,
        icons.drawer().about,
        icons.drawer().logs,
        icons.drawer().close,
    ] {
        assert!(glyph.is_ascii(), "glyph {:?} is not ASCII", glyph);
    }
}
