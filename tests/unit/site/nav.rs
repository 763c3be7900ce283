use super::*;

#[test]
fn scroll_threshold_is_exclusive() {
    let mut nav = NavState::new();
    nav.on_scroll(50.0);
    assert!(!nav.is_scrolled());
    nav.on_scroll(50.5);
    assert!(nav.is_scrolled());
    assert!(nav.is_highlighted());
    nav.on_scroll(0.0);
    assert!(!nav.is_highlighted());
}

#[test]
fn navigation_closes_the_menu() {
    let mut nav = NavState::new();
    nav.toggle();
    assert!(nav.is_open());
    assert!(nav.is_highlighted());
    nav.on_location_change();
    assert!(!nav.is_open());

    nav.toggle();
    nav.toggle();
    assert!(!nav.is_open());
    nav.toggle();
    nav.close();
    assert!(!nav.is_open());
}
