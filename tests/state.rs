use profile_doctor::state::{SidebarState, Theme, ThemeState};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_initial_values() {
    assert!(SidebarState::new().is_open());
    assert_eq!(ThemeState::new().theme(), Theme::Light);
}

#[test]
fn test_toggle_parity() {
    let sidebar = SidebarState::new();
    let theme = ThemeState::new();

    for n in 1..=7 {
        sidebar.toggle();
        theme.toggle();
        assert_eq!(sidebar.is_open(), n % 2 == 0);
        assert_eq!(theme.theme() == Theme::Light, n % 2 == 0);
    }
}

#[test]
fn test_double_toggle_is_identity() {
    let theme = ThemeState::new();
    theme.toggle();
    let before = theme.theme();
    theme.toggle();
    theme.toggle();
    assert_eq!(theme.theme(), before);
}

#[test]
fn test_subscribers_notified_in_subscription_order() {
    let sidebar = SidebarState::new();
    let calls = Rc::new(RefCell::new(Vec::new()));

    let subscriptions: Vec<_> = ["a", "b", "c"]
        .into_iter()
        .map(|name| {
            let calls = Rc::clone(&calls);
            sidebar.subscribe(move |open| calls.borrow_mut().push((name, open)))
        })
        .collect();

    sidebar.toggle();
    assert_eq!(*calls.borrow(), vec![("a", false), ("b", false), ("c", false)]);

    for subscription in &subscriptions {
        subscription.unsubscribe();
    }
}

#[test]
fn test_notification_is_synchronous() {
    let theme = ThemeState::new();
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    let subscription = theme.subscribe(move |next| *sink.borrow_mut() = Some(next));

    theme.toggle();
    // Delivered before toggle() returned
    assert_eq!(*seen.borrow(), Some(Theme::Dark));
    subscription.unsubscribe();
}

#[test]
fn test_unsubscribe_stops_delivery_and_is_idempotent() {
    let sidebar = SidebarState::new();
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let subscription = sidebar.subscribe(move |_| *counter.borrow_mut() += 1);
    assert_eq!(sidebar.subscriber_count(), 1);

    sidebar.toggle();
    subscription.unsubscribe();
    subscription.unsubscribe();
    assert!(!subscription.is_active());
    assert_eq!(sidebar.subscriber_count(), 0);

    sidebar.toggle();
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_stores_are_independent() {
    let sidebar = SidebarState::new();
    let theme = ThemeState::new();
    let theme_calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&theme_calls);
    let subscription = theme.subscribe(move |_| *counter.borrow_mut() += 1);

    sidebar.toggle();
    sidebar.toggle();
    sidebar.toggle();
    assert_eq!(theme.theme(), Theme::Light);
    assert_eq!(*theme_calls.borrow(), 0);
    subscription.unsubscribe();
}

#[test]
fn test_handles_share_one_store() {
    let sidebar = SidebarState::new();
    let other = sidebar.clone();
    other.toggle();
    assert!(!sidebar.is_open());
}
