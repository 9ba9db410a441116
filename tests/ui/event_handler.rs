use profile_doctor::ui::core::event_handler::{EventHandler, EventType};
use std::time::Duration;

#[test]
fn test_event_type_enum_exists() {
    // Test that EventType enum is accessible and has a valid size
    let event_size = std::mem::size_of::<EventType>();
    assert!(event_size > 0, "EventType enum should have a non-zero size");
}

#[tokio::test]
async fn test_render_throttle() {
    let mut events = EventHandler::new();
    assert!(!events.should_render());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(events.should_render());

    events.mark_rendered();
    assert!(events.time_since_last_render() < Duration::from_millis(16));
}
