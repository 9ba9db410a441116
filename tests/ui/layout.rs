use profile_doctor::config::UiConfig;
use profile_doctor::ui::{LayoutManager, SidebarPresentation};
use ratatui::layout::Rect;

#[test]
fn test_sidebar_presentation_by_state_and_width() {
    let ui = UiConfig::default();

    assert_eq!(
        LayoutManager::sidebar_presentation(true, 120, &ui),
        SidebarPresentation::Expanded(24)
    );
    assert_eq!(
        LayoutManager::sidebar_presentation(false, 120, &ui),
        SidebarPresentation::Collapsed(6)
    );
    // At the breakpoint the sidebar is still shown
    assert!(LayoutManager::sidebar_presentation(true, 80, &ui).is_visible());
    assert_eq!(LayoutManager::sidebar_presentation(true, 79, &ui), SidebarPresentation::Hidden);
    assert_eq!(LayoutManager::sidebar_presentation(false, 79, &ui), SidebarPresentation::Hidden);
}

#[test]
fn test_presentation_helpers() {
    assert!(SidebarPresentation::Expanded(24).shows_labels());
    assert!(!SidebarPresentation::Collapsed(6).shows_labels());
    assert_eq!(SidebarPresentation::Collapsed(6).width(), 6);
    assert_eq!(SidebarPresentation::Hidden.width(), 0);
    assert!(!SidebarPresentation::Hidden.is_visible());
}

#[test]
fn test_shell_layout_regions() {
    let area = Rect::new(0, 0, 100, 30);
    let regions = LayoutManager::shell_layout(area, SidebarPresentation::Expanded(24));

    assert_eq!(regions.header, Rect::new(0, 0, 100, 3));
    assert_eq!(regions.footer, Rect::new(0, 29, 100, 1));
    assert_eq!(regions.sidebar, Some(Rect::new(0, 3, 24, 26)));
    assert_eq!(regions.content, Rect::new(24, 3, 76, 26));
}

#[test]
fn test_hidden_sidebar_gives_content_full_width() {
    let area = Rect::new(0, 0, 60, 20);
    let regions = LayoutManager::shell_layout(area, SidebarPresentation::Hidden);

    assert!(regions.sidebar.is_none());
    assert_eq!(regions.content.width, 60);
}

#[test]
fn test_contains_and_centered_rect() {
    let area = Rect::new(10, 5, 4, 2);
    assert!(LayoutManager::contains(area, 10, 5));
    assert!(LayoutManager::contains(area, 13, 6));
    assert!(!LayoutManager::contains(area, 14, 6));
    assert!(!LayoutManager::contains(area, 10, 7));

    let outer = Rect::new(0, 0, 100, 50);
    let inner = LayoutManager::centered_rect(50, 50, outer);
    assert_eq!(inner.width, 50);
    assert_eq!(inner.height, 25);
    assert_eq!(inner.x, 25);
}
