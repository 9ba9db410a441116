use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use profile_doctor::config::Config;
use profile_doctor::logger::Logger;
use profile_doctor::pages::PageKind;
use profile_doctor::router::RouteError;
use profile_doctor::state::Theme;
use profile_doctor::ui::core::{Action, AppContext, EventType};
use profile_doctor::ui::{Palette, ShellComposer};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

fn shell() -> ShellComposer {
    ShellComposer::new(AppContext::default()).unwrap()
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> EventType {
    EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn draw(shell: &mut ShellComposer, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            shell.render(f, area);
        })
        .unwrap();
    terminal
}

fn region_text(terminal: &Terminal<TestBackend>, area: Rect) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_starts_on_dashboard_with_sidebar_open() {
    let shell = shell();
    assert_eq!(shell.current_path(), "/");
    assert_eq!(shell.content().kind(), Some(PageKind::Dashboard));
    assert!(shell.context().sidebar.is_open());
    assert_eq!(shell.context().theme.theme(), Theme::Light);
    assert_eq!(shell.sidebar().active(), Some(0));
}

#[test]
fn test_expanded_sidebar_shows_labels() {
    let mut shell = shell();
    let terminal = draw(&mut shell, 100, 30);

    let sidebar = shell.regions().unwrap().sidebar.unwrap();
    assert_eq!(sidebar.width, 24);
    let text = region_text(&terminal, sidebar);
    assert!(text.contains("Profiles"));
    assert!(text.contains("Menu"));
}

#[test]
fn test_collapsed_sidebar_shows_icons_only() {
    let mut shell = shell();
    shell.handle_event(key(KeyCode::Char('m')));
    assert!(!shell.context().sidebar.is_open());

    let terminal = draw(&mut shell, 100, 30);
    let sidebar = shell.regions().unwrap().sidebar.unwrap();
    assert_eq!(sidebar.width, 6);
    let text = region_text(&terminal, sidebar);
    assert!(!text.contains("Profiles"));
    assert!(text.contains('☺'));
}

#[test]
fn test_narrow_terminal_hides_sidebar_without_touching_state() {
    let mut shell = shell();
    draw(&mut shell, 60, 20);

    assert!(shell.regions().unwrap().sidebar.is_none());
    assert_eq!(shell.regions().unwrap().content.width, 60);
    assert!(shell.context().sidebar.is_open());

    // Toggling still flips the state while hidden
    shell.handle_event(key(KeyCode::Char('m')));
    assert!(!shell.context().sidebar.is_open());
    draw(&mut shell, 60, 20);
    assert!(shell.regions().unwrap().sidebar.is_none());

    // Widening restores the presentation for the current state
    draw(&mut shell, 100, 30);
    assert_eq!(shell.regions().unwrap().sidebar.map(|area| area.width), Some(6));
}

#[test]
fn test_theme_toggle_recolors_the_frame() {
    let mut shell = shell();
    let terminal = draw(&mut shell, 100, 30);
    assert_eq!(terminal.backend().buffer()[(0, 29)].bg, Palette::light().background);

    shell.handle_event(key(KeyCode::Char('t')));
    assert_eq!(shell.context().theme.theme(), Theme::Dark);
    assert_eq!(shell.header().theme(), Theme::Dark);
    assert_eq!(shell.context().root.borrow().active_theme(), Some(Theme::Dark));

    let terminal = draw(&mut shell, 100, 30);
    assert_eq!(terminal.backend().buffer()[(0, 29)].bg, Palette::dark().background);
}

#[test]
fn test_ctrl_b_toggles_sidebar() {
    let mut shell = shell();
    shell.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL)));
    assert!(!shell.context().sidebar.is_open());
}

#[test]
fn test_store_changes_request_redraw() {
    let mut shell = shell();
    assert!(shell.take_redraw());
    assert!(!shell.needs_redraw());

    shell.apply(Action::ToggleTheme);
    assert!(shell.take_redraw());

    shell.apply(Action::ToggleSidebar);
    assert!(shell.take_redraw());

    shell.handle_event(EventType::Tick);
    assert!(!shell.needs_redraw());
}

#[test]
fn test_number_keys_navigate() {
    let mut shell = shell();
    shell.handle_event(key(KeyCode::Char('2')));
    assert_eq!(shell.current_path(), "/scans");
    assert_eq!(shell.content().kind(), Some(PageKind::Scans));
    assert_eq!(shell.sidebar().active(), Some(1));

    // Out of range digits do nothing
    shell.handle_event(key(KeyCode::Char('9')));
    assert_eq!(shell.current_path(), "/scans");
}

#[test]
fn test_sidebar_cursor_and_enter() {
    let mut shell = shell();
    draw(&mut shell, 100, 30);

    shell.handle_event(key(KeyCode::Down));
    shell.handle_event(key(KeyCode::Down));
    assert_eq!(shell.sidebar().cursor(), Some(2));
    shell.handle_event(key(KeyCode::Enter));
    assert_eq!(shell.current_path(), "/reports");
}

#[test]
fn test_help_and_back() {
    let mut shell = shell();
    shell.handle_event(key(KeyCode::Char('?')));
    assert_eq!(shell.current_path(), "/help");
    assert_eq!(shell.content().kind(), Some(PageKind::Help));

    shell.handle_event(key(KeyCode::Backspace));
    assert_eq!(shell.current_path(), "/");
    assert_eq!(shell.content().kind(), Some(PageKind::Dashboard));
}

#[test]
fn test_unregistered_path_shows_not_found() {
    let mut shell = shell();
    shell.apply(Action::Navigate("/nowhere".to_string()));

    assert_eq!(shell.current_path(), "/nowhere");
    assert_eq!(shell.content().kind(), None);
    assert_eq!(shell.sidebar().active(), None);

    let terminal = draw(&mut shell, 100, 30);
    let content = region_text(&terminal, shell.regions().unwrap().content);
    assert!(content.contains("/nowhere"));
}

#[test]
fn test_mouse_clicks() {
    let mut shell = shell();
    draw(&mut shell, 100, 30);

    // Menu button in the header
    shell.handle_event(click(1, 1));
    assert!(!shell.context().sidebar.is_open());
    shell.handle_event(click(1, 1));
    assert!(shell.context().sidebar.is_open());

    // Third sidebar entry, below the top border
    let sidebar = shell.regions().unwrap().sidebar.unwrap();
    shell.handle_event(click(sidebar.x + 2, sidebar.y + 3));
    assert_eq!(shell.current_path(), "/reports");
}

#[test]
fn test_logs_overlay_is_modal() {
    let mut shell = shell();
    shell.handle_event(key(KeyCode::Char('G')));
    assert!(shell.logs_visible());

    // Keys go to the overlay while it is open
    shell.handle_event(key(KeyCode::Char('t')));
    assert_eq!(shell.context().theme.theme(), Theme::Light);

    shell.handle_event(key(KeyCode::Char('q')));
    assert!(!shell.logs_visible());
    assert!(!shell.should_quit());

    shell.handle_event(key(KeyCode::Char('q')));
    assert!(shell.should_quit());
}

#[test]
fn test_drop_releases_subscriptions() {
    let context = AppContext::default();
    let sidebar = context.sidebar.clone();
    let theme = context.theme.clone();
    let theme_listeners = theme.subscriber_count();

    let shell = ShellComposer::new(context).unwrap();
    assert_eq!(sidebar.subscriber_count(), 1);
    assert_eq!(theme.subscriber_count(), theme_listeners + 1);

    drop(shell);
    assert_eq!(sidebar.subscriber_count(), 0);
}

#[test]
fn test_invalid_route_table_is_rejected() {
    let mut config = Config::default();
    config.routes.clear();
    let result = ShellComposer::new(AppContext::new(config, Logger::new()));
    assert_eq!(result.err(), Some(RouteError::Empty));
}
