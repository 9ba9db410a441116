//! The layout shell: header, sidebar, content and footer regions.
//!
//! [`ShellComposer`] is the only place the sidebar and theme stores are
//! mutated. Components hand it [`Action`]s; it toggles a store, asks the
//! router to navigate, or remounts the content region. The content region
//! always holds exactly one page unit, built once per navigation.

use crate::constants::HELP_PATH;
use crate::pages::PageUnit;
use crate::router::{RouteError, RouteTable, Router};
use crate::state::Subscription;
use crate::ui::components::{FooterComponent, HeaderComponent, LogsOverlay, SidebarComponent};
use crate::ui::core::{Action, AppContext, Component, EventType};
use crate::ui::layout::{LayoutManager, ShellRegions, SidebarPresentation};
use crate::ui::palette::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, widgets::Block, Frame};
use std::cell::Cell;
use std::rc::Rc;

pub struct ShellComposer {
    context: AppContext,

    // Regions
    header: HeaderComponent,
    sidebar: SidebarComponent,
    footer: FooterComponent,
    logs: LogsOverlay,

    // Routing
    routes: RouteTable,
    router: Router,
    content: Box<dyn PageUnit>,

    // Mirror of the sidebar store, kept current by subscription
    sidebar_open: Rc<Cell<bool>>,
    sidebar_subscription: Subscription,
    redraw: Rc<Cell<bool>>,
    regions: Option<ShellRegions>,
    should_quit: bool,
}

impl ShellComposer {
    /// Build the shell and mount the start page. Fails on a bad route table.
    pub fn new(context: AppContext) -> Result<Self, RouteError> {
        let routes = RouteTable::new(&context.config.routes)?;
        let router = Router::new(context.config.ui.start_path.clone());
        let content = routes.mount(router.current_path());

        let redraw = Rc::new(Cell::new(true));
        let sidebar_open = Rc::new(Cell::new(context.sidebar.is_open()));
        let sidebar_subscription = {
            let mirror = Rc::clone(&sidebar_open);
            let redraw = Rc::clone(&redraw);
            context.sidebar.subscribe(move |open| {
                mirror.set(open);
                redraw.set(true);
            })
        };

        let mut header = HeaderComponent::new(&context.theme, context.icons.clone(), Rc::clone(&redraw));
        header.set_active_path(router.current_path());
        let mut sidebar = SidebarComponent::new(&routes, context.icons.clone());
        sidebar.set_active(routes.position(router.current_path()));
        // Assume a wide terminal until the first frame reports its size
        sidebar.set_presentation(LayoutManager::sidebar_presentation(
            sidebar_open.get(),
            u16::MAX,
            &context.config.ui,
        ));
        let logs = LogsOverlay::new(context.logger.clone());

        log::info!(
            "shell ready with {} routes, starting at '{}'",
            routes.len(),
            router.current_path()
        );

        Ok(Self {
            context,
            header,
            sidebar,
            footer: FooterComponent::new(),
            logs,
            routes,
            router,
            content,
            sidebar_open,
            sidebar_subscription,
            redraw,
            regions: None,
            should_quit: false,
        })
    }

    #[must_use]
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    #[must_use]
    pub fn current_path(&self) -> &str {
        self.router.current_path()
    }

    /// The page unit mounted in the content region
    #[must_use]
    pub fn content(&self) -> &dyn PageUnit {
        self.content.as_ref()
    }

    #[must_use]
    pub fn header(&self) -> &HeaderComponent {
        &self.header
    }

    #[must_use]
    pub fn sidebar(&self) -> &SidebarComponent {
        &self.sidebar
    }

    #[must_use]
    pub fn logs_visible(&self) -> bool {
        self.logs.is_visible()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sidebar presentation for a terminal of the given width
    #[must_use]
    pub fn sidebar_presentation(&self, viewport_width: u16) -> SidebarPresentation {
        LayoutManager::sidebar_presentation(self.sidebar_open.get(), viewport_width, &self.context.config.ui)
    }

    /// Regions computed by the last render
    #[must_use]
    pub fn regions(&self) -> Option<ShellRegions> {
        self.regions
    }

    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw.get()
    }

    /// Clear and return the redraw flag
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }

    /// Process one terminal event
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => {
                self.request_redraw();
                self.handle_key(key)
            }
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(width, height) => {
                log::debug!("terminal resized to {}x{}", width, height);
                self.request_redraw();
                Action::None
            }
            EventType::Tick | EventType::Other => Action::None,
        };

        self.apply(action);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // The logs overlay is modal
        if self.logs.is_visible() {
            return self.logs.handle_key_events(key);
        }

        let action = self.header.handle_key_events(key);
        if !action.is_none() {
            return action;
        }

        let action = self.sidebar.handle_key_events(key);
        if !action.is_none() {
            return action;
        }

        let action = self.content.handle_key_events(key);
        if !action.is_none() {
            return action;
        }

        self.handle_global_key(key)
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::info!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('?') => Action::Navigate(HELP_PATH.to_string()),
            KeyCode::Char('G') => Action::ShowLogs(true),
            KeyCode::Backspace => Action::NavigateBack,
            _ => Action::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let Some(regions) = self.regions else {
            return Action::None;
        };
        if self.logs.is_visible() {
            return Action::None;
        }

        if LayoutManager::contains(regions.header, mouse.column, mouse.row) {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                self.request_redraw();
                return self.header.handle_click(mouse.column, mouse.row);
            }
            return Action::None;
        }

        match regions.sidebar {
            Some(area) if LayoutManager::contains(area, mouse.column, mouse.row) => {
                self.request_redraw();
                self.sidebar.handle_mouse(mouse, area)
            }
            _ => Action::None,
        }
    }

    /// Apply an action coming from any component
    pub fn apply(&mut self, action: Action) {
        let action = self.logs.update(action);

        match action {
            Action::ToggleSidebar => self.context.sidebar.toggle(),
            Action::ToggleTheme => self.context.theme.toggle(),
            Action::Navigate(path) => {
                if self.router.navigate(&path) {
                    self.mount_current();
                }
            }
            Action::NavigateBack => {
                if self.router.back() {
                    self.mount_current();
                }
            }
            Action::Quit => self.should_quit = true,
            Action::ShowLogs(_) | Action::None => {}
        }
    }

    /// Replace the content region with the unit for the router's current path
    fn mount_current(&mut self) {
        let path = self.router.current_path().to_string();
        self.content = self.routes.mount(&path);
        self.sidebar.set_active(self.routes.position(&path));
        self.header.set_active_path(&path);
        self.request_redraw();
        log::debug!("mounted '{}' for '{}'", self.content.title(), path);
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let palette = Palette::from_surface(&self.context.root.borrow());
        f.render_widget(Block::default().style(palette.base()), area);

        let presentation = self.sidebar_presentation(area.width);
        let regions = LayoutManager::shell_layout(area, presentation);
        self.regions = Some(regions);

        self.header.set_narrow(LayoutManager::is_narrow(area.width, &self.context.config.ui));
        self.header.render(f, regions.header, &palette);

        self.sidebar.set_presentation(presentation);
        if let Some(sidebar_area) = regions.sidebar {
            self.sidebar.render(f, sidebar_area, &palette);
        }

        self.content.render(f, regions.content, &palette);
        self.footer.render(f, regions.footer, &palette);

        // Overlay last so it sits on top
        self.logs.render(f, area, &palette);
    }
}

impl Drop for ShellComposer {
    fn drop(&mut self) {
        self.sidebar_subscription.unsubscribe();
    }
}
