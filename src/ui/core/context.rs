use crate::{
    config::Config,
    icons::IconService,
    logger::Logger,
    presentation::{PresentationSynchronizer, RootClassList},
    state::{SidebarState, ThemeState},
};
use std::cell::RefCell;
use std::rc::Rc;

/// Process-wide state, created once at startup and passed to the shell.
pub struct AppContext {
    pub config: Config,
    pub sidebar: SidebarState,
    pub theme: ThemeState,
    pub root: Rc<RefCell<RootClassList>>,
    pub presentation: PresentationSynchronizer,
    pub icons: IconService,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(config: Config, logger: Logger) -> Self {
        let sidebar = SidebarState::new();
        let theme = ThemeState::new();
        let root = Rc::new(RefCell::new(RootClassList::new()));
        let presentation = PresentationSynchronizer::install(&theme, Rc::clone(&root));
        let icons = IconService::new(config.ui.icon_theme);

        Self {
            config,
            sidebar,
            theme,
            root,
            presentation,
            icons,
            logger,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(Config::default(), Logger::new())
    }
}
