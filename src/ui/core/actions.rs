/// Everything a component can ask the shell to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Layout controls (header menu and theme buttons)
    ToggleSidebar,
    ToggleTheme,

    // Navigation
    Navigate(String),
    NavigateBack,

    // UI operations
    ShowLogs(bool),

    // App control
    Quit,
    None,
}

impl Action {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
