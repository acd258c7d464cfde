//! Enumerations for TUI state management.

/// Application state for the terminal user interface.
#[derive(Clone, Copy, PartialEq)]
pub enum AppState {
    Welcome,
    Tasks,
}

/// Input mode for the task view.
///
/// `Browse` routes keys to list navigation; `Text` routes them into the
/// input field.
#[derive(Clone, Copy, PartialEq)]
pub enum InputMode {
    Browse,
    Text,
}
