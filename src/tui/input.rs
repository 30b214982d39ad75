use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents the result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Move current image to pos
    Positive,
    /// Move current image to neg
    Negative,
    /// Delete current image
    Delete,
    /// Confirm delete action
    ConfirmDelete,
    /// Cancel delete action
    CancelDelete,
    /// Move to next image
    Next,
    /// Move to previous image
    Previous,
    /// Reload the source directory at a random image
    Refresh,
    /// Start editing the source directory
    EditSource,
    /// Start editing the destination directory
    EditDestination,
    /// Toggle help overlay
    Help,
    /// No action
    None,
}

/// Result of a key press while a directory field is being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Backspace,
    Commit,
    Cancel,
    None,
}

/// Maps keyboard events to actions
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        // Quit: q or Ctrl+C
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => KeyAction::Quit,

        // Sorting
        (KeyCode::Right, KeyModifiers::NONE) => KeyAction::Positive,
        (KeyCode::Char('p'), KeyModifiers::NONE) => KeyAction::Positive,
        (KeyCode::Left, KeyModifiers::NONE) => KeyAction::Negative,
        (KeyCode::Char('n'), KeyModifiers::NONE) => KeyAction::Negative,
        (KeyCode::Char('x'), KeyModifiers::NONE) => KeyAction::Delete,
        (KeyCode::Delete, _) => KeyAction::Delete,

        // Navigation
        (KeyCode::Down, KeyModifiers::NONE) => KeyAction::Next,
        (KeyCode::Up, KeyModifiers::NONE) => KeyAction::Previous,
        (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::Next,
        (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::Previous,
        (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::Refresh,

        // Directory fields
        (KeyCode::Char('s'), KeyModifiers::NONE) => KeyAction::EditSource,
        (KeyCode::Char('o'), KeyModifiers::NONE) => KeyAction::EditDestination,

        // Help: ?
        (KeyCode::Char('?'), _) => KeyAction::Help,

        _ => KeyAction::None,
    }
}

/// Maps keyboard events to confirmation actions
/// Used when ViewState is ConfirmDelete
pub fn handle_confirm_input(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        // Confirm: y or Enter
        (KeyCode::Char('y'), KeyModifiers::NONE) => KeyAction::ConfirmDelete,
        (KeyCode::Char('Y'), _) => KeyAction::ConfirmDelete,
        (KeyCode::Enter, KeyModifiers::NONE) => KeyAction::ConfirmDelete,

        // Cancel: n or Esc
        (KeyCode::Char('n'), KeyModifiers::NONE) => KeyAction::CancelDelete,
        (KeyCode::Char('N'), _) => KeyAction::CancelDelete,
        (KeyCode::Esc, KeyModifiers::NONE) => KeyAction::CancelDelete,

        _ => KeyAction::None,
    }
}

/// Maps keyboard events while typing a directory path
pub fn handle_edit_input(key: KeyEvent) -> EditAction {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => EditAction::Commit,
        (KeyCode::Esc, _) => EditAction::Cancel,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EditAction::Cancel,
        (KeyCode::Backspace, _) => EditAction::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => EditAction::Insert(c),
        _ => EditAction::None,
    }
}
