//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.
//! Everything the view controller understands travels as [`Message::Core`];
//! the rest belongs to the shell around it.

use iced::widget::text_editor;
use mailroom_core::{AppSettings, Event};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    /// Input for the view controller: user actions and request results.
    Core(Event),
    /// Cursor movement or edit in the multi-line body editor.
    BodyEdited(text_editor::Action),

    // Settings
    /// Settings loaded at startup.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved.
    SettingsSaved(Result<(), String>),
    /// Switch between light and dark theme.
    ToggleTheme,

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// A key with no binding.
    Ignored,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Compose new message (Ctrl+N).
    ComposeNew,
    /// Reply to the open message (Ctrl+R).
    Reply,
    /// Send message in compose view (Ctrl+Enter).
    Send,
    /// Reload the current mailbox (F5).
    Refresh,
    /// Close the alert, or go back to the inbox (Escape).
    Cancel,
}
