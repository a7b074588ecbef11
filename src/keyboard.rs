//! Keyboard vs pointer input modality.
//!
//! Tab puts the page in keyboard mode (the body gets `keyboard-nav`, which
//! the stylesheet uses to show focus rings); any pointer press takes it back
//! out. Escape closes both menus. The two sources do not coordinate: the last
//! event wins.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    CloseMenus,
    KeyboardNav,
}

/// Command for a `KeyboardEvent.key` value, if any.
#[must_use]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "Escape" => Some(KeyCommand::CloseMenus),
        "Tab" => Some(KeyCommand::KeyboardNav),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputModality {
    #[default]
    Pointer,
    Keyboard,
}

impl InputModality {
    /// Modality after a key press. Keys other than Tab leave it unchanged.
    #[must_use]
    pub fn after_key(self, key: &str) -> Self {
        if command_for_key(key) == Some(KeyCommand::KeyboardNav) { Self::Keyboard } else { self }
    }

    #[must_use]
    pub fn after_pointer_down(self) -> Self {
        Self::Pointer
    }

    /// Whether the body carries `keyboard-nav`.
    #[must_use]
    pub fn body_class_on(self) -> bool {
        self == Self::Keyboard
    }
}
