//! Keystrokes and input contexts
//!
//! A [`Keystroke`] is the lookup key of the command registry and a
//! [`Context`] names the input scope a binding belongs to. Footer hints are
//! derived from the registry, so this module only holds the vocabulary.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;
use std::fmt;

/// Symbolic (non-printable) keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

impl Key {
    pub fn label(&self) -> String {
        match self {
            Key::Enter => "Enter".to_string(),
            Key::Esc => "Esc".to_string(),
            Key::Tab => "Tab".to_string(),
            Key::BackTab => "Shift-Tab".to_string(),
            Key::Backspace => "Backspace".to_string(),
            Key::Delete => "Del".to_string(),
            Key::Up => "Up".to_string(),
            Key::Down => "Down".to_string(),
            Key::Left => "Left".to_string(),
            Key::Right => "Right".to_string(),
            Key::Home => "Home".to_string(),
            Key::End => "End".to_string(),
            Key::PageUp => "PgUp".to_string(),
            Key::PageDown => "PgDn".to_string(),
            Key::F(n) => format!("F{}", n),
        }
    }
}

/// Identity of a single key press
///
/// A printable character and a symbolic key never compare equal, even when
/// a terminal reports them with the same glyph (`Char('\t')` is not `Tab`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keystroke {
    /// Printable character, shift already applied (`G`, `?`)
    Char(char),
    /// Character with Control held, stored lowercase
    Ctrl(char),
    /// Symbolic key
    Key(Key),
}

impl Keystroke {
    /// Convert a crossterm key event; keys with no binding vocabulary map to `None`
    pub fn from_key_event(event: KeyEvent) -> Option<Self> {
        let stroke = match event.code {
            KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Keystroke::Ctrl(c.to_ascii_lowercase())
            }
            KeyCode::Char(c) => Keystroke::Char(c),
            KeyCode::Enter => Keystroke::Key(Key::Enter),
            KeyCode::Esc => Keystroke::Key(Key::Esc),
            KeyCode::Tab if event.modifiers.contains(KeyModifiers::SHIFT) => {
                Keystroke::Key(Key::BackTab)
            }
            KeyCode::Tab => Keystroke::Key(Key::Tab),
            KeyCode::BackTab => Keystroke::Key(Key::BackTab),
            KeyCode::Backspace => Keystroke::Key(Key::Backspace),
            KeyCode::Delete => Keystroke::Key(Key::Delete),
            KeyCode::Up => Keystroke::Key(Key::Up),
            KeyCode::Down => Keystroke::Key(Key::Down),
            KeyCode::Left => Keystroke::Key(Key::Left),
            KeyCode::Right => Keystroke::Key(Key::Right),
            KeyCode::Home => Keystroke::Key(Key::Home),
            KeyCode::End => Keystroke::Key(Key::End),
            KeyCode::PageUp => Keystroke::Key(Key::PageUp),
            KeyCode::PageDown => Keystroke::Key(Key::PageDown),
            KeyCode::F(n) => Keystroke::Key(Key::F(n)),
            _ => return None,
        };
        Some(stroke)
    }
}

impl From<char> for Keystroke {
    fn from(c: char) -> Self {
        Keystroke::Char(c)
    }
}

impl From<Key> for Keystroke {
    fn from(key: Key) -> Self {
        Keystroke::Key(key)
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Keystroke::Char(' ') => write!(f, "Space"),
            Keystroke::Char(c) => write!(f, "{}", c),
            Keystroke::Ctrl(c) => write!(f, "Ctrl-{}", c),
            Keystroke::Key(key) => write!(f, "{}", key.label()),
        }
    }
}

/// Logical input scope used as the first key of command lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Context {
    Global,
    AppTable,
    MainPage,
    Help,
    CommandBar,
}

impl Context {
    pub fn as_str(&self) -> &'static str {
        match self {
            Context::Global => "Global",
            Context::AppTable => "AppTable",
            Context::MainPage => "MainPage",
            Context::Help => "Help",
            Context::CommandBar => "CommandBar",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Footer hint: key label and short description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub key: String,
    pub label: String,
}

impl Hint {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Convert hints to colored segments for footer rendering
pub fn hints_to_segments(hints: &[Hint], color: Color) -> Vec<(String, String, Color)> {
    hints
        .iter()
        .map(|hint| (hint.key.clone(), hint.label.clone(), color))
        .collect()
}
