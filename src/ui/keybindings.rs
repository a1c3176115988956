//! Centralized keyboard shortcuts registry.
//!
//! Single source of truth for the wizard's key bindings. It is consumed by:
//! - `App::handle_key` to map key presses to actions
//! - the wizard footer, which lists the shortcuts active in the current phase

use crossterm::event::KeyCode;

use crate::wizard::WizardPhase;

/// What a key press asks the wizard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Select,
    Back,
    Reset,
    Quit,
}

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Alternative key (e.g., arrow key or Backspace)
    pub alt_key: Option<KeyCode>,
    /// Short description shown in the footer
    pub description: &'static str,
    pub action: Action,
    /// Context where this shortcut is active
    pub context: ShortcutContext,
}

/// Contexts where shortcuts are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Choosing an option for steps 1-7
    Selecting,
    /// Waiting for the text-generation service
    Generating,
    /// Reading the suggestion list
    Results,
    /// Generation failed
    Error,
}

impl ShortcutContext {
    /// Context matching a wizard phase
    pub fn for_phase(phase: WizardPhase) -> Self {
        match phase {
            WizardPhase::Selecting => ShortcutContext::Selecting,
            WizardPhase::Generating => ShortcutContext::Generating,
            WizardPhase::Results => ShortcutContext::Results,
            WizardPhase::Error => ShortcutContext::Error,
        }
    }

    /// Display name for this context
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutContext::Selecting => "Selecting",
            ShortcutContext::Generating => "Generating",
            ShortcutContext::Results => "Results",
            ShortcutContext::Error => "Error",
        }
    }
}

impl Shortcut {
    /// Format key for display (e.g., "q", "Esc/Backspace", "j/↓")
    pub fn key_display(&self) -> String {
        let primary = format_keycode(&self.key);
        match &self.alt_key {
            Some(alt) => format!("{}/{}", primary, format_keycode(alt)),
            None => primary,
        }
    }

    /// Whether `code` triggers this shortcut
    pub fn matches(&self, code: KeyCode) -> bool {
        self.key == code || self.alt_key == Some(code)
    }
}

/// Format a KeyCode for display
fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        _ => format!("{:?}", key),
    }
}

/// Static registry of all keyboard shortcuts
pub static SHORTCUTS: &[Shortcut] = &[
    // === Selecting ===
    Shortcut {
        key: KeyCode::Char('k'),
        alt_key: Some(KeyCode::Up),
        description: "up",
        action: Action::MoveUp,
        context: ShortcutContext::Selecting,
    },
    Shortcut {
        key: KeyCode::Char('j'),
        alt_key: Some(KeyCode::Down),
        description: "down",
        action: Action::MoveDown,
        context: ShortcutContext::Selecting,
    },
    Shortcut {
        key: KeyCode::Enter,
        alt_key: None,
        description: "select",
        action: Action::Select,
        context: ShortcutContext::Selecting,
    },
    Shortcut {
        key: KeyCode::Esc,
        alt_key: Some(KeyCode::Backspace),
        description: "back",
        action: Action::Back,
        context: ShortcutContext::Selecting,
    },
    Shortcut {
        key: KeyCode::Char('r'),
        alt_key: None,
        description: "start over",
        action: Action::Reset,
        context: ShortcutContext::Selecting,
    },
    Shortcut {
        key: KeyCode::Char('q'),
        alt_key: None,
        description: "quit",
        action: Action::Quit,
        context: ShortcutContext::Selecting,
    },
    // === Generating ===
    Shortcut {
        key: KeyCode::Char('r'),
        alt_key: None,
        description: "start over",
        action: Action::Reset,
        context: ShortcutContext::Generating,
    },
    Shortcut {
        key: KeyCode::Char('q'),
        alt_key: None,
        description: "quit",
        action: Action::Quit,
        context: ShortcutContext::Generating,
    },
    // === Results ===
    Shortcut {
        key: KeyCode::Char('k'),
        alt_key: Some(KeyCode::Up),
        description: "up",
        action: Action::MoveUp,
        context: ShortcutContext::Results,
    },
    Shortcut {
        key: KeyCode::Char('j'),
        alt_key: Some(KeyCode::Down),
        description: "down",
        action: Action::MoveDown,
        context: ShortcutContext::Results,
    },
    Shortcut {
        key: KeyCode::Esc,
        alt_key: Some(KeyCode::Backspace),
        description: "back",
        action: Action::Back,
        context: ShortcutContext::Results,
    },
    Shortcut {
        key: KeyCode::Char('r'),
        alt_key: None,
        description: "start over",
        action: Action::Reset,
        context: ShortcutContext::Results,
    },
    Shortcut {
        key: KeyCode::Char('q'),
        alt_key: None,
        description: "quit",
        action: Action::Quit,
        context: ShortcutContext::Results,
    },
    // === Error ===
    Shortcut {
        key: KeyCode::Char('r'),
        alt_key: Some(KeyCode::Enter),
        description: "start over",
        action: Action::Reset,
        context: ShortcutContext::Error,
    },
    Shortcut {
        key: KeyCode::Char('q'),
        alt_key: None,
        description: "quit",
        action: Action::Quit,
        context: ShortcutContext::Error,
    },
];

/// Get all shortcuts for a given context
pub fn shortcuts_for_context(context: ShortcutContext) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(move |s| s.context == context)
}

/// Resolve a key press to an action in `context`
pub fn action_for(context: ShortcutContext, code: KeyCode) -> Option<Action> {
    shortcuts_for_context(context)
        .find(|s| s.matches(code))
        .map(|s| s.action)
}
