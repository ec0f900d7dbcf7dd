use crossterm::event::{KeyCode, KeyModifiers};

// ── Actions ──────────────────────────────────────────────────────────

/// Every discrete action the dashboard can perform in response to a key press.
///
/// Actions are context-free identifiers; the *execution* code in `App`
/// decides what actually happens based on the current focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Global
    Quit,
    ShowHelp,
    SwitchFocus,

    // Navigation
    MoveUp,
    MoveDown,
    NextSection,
    PrevSection,

    // Progress
    Toggle,
    Increment,
    Decrement,
    ToggleWorkout,
}

// ── Help categories ──────────────────────────────────────────────────

/// Logical groupings shown in the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelpCategory {
    Navigation,
    Schedule,
    Counters,
}

impl HelpCategory {
    fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Schedule => "Schedule",
            Self::Counters => "Counters",
        }
    }

    /// Fixed display order for the help overlay.
    const ORDERED: &[Self] = &[Self::Navigation, Self::Schedule, Self::Counters];
}

// ── Keybinding ───────────────────────────────────────────────────────

/// A single key → action mapping with metadata for the help overlay.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: Action,
    /// Human-readable key label shown in help (e.g. `"Ctrl+C"`).
    /// Empty for aliases that share a row with another binding.
    pub label: &'static str,
    pub description: &'static str,
    pub category: HelpCategory,
}

/// A single row in the help overlay.
#[derive(Debug, Clone)]
pub struct HelpEntry {
    pub label: &'static str,
    pub description: &'static str,
}

// ── KeyMap ────────────────────────────────────────────────────────────

/// Declarative registry of every key binding on the dashboard.
pub struct KeyMap {
    pub bindings: Vec<KeyBinding>,
}

impl KeyMap {
    pub fn default_keymap() -> Self {
        Self {
            bindings: default_bindings(),
        }
    }

    pub fn lookup(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        // Shifted characters arrive with SHIFT set on some terminals.
        let modifiers = if matches!(code, KeyCode::Char(_) | KeyCode::BackTab) {
            modifiers.difference(KeyModifiers::SHIFT)
        } else {
            modifiers
        };
        self.bindings
            .iter()
            .find(|kb| kb.code == code && kb.modifiers == modifiers)
            .map(|kb| kb.action)
    }

    /// Generate grouped help entries in display order.
    pub fn help_entries(&self) -> Vec<(&'static str, Vec<HelpEntry>)> {
        let mut out = Vec::new();

        for &cat in HelpCategory::ORDERED {
            let mut entries: Vec<HelpEntry> = Vec::new();
            for kb in &self.bindings {
                if kb.category == cat
                    && !kb.label.is_empty()
                    && !entries.iter().any(|e| e.label == kb.label)
                {
                    entries.push(HelpEntry {
                        label: kb.label,
                        description: kb.description,
                    });
                }
            }
            if !entries.is_empty() {
                out.push((cat.label(), entries));
            }
        }

        out
    }
}

fn bind(
    code: KeyCode,
    modifiers: KeyModifiers,
    action: Action,
    label: &'static str,
    description: &'static str,
    category: HelpCategory,
) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        action,
        label,
        description,
        category,
    }
}

fn alias(code: KeyCode, modifiers: KeyModifiers, action: Action, category: HelpCategory) -> KeyBinding {
    bind(code, modifiers, action, "", "", category)
}

#[allow(clippy::enum_glob_use)]
fn default_bindings() -> Vec<KeyBinding> {
    use Action::*;
    use HelpCategory::*;

    let none = KeyModifiers::NONE;

    vec![
        // ── Navigation ───────────────────────────────────────────
        bind(KeyCode::Char('j'), none, MoveDown, "  j/k", "Move down/up", Navigation),
        alias(KeyCode::Char('k'), none, MoveUp, Navigation),
        alias(KeyCode::Down, none, MoveDown, Navigation),
        alias(KeyCode::Up, none, MoveUp, Navigation),
        bind(KeyCode::Char('J'), none, NextSection, "  J/K", "Next/previous section", Navigation),
        alias(KeyCode::Char('K'), none, PrevSection, Navigation),
        bind(KeyCode::Tab, none, SwitchFocus, "  Tab", "Switch schedule / counters", Navigation),
        alias(KeyCode::BackTab, none, SwitchFocus, Navigation),
        bind(KeyCode::Char('?'), none, ShowHelp, "  ?", "This help screen", Navigation),
        bind(KeyCode::Char('q'), none, Quit, "  q", "Quit", Navigation),
        alias(KeyCode::Char('c'), KeyModifiers::CONTROL, Quit, Navigation),
        // ── Schedule ─────────────────────────────────────────────
        bind(KeyCode::Char(' '), none, Toggle, "  Space/Enter", "Toggle selected item", Schedule),
        alias(KeyCode::Enter, none, Toggle, Schedule),
        // ── Counters ─────────────────────────────────────────────
        bind(KeyCode::Char('+'), none, Increment, "  +/-", "Adjust selected counter", Counters),
        alias(KeyCode::Char('='), none, Increment, Counters),
        alias(KeyCode::Char('-'), none, Decrement, Counters),
        bind(KeyCode::Char('w'), none, ToggleWorkout, "  w", "Toggle workout", Counters),
    ]
}

// ── Tests ────────────────────────────────────────────────────────────
