//! Key bindings for keyboard-driven table navigation.
//!
//! Bindings are built from option functions, so a view can declare
//! `new_binding(vec![with_keys_str(&["right", "l"]), with_help("→/l", "next page")])`
//! and match it against incoming [`KeyMsg`]s.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A key plus the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Required modifiers. `NONE` matches a bare key press.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text shown for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"→/l"`.
    pub key: String,
    /// What the key does, e.g. `"next page"`.
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
///
/// ```rust
/// use esaku_listview::key::{new_binding, with_help, with_keys_str};
///
/// let next = new_binding(vec![
///     with_keys_str(&["right", "l"]),
///     with_help("→/l", "next page"),
/// ]);
/// assert_eq!(next.help().desc, "next page");
/// assert!(next.enabled());
/// ```
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the keys of a binding from their names.
///
/// Recognised names are single characters, `left`, `right`, `up`, `down`,
/// `home`, `end`, `pgup`, `pgdown`, `enter`, `esc`, `tab` and `backspace`.
/// Unknown names are ignored.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let presses: Vec<KeyPress> = keys.iter().filter_map(|k| parse_key(k)).collect();
    Box::new(move |b: &mut Binding| b.keys = presses)
}

/// Sets the keys of a binding directly.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Sets the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

fn parse_key(name: &str) -> Option<KeyPress> {
    let code = match name {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code.into())
}

impl Binding {
    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys
            .iter()
            .any(|k| k.code == msg.key && msg.modifiers.contains(k.modifiers))
    }
}

/// Types that expose their bindings for help rendering.
pub trait KeyMap {
    /// Bindings for the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_matches_named_and_char_keys() {
        let b = new_binding(vec![with_keys_str(&["pgdown", "l"])]);
        assert!(b.matches(&key(KeyCode::PageDown)));
        assert!(b.matches(&key(KeyCode::Char('l'))));
        assert!(!b.matches(&key(KeyCode::Char('h'))));
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let b = new_binding(vec![with_keys_str(&["nonsense", "x"])]);
        assert_eq!(b.keys().len(), 1);
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["x"]), with_disabled()]);
        assert!(!b.matches(&key(KeyCode::Char('x'))));
        b.set_enabled(true);
        assert!(b.matches(&key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_modifier_binding_requires_modifier() {
        let b = new_binding(vec![with_keys(vec![
            (KeyCode::Char('n'), KeyModifiers::CONTROL).into(),
        ])]);
        assert!(!b.matches(&key(KeyCode::Char('n'))));
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('n'),
            modifiers: KeyModifiers::CONTROL,
        }));
    }
}
