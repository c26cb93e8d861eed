//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action
//! types, hotkey bindings, and the default bindings per input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Shell actions
    ToggleSidebar,
    MenuNext,
    MenuPrev,
    Select,
    FocusMenu,
    FocusScreen,
    Back,
    ToggleLog,
    Quit,

    // Logout dialog actions
    ConfirmLogout,
    CancelLogout,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Input modes with their own hotkey tables.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyMode {
    Shell,
    LogoutDialog,
}

/// Maps hotkey actions to their key bindings for each input mode.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellHotkeys {
    #[serde(default = "default_shell_hotkeys")]
    pub shell: HashMap<HotkeyAction, Hotkey>,
    #[serde(default = "default_logout_dialog_hotkeys")]
    pub logout_dialog: HashMap<HotkeyAction, Hotkey>,
}

impl Default for ShellHotkeys {
    fn default() -> Self {
        ShellHotkeys {
            shell: default_shell_hotkeys(),
            logout_dialog: default_logout_dialog_hotkeys(),
        }
    }
}

impl ShellHotkeys {
    /// Return the table for `mode`.
    ///
    pub fn for_mode(&self, mode: HotkeyMode) -> &HashMap<HotkeyAction, Hotkey> {
        match mode {
            HotkeyMode::Shell => &self.shell,
            HotkeyMode::LogoutDialog => &self.logout_dialog,
        }
    }
}

fn default_shell_hotkeys() -> HashMap<HotkeyAction, Hotkey> {
    let mut shell = HashMap::new();
    shell.insert(HotkeyAction::ToggleSidebar, Hotkey::plain(KeyCode::Tab));
    shell.insert(HotkeyAction::MenuNext, Hotkey::plain(KeyCode::Char('j')));
    shell.insert(HotkeyAction::MenuPrev, Hotkey::plain(KeyCode::Char('k')));
    shell.insert(HotkeyAction::Select, Hotkey::plain(KeyCode::Enter));
    shell.insert(HotkeyAction::FocusMenu, Hotkey::plain(KeyCode::Char('h')));
    shell.insert(HotkeyAction::FocusScreen, Hotkey::plain(KeyCode::Char('l')));
    shell.insert(HotkeyAction::Back, Hotkey::plain(KeyCode::Esc));
    shell.insert(HotkeyAction::ToggleLog, Hotkey::plain(KeyCode::Char('d')));
    shell.insert(HotkeyAction::Quit, Hotkey::plain(KeyCode::Char('q')));
    shell
}

fn default_logout_dialog_hotkeys() -> HashMap<HotkeyAction, Hotkey> {
    let mut logout_dialog = HashMap::new();
    logout_dialog.insert(HotkeyAction::ConfirmLogout, Hotkey::plain(KeyCode::Enter));
    logout_dialog.insert(HotkeyAction::CancelLogout, Hotkey::plain(KeyCode::Esc));
    logout_dialog
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Gets the action for a KeyEvent in the given mode.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    mode: HotkeyMode,
    hotkeys: &ShellHotkeys,
) -> Option<HotkeyAction> {
    hotkeys
        .for_mode(mode)
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let mut parts = Vec::new();

    for (action, description, paired_action) in actions {
        if let Some(hotkey) = hotkeys.get(action) {
            match paired_action.and_then(|paired| hotkeys.get(&paired)) {
                Some(paired_hotkey) => parts.push(format!(
                    " {}/{}: {}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey),
                    description
                )),
                None => parts.push(format!(
                    " {}: {}",
                    format_hotkey_display(hotkey),
                    description
                )),
            }
        }
    }

    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
