use crate::config::hotkeys::{get_action_for_event, HotkeyAction};
use crate::state::{Focus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration, time::Instant};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => warn!("Failed to read terminal event: {}", e),
                },
                Ok(false) => (),
                Err(e) => warn!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Return a handler fed from the given receiver instead of the terminal.
    ///
    #[cfg(test)]
    fn from_channel(
        rx: mpsc::Receiver<Event<KeyEvent>>,
        tx: mpsc::Sender<Event<KeyEvent>>,
    ) -> Self {
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => {
                if event.kind != KeyEventKind::Press {
                    return Ok(true);
                }
                if let KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } = event
                {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                let action =
                    match get_action_for_event(&event, state.hotkey_mode(), state.get_hotkeys()) {
                        Some(action) => action,
                        None => return Ok(true),
                    };
                debug!("Processing '{:?}' for terminal event '{:?}'...", action, event);
                if !handle_action(action, state) {
                    return Ok(false);
                }
            }
            Event::Tick => (),
        }
        Ok(!state.is_session_ended())
    }
}

/// Apply a resolved hotkey action to the state. Returns false if exit was
/// requested.
///
fn handle_action(action: HotkeyAction, state: &mut State) -> bool {
    let menu_active = *state.current_focus() == Focus::Menu && state.animator().is_visible();
    match action {
        HotkeyAction::ToggleSidebar => {
            state.toggle_sidebar(Instant::now());
        }
        HotkeyAction::MenuNext if menu_active => {
            state.next_menu_item();
        }
        HotkeyAction::MenuPrev if menu_active => {
            state.previous_menu_item();
        }
        HotkeyAction::Select if menu_active => {
            state.select_menu_item();
        }
        HotkeyAction::FocusMenu => {
            state.focus_menu();
        }
        HotkeyAction::FocusScreen => {
            state.focus_screen();
        }
        HotkeyAction::Back => {
            state.go_back();
        }
        HotkeyAction::ToggleLog => {
            state.toggle_log();
        }
        HotkeyAction::Quit => return false,
        HotkeyAction::ConfirmLogout => {
            state.confirm_logout();
        }
        HotkeyAction::CancelLogout => {
            state.cancel_logout();
        }
        HotkeyAction::MenuNext | HotkeyAction::MenuPrev | HotkeyAction::Select => (),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::ScreenId;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> State {
        State::new(None, &Config::new()).unwrap()
    }

    fn feed(state: &mut State, keys: &[KeyEvent]) -> Vec<bool> {
        let (tx, rx) = mpsc::channel();
        for key in keys {
            tx.send(Event::Input(*key)).unwrap();
        }
        let handler = Handler::from_channel(rx, tx);
        keys.iter()
            .map(|_| handler.handle_next(state).unwrap())
            .collect()
    }

    #[test]
    fn ctrl_c_requests_exit() {
        let mut state = state();
        let results = feed(
            &mut state,
            &[KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)],
        );
        assert_eq!(results, vec![false]);
    }

    #[test]
    fn quit_hotkey_requests_exit() {
        let mut state = state();
        assert_eq!(feed(&mut state, &[key(KeyCode::Char('q'))]), vec![false]);
    }

    #[test]
    fn tick_continues() {
        let mut state = state();
        let (tx, rx) = mpsc::channel();
        tx.send(Event::Tick).unwrap();
        let handler = Handler::from_channel(rx, tx);
        assert!(handler.handle_next(&mut state).unwrap());
    }

    #[test]
    fn key_release_is_ignored() {
        let mut state = state();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(feed(&mut state, &[release]), vec![true]);
    }

    #[test]
    fn menu_keys_open_egg_stock() {
        let mut state = state();
        // Dashboard, Flocks, Eggs, then open Eggs and pick its second item
        let keys = [
            key(KeyCode::Char('j')),
            key(KeyCode::Char('j')),
            key(KeyCode::Enter),
            key(KeyCode::Char('j')),
            key(KeyCode::Char('j')),
            key(KeyCode::Enter),
        ];
        assert!(feed(&mut state, &keys).into_iter().all(|keep| keep));
        assert_eq!(state.active_screen(), ScreenId::EggStockScreen);
        assert!(state.sidebar().expansion().is_collapsed());
    }

    #[test]
    fn menu_keys_ignored_when_screen_focused() {
        let mut state = state();
        feed(
            &mut state,
            &[key(KeyCode::Char('l')), key(KeyCode::Char('j'))],
        );
        assert_eq!(*state.current_focus(), Focus::Screen);
        assert_eq!(state.sidebar().cursor(), 0);
    }

    #[test]
    fn toggle_hides_sidebar_and_moves_focus() {
        let mut state = state();
        feed(&mut state, &[key(KeyCode::Tab)]);
        assert!(!state.animator().is_visible());
        assert_eq!(*state.current_focus(), Focus::Screen);
    }

    #[test]
    fn logout_confirm_ends_session() {
        let mut state = state();
        let results = feed(
            &mut state,
            &[key(KeyCode::Char('k')), key(KeyCode::Enter), key(KeyCode::Enter)],
        );
        assert_eq!(results, vec![true, true, false]);
        assert!(state.is_session_ended());
    }

    #[test]
    fn logout_cancel_keeps_session() {
        let mut state = state();
        let results = feed(
            &mut state,
            &[key(KeyCode::Char('k')), key(KeyCode::Enter), key(KeyCode::Esc)],
        );
        assert_eq!(results, vec![true, true, true]);
        assert!(!state.has_logout_dialog());
        assert!(!state.is_session_ended());
    }
}
