use crate::config::hotkeys::HotkeyMode;
use crate::config::{Config, ShellHotkeys};
use crate::error::AppResult;
use crate::events::navigation::Navigator;
use crate::logger::LogBuffer;
use crate::sidebar::{MenuConfig, SidebarController, SidebarHost, VisibilityAnimator};
use crate::ui::Theme;
use log::*;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use super::navigation::{Focus, ScreenId};

/// The part of the state that owns the active screen and talks to the
/// navigator. The sidebar reports selections here.
///
pub struct Shell {
    navigator: Option<Box<dyn Navigator + Send>>,
    active_screen: ScreenId,
    logout_dialog_open: bool,
}

impl Shell {
    fn new(navigator: Option<Box<dyn Navigator + Send>>, active_screen: ScreenId) -> Self {
        Shell {
            navigator,
            active_screen,
            logout_dialog_open: false,
        }
    }

    pub fn active_screen(&self) -> ScreenId {
        self.active_screen
    }

    fn go_back(&self) {
        match &self.navigator {
            Some(navigator) => navigator.go_back(),
            None => debug!("No navigator attached; ignoring back request."),
        }
    }
}

impl SidebarHost for Shell {
    fn active_screen_changed(&mut self, screen: ScreenId) {
        self.active_screen = screen;
    }

    fn navigate_to(&mut self, screen: ScreenId) -> bool {
        match &self.navigator {
            Some(navigator) => navigator.navigate_to(screen),
            None => {
                debug!("No navigator attached; ignoring navigation to {}.", screen);
                false
            }
        }
    }

    fn request_logout(&mut self) {
        debug!("Opening logout confirmation...");
        self.logout_dialog_open = true;
    }
}

/// Houses data representative of application state.
///
pub struct State {
    shell: Shell,
    sidebar: SidebarController,
    animator: VisibilityAnimator,
    current_focus: Focus,
    session_ended: bool,
    show_log: bool,
    log_buffer: LogBuffer,
    theme: Theme,
    hotkeys: ShellHotkeys,
    terminal_size: Rect,
}

impl State {
    /// Return the state described by `config`, with the compiled-in farm
    /// menu. Fails if the menu definition is invalid.
    ///
    pub fn new(navigator: Option<Box<dyn Navigator + Send>>, config: &Config) -> AppResult<Self> {
        let sidebar = SidebarController::new(MenuConfig::poultry_farm(), config.initial_screen)?;
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', using default. Available themes: {}",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        let animator = VisibilityAnimator::new(
            config.start_visible,
            config.sidebar_width,
            Duration::from_millis(config.animation_ms),
        );
        Ok(State {
            shell: Shell::new(navigator, config.initial_screen),
            sidebar,
            animator,
            current_focus: if config.start_visible {
                Focus::Menu
            } else {
                Focus::Screen
            },
            session_ended: false,
            show_log: false,
            log_buffer: LogBuffer::default(),
            theme,
            hotkeys: config.hotkeys.clone(),
            terminal_size: Rect::default(),
        })
    }

    /// Attach the buffer the logger writes into.
    ///
    pub fn with_log_buffer(mut self, log_buffer: LogBuffer) -> Self {
        self.log_buffer = log_buffer;
        self
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Get the hotkey bindings.
    ///
    pub fn get_hotkeys(&self) -> &ShellHotkeys {
        &self.hotkeys
    }

    /// Return the hotkey table that applies right now.
    ///
    pub fn hotkey_mode(&self) -> HotkeyMode {
        if self.shell.logout_dialog_open {
            HotkeyMode::LogoutDialog
        } else {
            HotkeyMode::Shell
        }
    }

    /// Sets the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Return the active screen.
    ///
    pub fn active_screen(&self) -> ScreenId {
        self.shell.active_screen()
    }

    /// Record the screen the navigator is now showing and let the sidebar
    /// react to it. A late confirmation of a selection the sidebar has since
    /// replaced leaves the newer screen active.
    ///
    pub fn set_active_screen(&mut self, screen: ScreenId) -> &mut Self {
        if self.sidebar.sync_active_screen(screen) {
            self.shell.active_screen = screen;
        }
        self
    }

    pub fn sidebar(&self) -> &SidebarController {
        &self.sidebar
    }

    pub fn animator(&self) -> &VisibilityAnimator {
        &self.animator
    }

    /// Show or hide the sidebar, starting the slide at `now`.
    ///
    pub fn toggle_sidebar(&mut self, now: Instant) -> &mut Self {
        let visible = self.animator.toggle(now);
        self.current_focus = if visible { Focus::Menu } else { Focus::Screen };
        info!("Sidebar {}", if visible { "shown" } else { "hidden" });
        self
    }

    /// Return the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    /// Change focus to the sidebar if it is shown.
    ///
    pub fn focus_menu(&mut self) -> &mut Self {
        if self.animator.is_visible() {
            self.current_focus = Focus::Menu;
        }
        self
    }

    /// Change focus to the screen panel.
    ///
    pub fn focus_screen(&mut self) -> &mut Self {
        self.current_focus = Focus::Screen;
        self
    }

    /// Move the sidebar cursor down.
    ///
    pub fn next_menu_item(&mut self) -> &mut Self {
        self.sidebar.next_row();
        self
    }

    /// Move the sidebar cursor up.
    ///
    pub fn previous_menu_item(&mut self) -> &mut Self {
        self.sidebar.previous_row();
        self
    }

    /// Press the sidebar row under the cursor.
    ///
    pub fn select_menu_item(&mut self) -> &mut Self {
        self.sidebar.press_selected(&mut self.shell);
        self
    }

    /// Ask the navigator for the previous screen.
    ///
    pub fn go_back(&mut self) -> &mut Self {
        self.shell.go_back();
        self
    }

    pub fn has_logout_dialog(&self) -> bool {
        self.shell.logout_dialog_open
    }

    /// Close the dialog and end the session.
    ///
    pub fn confirm_logout(&mut self) -> &mut Self {
        self.shell.logout_dialog_open = false;
        self.session_ended = true;
        info!("Logged out.");
        self
    }

    pub fn cancel_logout(&mut self) -> &mut Self {
        self.shell.logout_dialog_open = false;
        self
    }

    pub fn is_session_ended(&self) -> bool {
        self.session_ended
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    /// Return the most recent `count` log lines.
    ///
    pub fn log_entries(&self, count: usize) -> Vec<String> {
        self.log_buffer.tail(count)
    }
}
