use crate::state::{ScreenId, State};
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify navigation requests.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    NavigateTo(ScreenId),
    GoBack,
}

pub type NavigationEventSender = std::sync::mpsc::Sender<Event>;

/// Fire-and-forget screen transitions.
///
pub trait Navigator {
    /// Request `screen`. Returns true if the request was queued, in which
    /// case the active screen is written back once it is shown.
    fn navigate_to(&self, screen: ScreenId) -> bool;
    fn go_back(&self);
}

impl Navigator for NavigationEventSender {
    fn navigate_to(&self, screen: ScreenId) -> bool {
        match self.send(Event::NavigateTo(screen)) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to request navigation to {}: {}", screen, e);
                false
            }
        }
    }

    fn go_back(&self) {
        if let Err(e) = self.send(Event::GoBack) {
            warn!("Failed to request back navigation: {}", e);
        }
    }
}

/// Specify struct for performing screen transitions. Keeps the screen
/// history and writes the resulting active screen back into the state.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    history: Vec<ScreenId>,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state and the initial screen.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, initial: ScreenId) -> Self {
        Handler {
            state,
            history: vec![initial],
        }
    }

    /// Return the screen history, oldest first.
    ///
    pub fn history(&self) -> &[ScreenId] {
        &self.history
    }

    /// Handle navigation event.
    ///
    pub async fn handle(&mut self, event: Event) {
        debug!("Processing navigation event '{:?}'...", event);
        match event {
            Event::NavigateTo(screen) => self.navigate_to(screen).await,
            Event::GoBack => self.go_back().await,
        }
    }

    async fn navigate_to(&mut self, screen: ScreenId) {
        if self.history.last() != Some(&screen) {
            self.history.push(screen);
        }
        info!("Showing {} (history depth {})", screen.title(), self.history.len());
        let mut state = self.state.lock().await;
        state.set_active_screen(screen);
    }

    async fn go_back(&mut self) {
        if self.history.len() <= 1 {
            debug!("Already at the first screen; nothing to go back to.");
            return;
        }
        self.history.pop();
        if let Some(&screen) = self.history.last() {
            info!("Back to {}", screen.title());
            let mut state = self.state.lock().await;
            state.set_active_screen(screen);
        }
    }
}
