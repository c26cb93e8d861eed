use crate::config::Config;
use crate::error::AppError;
use crate::events::navigation::{
    Event as NavigationEvent, Handler as NavigationEventHandler, NavigationEventSender,
};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{self, LogBuffer};
use crate::state::State;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

type NavigationEventReceiver = std::sync::mpsc::Receiver<NavigationEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let log_buffer = LogBuffer::default();
        logger::init(log_buffer.clone(), LevelFilter::Info)?;

        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<NavigationEvent>();
        let navigator: NavigationEventSender = tx;
        let state = State::new(Some(Box::new(navigator)), &config)?.with_log_buffer(log_buffer);
        let app = App {
            state: Arc::new(Mutex::new(state)),
            config,
        };
        app.start_navigation(rx)?;
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread that applies screen transitions to the state.
    ///
    fn start_navigation(&self, receiver: NavigationEventReceiver) -> Result<()> {
        debug!("Creating new thread for navigation...");
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;
        let cloned_state = Arc::clone(&self.state);
        let initial = self.config.initial_screen;
        std::thread::spawn(move || {
            runtime.block_on(async {
                let mut navigation_event_handler =
                    NavigationEventHandler::new(&cloned_state, initial);
                while let Ok(navigation_event) = receiver.recv() {
                    navigation_event_handler.handle(navigation_event).await;
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|e| AppError::Terminal(e.to_string()))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        let result = loop {
            let mut state = self.state.lock().await;
            if let Ok(size) = terminal.size() {
                state.set_terminal_size(size);
            };
            if let Err(e) = terminal.draw(|frame| crate::ui::render(frame, &mut state)) {
                break Err(anyhow::Error::from(AppError::Terminal(e.to_string())));
            }
            match terminal_event_handler.handle_next(&mut state) {
                Ok(true) => (),
                Ok(false) => {
                    debug!("Received application exit request.");
                    break Ok(());
                }
                Err(e) => break Err(e),
            }
        };

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}
