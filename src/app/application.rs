//! The read-eval-print loop over a menu session

use std::sync::Arc;

use tracing::{debug, info};

use crate::app::session::MenuSession;
use crate::core::config::{Config, UnresolvedSelectionMode};
use crate::error::{MenuError, Result};
use crate::io::ConsoleIo;
use crate::menu::Menu;

/// An application driven by blocking console input
pub trait MenuApplication {
    /// Run until the quit signal is raised or a real failure occurs
    fn run_application(&mut self) -> Result<()>;

    /// End the application's lifetime. Closes the menu session.
    fn close(&mut self);
}

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Quitting,
}

/// What happens when input matches neither a shortcut nor an item number
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UnresolvedSelection {
    /// Silently render the same menu again
    #[default]
    Redisplay,
    /// Print the message as important, then render the same menu again
    Notify(String),
}

/// Runs after the quit signal ends the loop
pub type QuitAction = Box<dyn Fn(&str, &ConsoleIo) -> Result<()> + Send>;

/// Menu application whose only graceful exit is the quit signal
pub struct MenuApplicationWithQuit {
    session: MenuSession,
    io: ConsoleIo,
    state: AppState,
    unresolved: UnresolvedSelection,
    quit_action: QuitAction,
}

impl MenuApplicationWithQuit {
    pub fn new(top_level_menu: Arc<dyn Menu>, io: ConsoleIo) -> Self {
        Self {
            session: MenuSession::new(top_level_menu),
            io,
            state: AppState::Running,
            unresolved: UnresolvedSelection::default(),
            quit_action: Box::new(|message, io| io.output.important(message)),
        }
    }

    /// Apply the unresolved-selection policy from `config`
    pub fn with_config(self, config: &Config) -> Self {
        let policy = match config.unresolved_selection {
            UnresolvedSelectionMode::Redisplay => UnresolvedSelection::Redisplay,
            UnresolvedSelectionMode::Notify => {
                UnresolvedSelection::Notify(config.unresolved_message.clone())
            }
        };
        self.with_unresolved_selection(policy)
    }

    pub fn with_unresolved_selection(mut self, policy: UnresolvedSelection) -> Self {
        self.unresolved = policy;
        self
    }

    /// Replace the default farewell, which prints the quit message as important
    pub fn with_quit_action(
        mut self,
        action: impl Fn(&str, &ConsoleIo) -> Result<()> + Send + 'static,
    ) -> Self {
        self.quit_action = Box::new(action);
        self
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn session(&self) -> &MenuSession {
        &self.session
    }

    /// Render one menu, read one line and run the selected action
    fn run_menu(&mut self, menu: &dyn Menu) -> Result<()> {
        let items = menu.render(self.io.output.as_ref())?;
        let input = self.io.input.read_line()?;
        match menu.select(&items, &input) {
            Some(item) => item.invoke(&mut self.session),
            None => {
                debug!(input = %input, "Selection did not match any menu item");
                if let UnresolvedSelection::Notify(message) = &self.unresolved {
                    self.io.output.important(message)?;
                }
                Ok(())
            }
        }
    }
}

impl MenuApplication for MenuApplicationWithQuit {
    fn run_application(&mut self) -> Result<()> {
        self.state = AppState::Running;
        loop {
            let menu = self.session.current();
            match self.run_menu(menu.as_ref()) {
                Ok(()) => {}
                Err(MenuError::Cancelled { message, handler }) => {
                    debug!(message = %message, ?handler, "Cancellation reached the menu loop");
                    self.io.output.important(&message)?;
                    handler.apply(&mut self.session);
                }
                Err(MenuError::Quit(message)) => {
                    info!("Quit requested");
                    self.state = AppState::Quitting;
                    return (self.quit_action)(&message, &self.io);
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn close(&mut self) {
        self.session.close();
    }
}

impl Drop for MenuApplicationWithQuit {
    fn drop(&mut self) {
        self.close();
    }
}
