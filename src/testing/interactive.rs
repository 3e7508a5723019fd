//! Two-thread console fixture
//!
//! The application runs on its own thread and the test thread drives it in
//! turns. A single turn token decides which side may touch the shared input
//! queue and output log. The application pauses, handing the token back,
//! whenever it is about to print with no input left.
//!
//! ```no_run
//! # use console_menus::testing::InteractiveConsoleFixture;
//! # use console_menus::app::MenuApplicationWithQuit;
//! # use console_menus::menu::{quit_item, StaticMenu};
//! let mut fixture = InteractiveConsoleFixture::new();
//! let menu = StaticMenu::builder().header("top").add(quit_item()).build_arc();
//! fixture
//!     .start_application(MenuApplicationWithQuit::new(menu, fixture.io()))
//!     .unwrap();
//! fixture.validate_final_output(&["top\n 1. Quit (q)\n", "Enter selection: ", "\nQuitting\n\n"], &["q"]);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::app::MenuApplication;
use crate::error::{MenuError, Result};
use crate::io::{ConsoleIo, InputReader, OutPrinter};
use crate::testing::{default_timeout, HarnessError};

/// Queued by [`InteractiveConsoleFixture::validate_final_output`]; a quitting
/// application must leave it unread
pub const UNCONSUMED_SENTINEL: &str = "SHOULD NOT BE CONSUMED";

const APPLICATION_THREAD_NAME: &str = "Application Thread";
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Driver,
    Application,
}

/// Lifecycle of the application thread as seen by the test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    /// Started but has not touched the console yet
    StartUp,
    /// Holds the turn
    Running,
    /// Waiting for the test to queue more input
    Paused,
    /// Exited or abandoned the protocol
    AppDone,
}

struct Exchange {
    turn: Turn,
    status: AppStatus,
    inputs: VecDeque<String>,
    outputs: Vec<String>,
    stop_requested: bool,
    failure: Option<HarnessError>,
}

impl Exchange {
    fn hand_to(&mut self, next: Turn) {
        assert_ne!(
            self.turn, next,
            "turn handed to {next:?} while it already held it"
        );
        trace!(turn = ?next, "Turn handed over");
        self.turn = next;
    }

    /// Mark the application finished with `failure` and return the turn
    fn give_up(&mut self, failure: HarnessError) -> MenuError {
        self.status = AppStatus::AppDone;
        if self.turn == Turn::Application {
            self.hand_to(Turn::Driver);
        }
        self.failure.get_or_insert_with(|| failure.clone());
        MenuError::Harness(failure)
    }
}

struct Shared {
    exchange: Mutex<Exchange>,
    turns: Condvar,
    timeout: Duration,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Exchange> {
        self.exchange.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block the application until it holds the turn with input queued
    fn await_turn<'a>(
        &'a self,
        exchange: MutexGuard<'a, Exchange>,
    ) -> Result<MutexGuard<'a, Exchange>> {
        let (mut exchange, wait) = self
            .turns
            .wait_timeout_while(exchange, self.timeout, |ex| {
                !ex.stop_requested && !(ex.turn == Turn::Application && !ex.inputs.is_empty())
            })
            .unwrap_or_else(PoisonError::into_inner);

        let failure = if exchange.stop_requested {
            Some(HarnessError::Stopped)
        } else if wait.timed_out() {
            Some(HarnessError::Timeout {
                millis: self.timeout.as_millis(),
            })
        } else {
            None
        };
        if let Some(failure) = failure {
            let error = exchange.give_up(failure);
            self.turns.notify_all();
            return Err(error);
        }

        exchange.status = AppStatus::Running;
        Ok(exchange)
    }
}

/// Reader and printer used by the application thread
#[derive(Clone)]
struct FixtureConsole {
    shared: Arc<Shared>,
}

impl InputReader for FixtureConsole {
    fn read_line(&self) -> Result<String> {
        let mut exchange = self.shared.lock();
        match exchange.status {
            AppStatus::AppDone => {
                return Err(MenuError::Harness(HarnessError::InputAfterTermination))
            }
            AppStatus::StartUp | AppStatus::Paused => {
                exchange = self.shared.await_turn(exchange)?;
            }
            AppStatus::Running => {}
        }
        match exchange.inputs.pop_front() {
            Some(line) => Ok(line),
            None => {
                let error = exchange.give_up(HarnessError::ExpectedMoreInput);
                self.shared.turns.notify_all();
                Err(error)
            }
        }
    }
}

impl OutPrinter for FixtureConsole {
    fn print(&self, text: &str) -> Result<()> {
        let mut exchange = self.shared.lock();
        if exchange.status == AppStatus::AppDone {
            let failure = exchange
                .failure
                .clone()
                .unwrap_or(HarnessError::ExitedUnexpectedly);
            return Err(MenuError::Harness(failure));
        }
        if exchange.status != AppStatus::Running {
            exchange = self.shared.await_turn(exchange)?;
        }
        while exchange.inputs.is_empty() {
            exchange.status = AppStatus::Paused;
            exchange.hand_to(Turn::Driver);
            self.shared.turns.notify_all();
            debug!("Application paused for input");
            exchange = self.shared.await_turn(exchange)?;
        }
        exchange.outputs.push(text.to_string());
        Ok(())
    }
}

/// Returns the turn to the test once the application thread ends, however it ends
struct Finished(Arc<Shared>);

impl Drop for Finished {
    fn drop(&mut self) {
        let mut exchange = self.0.lock();
        exchange.status = AppStatus::AppDone;
        if exchange.turn == Turn::Application {
            exchange.hand_to(Turn::Driver);
        }
        drop(exchange);
        self.0.turns.notify_all();
    }
}

/// Runs a [`MenuApplication`] on a separate thread and exchanges console
/// traffic with it one batch of input at a time.
///
/// Build the application with [`InteractiveConsoleFixture::io`], start it,
/// then alternate [`validate_interaction`](Self::validate_interaction) calls
/// and finish with [`validate_final_output`](Self::validate_final_output).
/// The application thread is stopped when the fixture is dropped.
pub struct InteractiveConsoleFixture {
    shared: Arc<Shared>,
    handle: Option<JoinHandle<Result<()>>>,
}

impl Default for InteractiveConsoleFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveConsoleFixture {
    pub fn new() -> Self {
        Self::with_timeout(default_timeout())
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                exchange: Mutex::new(Exchange {
                    turn: Turn::Driver,
                    status: AppStatus::StartUp,
                    inputs: VecDeque::new(),
                    outputs: Vec::new(),
                    stop_requested: false,
                    failure: None,
                }),
                turns: Condvar::new(),
                timeout,
            }),
            handle: None,
        }
    }

    /// Console handles for the application under test
    pub fn io(&self) -> ConsoleIo {
        let console = FixtureConsole {
            shared: Arc::clone(&self.shared),
        };
        ConsoleIo::new(Arc::new(console.clone()), Arc::new(console))
    }

    pub fn timeout(&self) -> Duration {
        self.shared.timeout
    }

    pub fn status(&self) -> AppStatus {
        self.shared.lock().status
    }

    pub fn outputs(&self) -> Vec<String> {
        self.shared.lock().outputs.clone()
    }

    pub fn inputs(&self) -> Vec<String> {
        self.shared.lock().inputs.iter().cloned().collect()
    }

    pub fn clear_outputs(&self) {
        self.shared.lock().outputs.clear();
    }

    /// Queue input lines. The application sees them after the next
    /// [`wait_for_application_processing`](Self::wait_for_application_processing).
    pub fn push_inputs<I, S>(&self, inputs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shared
            .lock()
            .inputs
            .extend(inputs.into_iter().map(Into::into));
    }

    /// Spawn the application thread. It blocks until the test hands it input.
    pub fn start_application<A>(&mut self, application: A) -> Result<()>
    where
        A: MenuApplication + Send + 'static,
    {
        assert!(self.handle.is_none(), "application already started");
        let shared = Arc::clone(&self.shared);
        let handle = thread::Builder::new()
            .name(APPLICATION_THREAD_NAME.to_string())
            .spawn(move || {
                let _finished = Finished(shared);
                let mut application = application;
                let outcome = application.run_application();
                application.close();
                outcome
            })?;
        self.handle = Some(handle);
        Ok(())
    }

    /// Hand the turn to the application and block until it pauses for more
    /// input or terminates.
    ///
    /// Fails if the application already exited, if it was somehow running,
    /// if it asked for more input than was queued, or if it does not give
    /// the turn back within the timeout. A timed out application is stopped.
    pub fn wait_for_application_processing(&mut self) -> std::result::Result<(), HarnessError> {
        let mut exchange = self.shared.lock();
        match exchange.status {
            AppStatus::StartUp | AppStatus::Paused => {
                exchange.hand_to(Turn::Application);
                self.shared.turns.notify_all();
            }
            AppStatus::AppDone => {
                return Err(exchange
                    .failure
                    .clone()
                    .unwrap_or(HarnessError::ExitedUnexpectedly));
            }
            AppStatus::Running => {
                drop(exchange);
                self.stop_application();
                return Err(HarnessError::RunningSimultaneously);
            }
        }

        let (exchange, wait) = self
            .shared
            .turns
            .wait_timeout_while(exchange, self.shared.timeout, |ex| {
                ex.turn == Turn::Application
            })
            .unwrap_or_else(PoisonError::into_inner);
        if wait.timed_out() {
            drop(exchange);
            self.stop_application();
            return Err(HarnessError::Timeout {
                millis: self.shared.timeout.as_millis(),
            });
        }
        match &exchange.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }

    /// Feed `to_input`, let the application consume all of it, and check
    /// that it printed exactly `expected_outputs` and is paused again.
    ///
    /// # Panics
    /// On any mismatch or protocol failure, or if `to_input` is empty.
    pub fn validate_interaction(&mut self, expected_outputs: &[&str], to_input: &[&str]) {
        assert!(
            !to_input.is_empty(),
            "validate_interaction needs at least one line of input"
        );
        {
            let mut exchange = self.shared.lock();
            assert!(
                exchange.inputs.is_empty(),
                "input left over from an earlier interaction: {:?}",
                exchange.inputs
            );
            exchange.outputs.clear();
            exchange.inputs.extend(to_input.iter().map(|s| s.to_string()));
        }
        if let Err(failure) = self.wait_for_application_processing() {
            panic!("{failure}");
        }
        {
            let exchange = self.shared.lock();
            assert!(
                exchange.inputs.is_empty(),
                "the application left input unconsumed: {:?}",
                exchange.inputs
            );
            assert_eq!(exchange.outputs, expected_outputs);
        }
        self.validate_application_paused();
    }

    /// Feed `to_input` plus an [`UNCONSUMED_SENTINEL`], let the application
    /// run to completion and check that it printed exactly
    /// `expected_outputs` without reading the sentinel.
    ///
    /// # Panics
    /// On any mismatch, protocol failure, or if the application keeps running.
    pub fn validate_final_output(&mut self, expected_outputs: &[&str], to_input: &[&str]) {
        {
            let mut exchange = self.shared.lock();
            exchange.outputs.clear();
            exchange.inputs.extend(to_input.iter().map(|s| s.to_string()));
            exchange.inputs.push_back(UNCONSUMED_SENTINEL.to_string());
        }
        if let Err(failure) = self.wait_for_application_processing() {
            panic!("{failure}");
        }
        {
            let exchange = self.shared.lock();
            assert_eq!(
                exchange.inputs,
                [UNCONSUMED_SENTINEL],
                "the application expected more input than was provided prior to quitting"
            );
            assert_eq!(exchange.outputs, expected_outputs);
        }
        self.validate_application_terminated();
    }

    /// # Panics
    /// If the application has terminated.
    pub fn validate_application_paused(&self) {
        assert_ne!(self.status(), AppStatus::AppDone, "application has terminated");
        let handle = self.handle.as_ref().expect("application was never started");
        assert!(!handle.is_finished(), "application thread has exited");
    }

    /// # Panics
    /// If the application thread does not finish within the timeout or it
    /// ended with an error.
    pub fn validate_application_terminated(&mut self) {
        let handle = self.handle.take().expect("application was never started");
        let deadline = Instant::now() + self.shared.timeout;
        while !handle.is_finished() && Instant::now() < deadline {
            thread::sleep(STOP_POLL_INTERVAL);
        }
        if !handle.is_finished() {
            self.handle = Some(handle);
            panic!(
                "application thread should have terminated within {} ms",
                self.shared.timeout.as_millis()
            );
        }
        assert_eq!(self.status(), AppStatus::AppDone);
        match handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(error)) => panic!("application ended with an error: {error}"),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    /// Ask the application thread to stop and wait for it up to the
    /// timeout. Returns whether the thread has exited.
    ///
    /// An application blocked on the console is woken and fails with
    /// [`HarnessError::Stopped`]. One that never touches the console again
    /// cannot be interrupted and is left detached.
    pub fn stop_application(&mut self) -> bool {
        self.shared.lock().stop_requested = true;
        self.shared.turns.notify_all();

        let Some(handle) = self.handle.take() else {
            return true;
        };
        let deadline = Instant::now() + self.shared.timeout;
        while !handle.is_finished() && Instant::now() < deadline {
            thread::sleep(STOP_POLL_INTERVAL);
        }
        if !handle.is_finished() {
            warn!(
                "{} did not stop within {} ms",
                APPLICATION_THREAD_NAME,
                self.shared.timeout.as_millis()
            );
            return false;
        }
        if let Ok(Err(error)) = handle.join() {
            debug!(error = %error, "Application ended with an error");
        }
        debug!("Application stopped");
        true
    }
}

impl Drop for InteractiveConsoleFixture {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.stop_application();
        }
    }
}
