//! Session lifecycle: an explicit run handle for the lobby
//!
//! The lobby may only ever drive one simulation at a time. Instead of a
//! fire-and-forget worker thread, the handle is an explicit three-state
//! value the lobby polls: Idle, Running, or Completed with a result it can
//! show the player. Faults inside the frame loop surface here as
//! `RunResult::Failure` and re-enable the start control.

use crate::error::AlreadyRunning;
use crate::sim::Winner;

/// How a finished session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    /// Clean exit; the winner is None when the player quit mid-match
    Ok(Option<Winner>),
    /// The simulation failed; message shown on the lobby screen
    Failure(String),
}

/// Lifecycle of the single allowed session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Completed(RunResult),
}

#[derive(Debug, Default)]
pub struct Launcher {
    state: RunState,
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session. Fails while another one is running.
    pub fn begin(&mut self) -> Result<(), AlreadyRunning> {
        if self.state == RunState::Running {
            return Err(AlreadyRunning);
        }
        self.state = RunState::Running;
        Ok(())
    }

    /// Record the outcome of the running session
    pub fn finish(&mut self, result: RunResult) {
        debug_assert_eq!(self.state, RunState::Running);
        if let RunResult::Failure(ref message) = result {
            log::error!("session failed: {message}");
        }
        self.state = RunState::Completed(result);
    }

    /// Consume a completed result, returning the handle to Idle
    pub fn take_result(&mut self) -> Option<RunResult> {
        match std::mem::take(&mut self.state) {
            RunState::Completed(result) => Some(result),
            other => {
                self.state = other;
                None
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_finish_take_cycle() {
        let mut launcher = Launcher::new();
        assert!(!launcher.is_running());
        launcher.begin().unwrap();
        assert!(launcher.is_running());
        launcher.finish(RunResult::Ok(Some(Winner::Hunter)));
        assert!(!launcher.is_running());
        assert_eq!(
            launcher.take_result(),
            Some(RunResult::Ok(Some(Winner::Hunter)))
        );
        // Back to idle, can start again
        launcher.begin().unwrap();
    }

    #[test]
    fn second_begin_is_rejected_while_running() {
        let mut launcher = Launcher::new();
        launcher.begin().unwrap();
        assert_eq!(launcher.begin(), Err(AlreadyRunning));
    }

    #[test]
    fn take_result_is_none_unless_completed() {
        let mut launcher = Launcher::new();
        assert_eq!(launcher.take_result(), None);
        launcher.begin().unwrap();
        assert_eq!(launcher.take_result(), None);
        assert!(launcher.is_running(), "taking must not clobber Running");
    }

    #[test]
    fn failure_result_round_trips() {
        let mut launcher = Launcher::new();
        launcher.begin().unwrap();
        launcher.finish(RunResult::Failure("boom".into()));
        assert_eq!(
            launcher.take_result(),
            Some(RunResult::Failure("boom".into()))
        );
    }
}
