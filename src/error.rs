//! Error taxonomy
//!
//! Only two things can go wrong at runtime: an art asset is missing (we fall
//! back to placeholder shapes and keep going) or the simulation itself blows
//! up mid-step (surfaced on the lobby screen, never crashes the host).

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GameError {
    /// Non-fatal: the renderer substitutes a solid-color placeholder.
    #[error("asset '{0}' not found, using placeholder")]
    AssetMissing(String),

    /// Unexpected failure inside a simulation step.
    #[error("simulation fault: {0}")]
    SimulationFault(String),
}

/// Returned by [`crate::launcher::Launcher::begin`] when a session is
/// already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a game session is already running")]
pub struct AlreadyRunning;
