//! Centralized error types for the Pac-Man engine.
//!
//! Gameplay itself never fails: bad input is ignored and unknown blueprint symbols
//! degrade to pellets. These errors only exist at the host boundary.

/// Main error type for the Pac-Man engine.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// The host did not provide the surface the engine draws onto.
    #[error("Mount point missing: {0}")]
    MountMissing(String),

    #[error("SDL error: {0}")]
    Sdl(String),
}

/// Result type for host-facing operations.
pub type GameResult<T> = Result<T, GameError>;
