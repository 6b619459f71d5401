use thiserror::Error;

/// Failures of the terminal front end. Game rules never produce these; a
/// refused move or an empty mana pool is a `GameEvent`.
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading keys, writing the screen, or opening the event log.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An event could not be encoded for the event log.
    #[error("event log encoding error: {0}")]
    EventLog(#[from] serde_json::Error),
}
