use std::fmt;

/// Represents errors that can occur in the simulation engine.
#[derive(Debug)]
pub enum SimError {
    /// The engine was asked to run with no aircraft.
    InvalidAircraftCount(usize),
    /// The timer thread could not be started.
    TimerStartError(String),
    /// Generic error case with a custom message.
    Other(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidAircraftCount(count) => {
                write!(f, "Invalid aircraft count: {}", count)
            }
            SimError::TimerStartError(msg) => write!(f, "Timer start error: {}", msg),
            SimError::Other(ref message) => write!(f, "Error: {}", message),
        }
    }
}
