use std::fmt;
use std::io;

use logger::LoggerError;
use radar_protocol::errors::ProtocolError;
use simulator::types::sim_error::SimError;

/// Errors surfaced by the radar server.
#[derive(Debug)]
pub enum ServerError {
    /// Socket or filesystem failure.
    IoError(io::Error),
    /// A shared-state lock was poisoned.
    LockError(String),
    /// Simulation engine failure.
    SimError(SimError),
    /// Malformed or unserializable frame.
    ProtocolError(ProtocolError),
    /// Logger could not be created or written.
    LoggerError(LoggerError),
    /// Bad command line.
    InvalidArguments(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::IoError(e) => write!(f, "I/O error: {}", e),
            ServerError::LockError(msg) => write!(f, "Lock error: {}", msg),
            ServerError::SimError(e) => write!(f, "Simulation error: {}", e),
            ServerError::ProtocolError(e) => write!(f, "Protocol error: {}", e),
            ServerError::LoggerError(e) => write!(f, "Logger error: {}", e),
            ServerError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::IoError(error)
    }
}

impl From<SimError> for ServerError {
    fn from(error: SimError) -> Self {
        ServerError::SimError(error)
    }
}

impl From<ProtocolError> for ServerError {
    fn from(error: ProtocolError) -> Self {
        ServerError::ProtocolError(error)
    }
}

impl From<LoggerError> for ServerError {
    fn from(error: LoggerError) -> Self {
        ServerError::LoggerError(error)
    }
}
