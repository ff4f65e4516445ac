use std::fmt;

/// Enum representing errors that can occur within the radar wire protocol.
#[derive(Debug)]
pub enum ProtocolError {
    SerializationError,
    DeserializationError,
    NotEnoughBytes,
    CursorError,
    InvalidCode,
    InvalidVariant,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ProtocolError::SerializationError => "Serialization error occurred",
            ProtocolError::DeserializationError => "Deserialization error occurred",
            ProtocolError::NotEnoughBytes => "Not enough bytes for operation",
            ProtocolError::CursorError => "Cursor error encountered",
            ProtocolError::InvalidCode => "Invalid code encountered",
            ProtocolError::InvalidVariant => "Invalid variant provided",
        };
        write!(f, "{}", description)
    }
}
