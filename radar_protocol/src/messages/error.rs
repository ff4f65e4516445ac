use std::io::Cursor;

use crate::{errors::ProtocolError, types::ProtocolString, Serializable};

/// Sent by the server when a request cannot be honored, e.g. a failed login
/// or a malformed frame.
#[derive(Debug, PartialEq, Default)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Serializable for ErrorMessage {
    fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.message.to_string_bytes()?);
        Ok(bytes)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError>
    where
        Self: Sized,
    {
        let mut cursor = Cursor::new(bytes);
        let message = String::from_string_bytes(&mut cursor)?;
        Ok(ErrorMessage { message })
    }
}
