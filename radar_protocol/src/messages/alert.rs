use std::io::Cursor;

use crate::{
    errors::ProtocolError,
    types::{FromCursorDeserializable, ProtocolString},
    Serializable,
};

/// Pushed to every connected client when a conflict opens between two
/// aircraft. A conflict that persists produces exactly one alert, on the
/// tick it first appears.
///
/// ### Fields
///
/// - `message` - Human-readable conflict description.
/// - `timestamp_millis` - Unix epoch milliseconds at which the alert was
///   raised.
#[derive(Debug, PartialEq, Default)]
pub struct Alert {
    pub message: String,
    pub timestamp_millis: i64,
}

impl Alert {
    pub fn new(message: &str, timestamp_millis: i64) -> Self {
        Self {
            message: message.to_string(),
            timestamp_millis,
        }
    }
}

impl Serializable for Alert {
    fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.message.to_string_bytes()?);
        bytes.extend_from_slice(&self.timestamp_millis.to_be_bytes());
        Ok(bytes)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError>
    where
        Self: Sized,
    {
        let mut cursor = Cursor::new(bytes);
        let message = String::from_string_bytes(&mut cursor)?;
        let timestamp_millis = i64::deserialize(&mut cursor)?;
        Ok(Alert {
            message,
            timestamp_millis,
        })
    }
}
