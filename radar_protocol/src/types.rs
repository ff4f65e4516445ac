use std::io::{Cursor, Read};

use crate::errors::ProtocolError;

/// Primitives shared by the message bodies: big-endian fixed-width numbers
/// and `u16`-length-prefixed UTF-8 strings.
pub trait FromCursorDeserializable {
    fn deserialize(cursor: &mut Cursor<&[u8]>) -> Result<Self, ProtocolError>
    where
        Self: Sized;
}

impl FromCursorDeserializable for i32 {
    fn deserialize(cursor: &mut Cursor<&[u8]>) -> Result<Self, ProtocolError> {
        let mut bytes = [0u8; 4];
        cursor
            .read_exact(&mut bytes)
            .map_err(|_| ProtocolError::CursorError)?;

        Ok(i32::from_be_bytes(bytes))
    }
}

impl FromCursorDeserializable for i64 {
    fn deserialize(cursor: &mut Cursor<&[u8]>) -> Result<Self, ProtocolError> {
        let mut bytes = [0u8; 8];
        cursor
            .read_exact(&mut bytes)
            .map_err(|_| ProtocolError::CursorError)?;

        Ok(i64::from_be_bytes(bytes))
    }
}

impl FromCursorDeserializable for u16 {
    fn deserialize(cursor: &mut Cursor<&[u8]>) -> Result<Self, ProtocolError> {
        let mut bytes = [0u8; 2];
        cursor
            .read_exact(&mut bytes)
            .map_err(|_| ProtocolError::CursorError)?;

        Ok(u16::from_be_bytes(bytes))
    }
}

impl FromCursorDeserializable for f64 {
    fn deserialize(cursor: &mut Cursor<&[u8]>) -> Result<Self, ProtocolError> {
        let mut bytes = [0u8; 8];
        cursor
            .read_exact(&mut bytes)
            .map_err(|_| ProtocolError::CursorError)?;

        Ok(f64::from_be_bytes(bytes))
    }
}

pub trait ProtocolString {
    fn from_string_bytes(cursor: &mut Cursor<&[u8]>) -> Result<Self, ProtocolError>
    where
        Self: Sized;

    fn to_string_bytes(&self) -> Result<Vec<u8>, ProtocolError>;
}

impl ProtocolString for String {
    fn from_string_bytes(cursor: &mut Cursor<&[u8]>) -> Result<Self, ProtocolError> {
        let len = u16::deserialize(cursor)?;

        let mut bytes = vec![0u8; len as usize];
        cursor
            .read_exact(&mut bytes)
            .map_err(|_| ProtocolError::CursorError)?;

        String::from_utf8(bytes).map_err(|_| ProtocolError::DeserializationError)
    }

    fn to_string_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let len = u16::try_from(self.len()).map_err(|_| ProtocolError::SerializationError)?;

        let mut bytes = Vec::with_capacity(2 + self.len());
        bytes.extend_from_slice(&len.to_be_bytes());
        bytes.extend_from_slice(self.as_bytes());

        Ok(bytes)
    }
}
