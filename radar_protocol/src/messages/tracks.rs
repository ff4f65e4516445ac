use std::io::Cursor;

use crate::{
    errors::ProtocolError,
    types::{FromCursorDeserializable, ProtocolString},
    Serializable,
};

/// One aircraft's state as carried on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: i32,
    pub callsign: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub speed: f64,
    pub heading: i32,
    pub phase: String,
    pub destination: String,
}

impl Track {
    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), ProtocolError> {
        bytes.extend_from_slice(&self.id.to_be_bytes());
        bytes.extend_from_slice(&self.callsign.to_string_bytes()?);
        bytes.extend_from_slice(&self.latitude.to_be_bytes());
        bytes.extend_from_slice(&self.longitude.to_be_bytes());
        bytes.extend_from_slice(&self.altitude.to_be_bytes());
        bytes.extend_from_slice(&self.speed.to_be_bytes());
        bytes.extend_from_slice(&self.heading.to_be_bytes());
        bytes.extend_from_slice(&self.phase.to_string_bytes()?);
        bytes.extend_from_slice(&self.destination.to_string_bytes()?);
        Ok(())
    }

    fn read(cursor: &mut Cursor<&[u8]>) -> Result<Self, ProtocolError> {
        Ok(Track {
            id: i32::deserialize(cursor)?,
            callsign: String::from_string_bytes(cursor)?,
            latitude: f64::deserialize(cursor)?,
            longitude: f64::deserialize(cursor)?,
            altitude: f64::deserialize(cursor)?,
            speed: f64::deserialize(cursor)?,
            heading: i32::deserialize(cursor)?,
            phase: String::from_string_bytes(cursor)?,
            destination: String::from_string_bytes(cursor)?,
        })
    }
}

/// The per-tick snapshot of every aircraft, pushed to all connected clients.
///
/// The body is a `u16` track count followed by that many serialized tracks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tracks {
    pub tracks: Vec<Track>,
}

impl Tracks {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}

impl Serializable for Tracks {
    fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let count =
            u16::try_from(self.tracks.len()).map_err(|_| ProtocolError::SerializationError)?;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&count.to_be_bytes());
        for track in &self.tracks {
            track.write(&mut bytes)?;
        }
        Ok(bytes)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError>
    where
        Self: Sized,
    {
        let mut cursor = Cursor::new(bytes);
        let count = u16::deserialize(&mut cursor)?;

        let mut tracks = Vec::with_capacity(count as usize);
        for _ in 0..count {
            tracks.push(Track::read(&mut cursor)?);
        }
        Ok(Tracks { tracks })
    }
}
