use std::io::Read;

use crate::{
    errors::ProtocolError,
    header::{FrameHeader, Opcode, Version},
    messages::{
        alert::Alert,
        auth::{Login, LoginOk},
        error::ErrorMessage,
        tracks::Tracks,
    },
    Serializable,
};

pub const HEADER_LENGTH: usize = 6;

#[derive(Debug)]
pub enum Frame {
    /// Authenticates the connection. Must be the first frame a client sends.
    Login(Login),
    /// Confirms a successful login and carries the account role.
    LoginOk(LoginOk),
    /// The per-tick aircraft snapshot, pushed to all authenticated clients.
    Tracks(Tracks),
    /// A newly opened proximity conflict.
    Alert(Alert),
    /// Indicates an error processing a request.
    Error(ErrorMessage),
}

impl Frame {
    fn opcode(&self) -> Opcode {
        match self {
            Frame::Login(_) => Opcode::Login,
            Frame::LoginOk(_) => Opcode::LoginOk,
            Frame::Tracks(_) => Opcode::Tracks,
            Frame::Alert(_) => Opcode::Alert,
            Frame::Error(_) => Opcode::Error,
        }
    }

    fn decode_body(opcode: Opcode, body: &[u8]) -> Result<Self, ProtocolError> {
        let frame = match opcode {
            Opcode::Login => Self::Login(Login::from_bytes(body)?),
            Opcode::LoginOk => Self::LoginOk(LoginOk::from_bytes(body)?),
            Opcode::Tracks => Self::Tracks(Tracks::from_bytes(body)?),
            Opcode::Alert => Self::Alert(Alert::from_bytes(body)?),
            Opcode::Error => Self::Error(ErrorMessage::from_bytes(body)?),
        };

        Ok(frame)
    }
}

impl Serializable for Frame {
    /// 0         8        16        24        32        40        48
    /// +---------+---------+---------+---------+---------+---------+
    /// | version | opcode  |               length                  |
    /// +---------+---------+---------+---------+---------+---------+
    /// |                                                           |
    /// .                       ...  body ...                       .
    /// .                                                           .
    /// +-----------------------------------------------------------+
    fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let version = match self {
            Frame::Login(_) => Version::RequestV1,
            Frame::LoginOk(_) | Frame::Tracks(_) | Frame::Alert(_) | Frame::Error(_) => {
                Version::ResponseV1
            }
        };

        let body_bytes = match self {
            Frame::Login(login) => login.to_bytes()?,
            Frame::LoginOk(login_ok) => login_ok.to_bytes()?,
            Frame::Tracks(tracks) => tracks.to_bytes()?,
            Frame::Alert(alert) => alert.to_bytes()?,
            Frame::Error(error) => error.to_bytes()?,
        };

        let length =
            u32::try_from(body_bytes.len()).map_err(|_| ProtocolError::SerializationError)?;

        let header = FrameHeader::new(version, self.opcode(), length);

        let mut bytes = header.to_bytes()?;
        bytes.extend_from_slice(&body_bytes);

        Ok(bytes)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        if bytes.len() < HEADER_LENGTH {
            return Err(ProtocolError::NotEnoughBytes);
        }

        let header = FrameHeader::from_bytes(&bytes[..HEADER_LENGTH])?;
        let body_end = HEADER_LENGTH + header.body_length() as usize;

        if bytes.len() < body_end {
            return Err(ProtocolError::NotEnoughBytes);
        }

        Self::decode_body(header.opcode(), &bytes[HEADER_LENGTH..body_end])
    }
}

/// Reads exactly one frame from a blocking stream: the fixed header first,
/// then the body it announces.
pub fn read_frame<R: Read>(stream: &mut R) -> Result<Frame, ProtocolError> {
    let mut header_bytes = [0u8; HEADER_LENGTH];
    stream
        .read_exact(&mut header_bytes)
        .map_err(|_| ProtocolError::NotEnoughBytes)?;

    let header = FrameHeader::from_bytes(&header_bytes)?;

    let mut body = vec![0u8; header.body_length() as usize];
    stream
        .read_exact(&mut body)
        .map_err(|_| ProtocolError::NotEnoughBytes)?;

    Frame::decode_body(header.opcode(), &body)
}
