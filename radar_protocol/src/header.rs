use crate::{errors::ProtocolError, ByteSerializable, Serializable};

/// Each frame contains a fixed size header (6 bytes) followed by a variable
/// size body.
#[derive(Debug)]
pub struct FrameHeader {
    version: Version,
    opcode: Opcode,
    body_length: u32,
}

impl FrameHeader {
    pub fn new(version: Version, opcode: Opcode, body_length: u32) -> Self {
        Self {
            version,
            opcode,
            body_length,
        }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn body_length(&self) -> u32 {
        self.body_length
    }
}

impl Serializable for FrameHeader {
    /// 0         8        16        24        32        40        48
    /// +---------+---------+---------+---------+---------+---------+
    /// | version | opcode  |               length                  |
    /// +---------+---------+---------+---------+---------+---------+
    fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let mut buffer = Vec::new();

        buffer.push(self.version.to_byte()?);
        buffer.push(self.opcode.to_byte()?);
        buffer.extend_from_slice(&self.body_length.to_be_bytes());

        Ok(buffer)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        if bytes.len() < 6 {
            return Err(ProtocolError::NotEnoughBytes);
        }

        let version = Version::from_byte(bytes[0])?;
        let opcode = Opcode::from_byte(bytes[1])?;
        let body_length = u32::from_be_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]);

        Ok(Self {
            version,
            opcode,
            body_length,
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Opcode {
    Error = 0x00,
    Login = 0x01,
    LoginOk = 0x02,
    Tracks = 0x03,
    Alert = 0x04,
}

impl ByteSerializable for Opcode {
    fn from_byte(byte: u8) -> Result<Self, ProtocolError> {
        match byte {
            0x00 => Ok(Opcode::Error),
            0x01 => Ok(Opcode::Login),
            0x02 => Ok(Opcode::LoginOk),
            0x03 => Ok(Opcode::Tracks),
            0x04 => Ok(Opcode::Alert),
            _ => Err(ProtocolError::InvalidCode),
        }
    }

    fn to_byte(&self) -> Result<u8, ProtocolError> {
        Ok(*self as u8)
    }
}

/// The version is a single byte that indicates both the direction of the
/// message (request or response) and the version of the protocol in use.
#[derive(Debug, Copy, Clone)]
pub enum Version {
    RequestV1 = 0x01,
    ResponseV1 = 0x81,
}

impl ByteSerializable for Version {
    fn from_byte(byte: u8) -> Result<Self, ProtocolError> {
        match byte {
            0x01 => Ok(Version::RequestV1),
            0x81 => Ok(Version::ResponseV1),
            _ => Err(ProtocolError::InvalidCode),
        }
    }

    fn to_byte(&self) -> Result<u8, ProtocolError> {
        match self {
            Version::RequestV1 => Ok(0x01),
            Version::ResponseV1 => Ok(0x81),
        }
    }
}
