use std::io::Cursor;

use crate::{errors::ProtocolError, types::ProtocolString, Serializable};

/// Sent by the client immediately after connecting. The server answers with
/// either a `LOGIN_OK` or an `ERROR` frame and drops the connection on
/// failure.
///
/// ### Fields
///
/// - `username` - The account name to authenticate as.
/// - `password` - The account password, in the clear (the credential store
///   holds demo accounts only).
#[derive(Debug, PartialEq, Default)]
pub struct Login {
    pub username: String,
    pub password: String,
}

impl Login {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl Serializable for Login {
    fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.username.to_string_bytes()?);
        bytes.extend_from_slice(&self.password.to_string_bytes()?);
        Ok(bytes)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError>
    where
        Self: Sized,
    {
        let mut cursor = Cursor::new(bytes);
        let username = String::from_string_bytes(&mut cursor)?;
        let password = String::from_string_bytes(&mut cursor)?;
        Ok(Login { username, password })
    }
}

/// Sent by the server to indicate the login succeeded.
///
/// ### Fields
///
/// - `role` - The role attached to the authenticated account.
#[derive(Debug, PartialEq, Default)]
pub struct LoginOk {
    pub role: String,
}

impl Serializable for LoginOk {
    fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.role.to_string_bytes()?);
        Ok(bytes)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError>
    where
        Self: Sized,
    {
        let mut cursor = Cursor::new(bytes);
        let role = String::from_string_bytes(&mut cursor)?;
        Ok(LoginOk { role })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_round_trip() {
        let login = Login::new("operator", "radar");
        let bytes = login.to_bytes().unwrap();

        let decoded = Login::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, login);
    }
}
