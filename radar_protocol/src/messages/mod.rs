pub mod alert;
pub mod auth;
pub mod error;
pub mod tracks;
