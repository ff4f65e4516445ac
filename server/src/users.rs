/// A radar console account. Credentials are a fixed in-process list; there
/// is no persistence behind them.
pub struct User {
    pub username: &'static str,
    pub password: &'static str,
    pub role: &'static str,
}

const USERS: &[User] = &[
    User {
        username: "admin",
        password: "admin123",
        role: "admin",
    },
    User {
        username: "atc",
        password: "atc123",
        role: "controller",
    },
    User {
        username: "observer",
        password: "radar2024",
        role: "viewer",
    },
];

/// Checks a username/password pair against the account list and returns the
/// matching role.
pub fn authenticate(username: &str, password: &str) -> Option<&'static str> {
    USERS
        .iter()
        .find(|user| user.username == username && user.password == password)
        .map(|user| user.role)
}
