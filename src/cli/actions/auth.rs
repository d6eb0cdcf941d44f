use crate::routes::Route;
use std::fmt;

pub enum Command {
    Login { username: String, password: String },
    Register {
        email: String,
        username: String,
        password: String,
    },
    Verify { location: String },
    Logout,
}

impl Command {
    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            Self::Login { .. } | Self::Logout => Route::Landing,
            Self::Register { .. } => Route::Register,
            Self::Verify { .. } => Route::Verify,
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .finish_non_exhaustive(),
            Self::Register {
                email, username, ..
            } => f
                .debug_struct("Register")
                .field("email", email)
                .field("username", username)
                .finish_non_exhaustive(),
            Self::Verify { .. } => f.write_str("Verify"),
            Self::Logout => f.write_str("Logout"),
        }
    }
}
