//! Login against the fixed demo allow-list.
//!
//! There is no hashing and no real token: a successful login hands back the
//! same placeholder token every time.

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::domain::{Role, User};

/// Placeholder token returned on every successful login.
pub const DEMO_TOKEN: &str = "demo-token-123";

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Credenciales inválidas")]
    InvalidCredentials,
}

struct Account {
    password: &'static str,
    user: User,
}

const ACCOUNTS: [Account; 2] = [
    Account {
        password: "admin123",
        user: User { id: 1, username: "admin", name: "Administrador", role: Role::Administrator },
    },
    Account {
        password: "vendedor123",
        user: User { id: 2, username: "vendedor", name: "Vendedor Juan", role: Role::Seller },
    },
];

/// A successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: &'static str,
}

#[instrument(skip(password))]
pub fn authenticate(username: &str, password: &str) -> Result<Session, AuthError> {
    let account = ACCOUNTS
        .iter()
        .find(|account| account.user.username == username && account.password == password);

    match account {
        Some(account) => {
            info!(role = ?account.user.role, "Login succeeded");
            Ok(Session { user: account.user.clone(), token: DEMO_TOKEN })
        }
        None => {
            warn!("Login failed");
            Err(AuthError::InvalidCredentials)
        }
    }
}
