use serde::Serialize;

/// Access level attached to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    #[serde(rename = "Administrador")]
    Administrator,
    #[serde(rename = "Vendedor")]
    Seller,
}

/// An authenticated user as exposed to clients. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub username: &'static str,
    #[serde(rename = "nombre")]
    pub name: &'static str,
    #[serde(rename = "rol")]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Administrator
    }
}
