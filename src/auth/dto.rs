use serde::{Deserialize, Serialize};

use crate::auth::repo_types::User;

fn default_active() -> bool {
    true
}

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Form body for the token endpoint. `username` carries the email, matching
/// the OAuth2 password-grant field names.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Request body for a password reset.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
}

/// Bearer token returned by a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Public part of the user returned to clients.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub is_active: bool,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            firstname: u.firstname,
            lastname: u.lastname,
            email: u.email,
            is_active: u.is_active,
        }
    }
}
