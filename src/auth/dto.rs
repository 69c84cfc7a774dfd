use serde::{Deserialize, Serialize};

use crate::auth::repo_types::{Session, User};

/// Request body for signup and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub identifier: String,
    pub password: String,
}

/// Response after signup or login; the token also travels in the cookie so
/// non-browser clients can pick it up from the body.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Response for GET /me.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub session: Session,
    pub user: User,
}
