use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::repo_types::{Session, User};
use crate::error::ApiError;
use crate::state::AppState;

/// Session cookie name, shared by the guard and the auth handlers.
pub const TOKEN_COOKIE: &str = "token";

/// Authenticated session resolved from the `token` cookie.
///
/// Missing cookie, malformed token and unknown token all map to the same
/// 401; only the logs distinguish them. A session whose owning user was
/// deleted out-of-band gets the cookie-clearing variant instead.
pub struct AuthSession {
    pub session: Session,
    pub user: User,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let raw = jar
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                debug!("no session token cookie");
                ApiError::Unauthenticated
            })?;

        let token = Uuid::parse_str(raw).map_err(|_| {
            debug!("session token is not a well-formed uuid");
            ApiError::Unauthenticated
        })?;

        let session = Session::find_by_token(&state.db, token)
            .await?
            .ok_or_else(|| {
                debug!("no session for presented token");
                ApiError::Unauthenticated
            })?;

        let user = match User::find_by_id(&state.db, session.user_id).await? {
            Some(user) => user,
            None => {
                warn!(user_id = %session.user_id, "session references deleted user");
                return Err(ApiError::StaleSession);
            }
        };

        Ok(AuthSession { session, user })
    }
}
