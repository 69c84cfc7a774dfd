use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, CredentialsRequest, MeResponse},
        extractors::{AuthSession, TOKEN_COOKIE},
        password::{hash_password, verify_password},
        repo_types::{Session, User},
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

fn session_cookie(session: &Session) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, session.token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

#[instrument(skip(state, jar, payload))]
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    if payload.password.chars().count() < 8 {
        warn!("signup password too short");
        return Err(ApiError::Validation(
            "Password must be at least 8 characters long".into(),
        ));
    }

    if User::find_by_identifier(&state.db, &payload.identifier)
        .await?
        .is_some()
    {
        warn!(identifier = %payload.identifier, "identifier already registered");
        return Err(ApiError::Conflict("identifier already in use".into()));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload.identifier, &hash).await?;
    let session = Session::create(&state.db, user.id).await?;

    info!(user_id = %user.id, "user signed up");
    Ok((
        jar.add(session_cookie(&session)),
        Json(AuthResponse {
            token: session.token.to_string(),
        }),
    ))
}

#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    let user = match User::find_by_identifier(&state.db, &payload.identifier).await? {
        Some(user) => user,
        None => {
            warn!(identifier = %payload.identifier, "login with unknown identifier");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(&payload.password, &user.password_hash) {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let session = Session::create(&state.db, user.id).await?;

    info!(user_id = %user.id, "user logged in");
    Ok((
        jar.add(session_cookie(&session)),
        Json(AuthResponse {
            token: session.token.to_string(),
        }),
    ))
}

#[instrument(skip(auth))]
pub async fn me(auth: AuthSession) -> Json<MeResponse> {
    Json(MeResponse {
        session: auth.session,
        user: auth.user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    #[test]
    fn session_cookie_is_http_only_lax() {
        let session = Session {
            user_id: Uuid::new_v4(),
            token: Uuid::new_v4(),
            created_at: OffsetDateTime::now_utc(),
        };

        let cookie = session_cookie(&session);
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), session.token.to_string());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn auth_response_exposes_token_text() {
        let token = Uuid::new_v4();
        let json = serde_json::to_string(&AuthResponse {
            token: token.to_string(),
        })
        .unwrap();
        assert!(json.contains(&token.to_string()));
    }
}
