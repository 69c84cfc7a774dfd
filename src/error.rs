//! API error taxonomy and its HTTP mapping.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::github::GithubError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    /// Same wording for unknown identifier and wrong password, so callers
    /// cannot enumerate registered identifiers.
    #[error("incorrect identifier or password")]
    InvalidCredentials,

    #[error("invalid GitHub repository URL")]
    InvalidGithubUrl,

    #[error("not logged in")]
    Unauthenticated,

    /// Session resolved but its owning user is gone; the 401 response also
    /// clears the client cookie.
    #[error("not logged in")]
    StaleSession,

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("GitHub fetch failed")]
    Upstream(#[source] GithubError),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::Conflict(_)
            | Self::InvalidCredentials
            | Self::InvalidGithubUrl => StatusCode::BAD_REQUEST,
            Self::Unauthenticated | Self::StaleSession => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::Conflict(_) => "CONFLICT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidGithubUrl => "INVALID_GITHUB_URL",
            Self::Unauthenticated | Self::StaleSession => "UNAUTHENTICATED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Upstream(_) => "UPSTREAM",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<GithubError> for ApiError {
    fn from(e: GithubError) -> Self {
        match e {
            GithubError::InvalidUrl => ApiError::InvalidGithubUrl,
            other => ApiError::Upstream(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Upstream(_) | Self::Internal(_)) {
            tracing::error!(error = ?self, "request failed");
        }

        let clear_cookie = matches!(self, Self::StaleSession);
        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                // Display strings are fixed per variant; upstream and
                // internal details stay in the logs.
                message: self.to_string(),
            },
        };

        let mut response = (self.status_code(), Json(body)).into_response();
        if clear_cookie {
            response.headers_mut().append(
                header::SET_COOKIE,
                HeaderValue::from_static("token=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax"),
            );
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_are_fixed() {
        assert_eq!(
            ApiError::Validation("too short".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("taken".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidGithubUrl.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::StaleSession.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("no").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Upstream(GithubError::MissingDownloadUrl).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn auth_failures_share_status_and_message() {
        assert_eq!(
            ApiError::Unauthenticated.to_string(),
            ApiError::StaleSession.to_string()
        );
        assert_eq!(
            ApiError::Unauthenticated.error_code(),
            ApiError::StaleSession.error_code()
        );
    }

    #[test]
    fn stale_session_clears_cookie() {
        let response = ApiError::StaleSession.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("stale session must clear the token cookie")
            .to_str()
            .unwrap();
        assert!(set_cookie.starts_with("token=;"));
        assert!(set_cookie.contains("Max-Age=0"));
    }

    #[test]
    fn plain_unauthenticated_leaves_cookie_alone() {
        let response = ApiError::Unauthenticated.into_response();
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[test]
    fn github_parse_failure_maps_to_bad_request() {
        let err = ApiError::from(GithubError::InvalidUrl);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(GithubError::MissingDownloadUrl);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
