use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error taxonomy. Every variant answers with a 4xx status and a stable
/// machine-readable kind; `Internal` is the single 5xx escape hatch.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("email already registered")]
    DuplicateEmail,

    #[error("incorrect email or password")]
    InvalidCredentials,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid token")]
    InvalidToken,

    #[error("token expired")]
    ExpiredToken,

    #[error("no user matches the token subject")]
    UnknownSubject,

    #[error("inactive user")]
    InactiveUser,

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::ExpiredToken => "EXPIRED_TOKEN",
            Self::UnknownSubject => "UNKNOWN_SUBJECT",
            Self::InactiveUser => "INACTIVE_USER",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::InvalidCredentials
            | Self::InvalidToken
            | Self::ExpiredToken
            | Self::UnknownSubject => StatusCode::UNAUTHORIZED,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::InactiveUser | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Bearer-credential failures carry a WWW-Authenticate challenge.
    fn challenges(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::InvalidToken | Self::ExpiredToken | Self::UnknownSubject
        )
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        Self::Internal(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            // The cause stays in the logs, not in the response body.
            Self::Internal(e) => {
                error!(error = %e, "internal error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let status = self.status();
        let body = Json(json!({ "kind": self.kind(), "message": message }));
        let mut response = (status, body).into_response();
        if self.challenges() {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        assert_eq!(ApiError::DuplicateEmail.kind(), "DUPLICATE_EMAIL");
        assert_eq!(ApiError::InvalidCredentials.kind(), "INVALID_CREDENTIALS");
        assert_eq!(ApiError::UserNotFound.kind(), "USER_NOT_FOUND");
        assert_eq!(ApiError::InvalidToken.kind(), "INVALID_TOKEN");
        assert_eq!(ApiError::ExpiredToken.kind(), "EXPIRED_TOKEN");
        assert_eq!(ApiError::UnknownSubject.kind(), "UNKNOWN_SUBJECT");
        assert_eq!(ApiError::InactiveUser.kind(), "INACTIVE_USER");
        assert_eq!(ApiError::InvalidInput("x".into()).kind(), "INVALID_INPUT");
    }

    #[test]
    fn statuses_match_taxonomy() {
        assert_eq!(ApiError::DuplicateEmail.status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::ExpiredToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InactiveUser.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn credential_failures_challenge_with_bearer() {
        let response = ApiError::ExpiredToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn internal_hides_the_cause() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
