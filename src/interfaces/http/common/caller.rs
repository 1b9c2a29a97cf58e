//! Authenticated caller extractor
//!
//! Identity is handled by an upstream gateway; by the time a request reaches
//! this service the caller is authenticated and their id travels in the
//! `X-Caller-Id` header. This core never verifies credentials, it only
//! compares ids.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use super::ApiResponse;

pub const CALLER_ID_HEADER: &str = "x-caller-id";

/// The authenticated caller's id, as asserted by the auth gateway.
#[derive(Debug, Clone, Copy)]
pub struct CallerId(pub Uuid);

pub enum CallerIdRejection {
    Missing,
    Malformed,
}

impl IntoResponse for CallerIdRejection {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Missing => "Missing X-Caller-Id header",
            Self::Malformed => "X-Caller-Id is not a valid UUID",
        };
        (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error(message)),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = CallerIdRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(CALLER_ID_HEADER)
            .ok_or(CallerIdRejection::Missing)?;
        let id = value
            .to_str()
            .ok()
            .and_then(|s| Uuid::parse_str(s).ok())
            .ok_or(CallerIdRejection::Malformed)?;
        Ok(CallerId(id))
    }
}

// ── Tests ──────────────────────────────────────────────────────
