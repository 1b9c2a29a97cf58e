//! Shared HTTP surface types

pub mod caller;
pub mod validated_json;

pub use caller::CallerId;
pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response wrapper
///
/// Every REST endpoint returns data in this envelope.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload; `null` on failure
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Map a domain error to its HTTP representation.
///
/// Conflicts are an expected business outcome (409), not a server fault.
/// `NotOwner` means the ledger and the store disagree; it is escalated in
/// the logs before being reported as an internal error.
pub fn domain_error<T>(err: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    let status = match &err {
        DomainError::Validation { .. } | DomainError::InvalidRange { .. } => {
            StatusCode::BAD_REQUEST
        }
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Conflict { .. } => StatusCode::CONFLICT,
        DomainError::InvalidTransition { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::NotOwner { .. } => {
            error!(error = %err, "Ledger ownership mismatch surfaced to HTTP");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn conflict_maps_to_409() {
        let (status, _) = domain_error::<()>(DomainError::Conflict {
            day: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            held_by: Uuid::new_v4(),
        });
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn invalid_transition_maps_to_422() {
        let (status, _) = domain_error::<()>(DomainError::InvalidTransition {
            from: "Completed".into(),
            to: "Cancelled".into(),
        });
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn not_owner_is_internal() {
        let (status, _) = domain_error::<()>(DomainError::NotOwner {
            day: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            caller: Uuid::new_v4(),
            owner: Uuid::new_v4(),
        });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
