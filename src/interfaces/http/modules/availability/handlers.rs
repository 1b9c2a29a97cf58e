//! Availability HTTP handlers
//!
//! Read-only views over the per-chef ledgers: range checks for a single
//! chef and the "who is free" search across all chefs.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::application::services::AvailabilityService;
use crate::interfaces::http::common::{domain_error, ApiResponse};

use super::dto::*;
use crate::interfaces::http::modules::chefs::dto::ChefDto;

/// Application state for availability handlers.
#[derive(Clone)]
pub struct AvailabilityAppState {
    pub availability_service: Arc<AvailabilityService>,
}

type HandlerResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<T>>)>;

fn bad_request<T>(message: impl Into<String>) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(message.into())),
    )
}

fn parse_day<T>(field: &str, raw: &str) -> Result<NaiveDate, (StatusCode, Json<ApiResponse<T>>)> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| bad_request(format!("{field} must be a date in YYYY-MM-DD format")))
}

#[utoipa::path(
    get,
    path = "/api/v1/chefs/{chef_id}/availability",
    tag = "Availability",
    params(
        ("chef_id" = Uuid, Path, description = "Chef ID"),
        AvailabilityQuery
    ),
    responses(
        (status = 200, description = "Whether the chef has an open day in the range", body = ApiResponse<AvailabilityResponse>),
        (status = 400, description = "Malformed or inverted range"),
        (status = 404, description = "Unknown chef")
    )
)]
pub async fn chef_availability(
    State(state): State<AvailabilityAppState>,
    Path(chef_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> HandlerResult<AvailabilityResponse> {
    let start = parse_day("start", &query.start)?;
    let end = parse_day("end", &query.end)?;

    let available = state
        .availability_service
        .has_open_day(chef_id, start, end)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(AvailabilityResponse {
        chef_id,
        start: start.to_string(),
        end: end.to_string(),
        available,
    })))
}

#[utoipa::path(
    get,
    path = "/api/v1/chefs/available",
    tag = "Availability",
    params(AvailableChefsQuery),
    responses(
        (status = 200, description = "Chefs with at least one open day", body = ApiResponse<Vec<ChefDto>>),
        (status = 400, description = "Malformed query")
    )
)]
pub async fn available_chefs(
    State(state): State<AvailabilityAppState>,
    Query(query): Query<AvailableChefsQuery>,
) -> HandlerResult<Vec<ChefDto>> {
    let chefs = match (&query.date, &query.start, &query.end) {
        (Some(date), None, None) => {
            let day = parse_day("date", date)?;
            state
                .availability_service
                .chefs_available_on(day)
                .await
                .map_err(domain_error)?
        }
        (None, Some(start), Some(end)) => {
            let start = parse_day("start", start)?;
            let end = parse_day("end", end)?;
            state
                .availability_service
                .chefs_available_in_range(start, end)
                .await
                .map_err(domain_error)?
        }
        _ => {
            return Err(bad_request(
                "provide either date, or both start and end".to_string(),
            ))
        }
    };

    Ok(Json(ApiResponse::success(
        chefs.into_iter().map(ChefDto::from).collect(),
    )))
}
