//! Booking HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::application::services::booking::{BookingService, NewBooking};
use crate::application::services::transition::StatusTransitionEngine;
use crate::domain::{BookingQuery, BookingStatus, DomainError, RepositoryProvider, SortOrder};
use crate::interfaces::http::common::{domain_error, ApiResponse, CallerId, ValidatedJson};

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub booking_service: Arc<BookingService>,
    pub transition_engine: Arc<StatusTransitionEngine>,
}

type HandlerResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<T>>)>;

fn bad_request<T>(message: impl Into<String>) -> (StatusCode, Json<ApiResponse<T>>) {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    params(("X-Caller-Id" = Uuid, Header, description = "Authenticated caller id")),
    responses(
        (status = 200, description = "Booking created in Pending state", body = ApiResponse<BookingDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Chef not found"),
        (status = 409, description = "Day already committed")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    CallerId(diner_id): CallerId,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> HandlerResult<BookingDto> {
    // Day granularity is fixed here: only Y-M-D survives the parse
    let day = NaiveDate::parse_from_str(&request.day, "%Y-%m-%d")
        .map_err(|e| bad_request(format!("Invalid day '{}': {}", request.day, e)))?;

    let booking = state
        .booking_service
        .create_booking(NewBooking {
            chef_id: request.chef_id,
            diner_id,
            day,
            time: request.time,
            dishes: request.dishes,
            party_size: request.party_size,
            price: request.price,
            comment: request.comment,
        })
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{booking_id}/transition",
    tag = "Bookings",
    request_body = TransitionRequest,
    params(
        ("booking_id" = Uuid, Path, description = "Booking ID"),
        ("X-Caller-Id" = Uuid, Header, description = "Authenticated caller id")
    ),
    responses(
        (status = 200, description = "Updated booking", body = ApiResponse<BookingDto>),
        (status = 403, description = "Caller is not a party to the booking"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Day already committed to another booking"),
        (status = 422, description = "Illegal lifecycle transition")
    )
)]
pub async fn transition_booking(
    State(state): State<BookingAppState>,
    CallerId(acting_party): CallerId,
    Path(booking_id): Path<Uuid>,
    Json(request): Json<TransitionRequest>,
) -> HandlerResult<BookingDto> {
    let target = BookingStatus::parse(&request.target)
        .ok_or_else(|| bad_request(format!("Unknown status '{}'", request.target)))?;
    if target == BookingStatus::Pending {
        return Err(bad_request("Pending is not a valid transition target"));
    }

    let booking = state
        .transition_engine
        .transition(booking_id, target, acting_party)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_id}",
    tag = "Bookings",
    params(
        ("booking_id" = Uuid, Path, description = "Booking ID"),
        ("X-Caller-Id" = Uuid, Header, description = "Authenticated caller id")
    ),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingDto>),
        (status = 403, description = "Caller is not a party to the booking"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    CallerId(caller): CallerId,
    Path(booking_id): Path<Uuid>,
) -> HandlerResult<BookingDto> {
    let booking = state
        .repos
        .bookings()
        .find_by_id(booking_id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| {
            domain_error(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking_id.to_string(),
            })
        })?;

    if !booking.involves(caller) {
        return Err(domain_error(DomainError::Forbidden(format!(
            "party {} is neither the chef nor the diner of booking {}",
            caller, booking_id
        ))));
    }

    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    params(
        ListBookingsParams,
        ("X-Caller-Id" = Uuid, Header, description = "Authenticated caller id")
    ),
    responses(
        (status = 200, description = "Bookings with grouped counts", body = ApiResponse<BookingListResponse>),
        (status = 400, description = "Invalid query"),
        (status = 403, description = "Caller may only list their own bookings")
    )
)]
pub async fn list_bookings(
    State(state): State<BookingAppState>,
    CallerId(caller): CallerId,
    Query(params): Query<ListBookingsParams>,
) -> HandlerResult<BookingListResponse> {
    if params.owner_id != caller {
        return Err(domain_error(DomainError::Forbidden(
            "callers may only list their own bookings".to_string(),
        )));
    }

    let status = match &params.status {
        Some(s) => Some(
            BookingStatus::parse(s).ok_or_else(|| bad_request(format!("Unknown status '{}'", s)))?,
        ),
        None => None,
    };
    let order = match params.sort.as_deref() {
        None | Some("desc") => SortOrder::Descending,
        Some("asc") => SortOrder::Ascending,
        Some(other) => return Err(bad_request(format!("Unknown sort order '{}'", other))),
    };
    let query = BookingQuery { status, order };

    let bookings = match params.role.as_str() {
        "chef" => state.repos.bookings().list_for_chef(params.owner_id, query),
        "diner" => state.repos.bookings().list_for_diner(params.owner_id, query),
        other => return Err(bad_request(format!("Unknown role '{}'", other))),
    }
    .await
    .map_err(domain_error)?;

    let mut stats = StatusCounts::default();
    for b in &bookings {
        match b.status {
            BookingStatus::Pending => stats.pending += 1,
            BookingStatus::Accepted => stats.accepted += 1,
            BookingStatus::Rejected => stats.rejected += 1,
            BookingStatus::Completed => stats.completed += 1,
            BookingStatus::Cancelled => stats.cancelled += 1,
        }
    }

    let dtos: Vec<BookingDto> = bookings.into_iter().map(BookingDto::from).collect();
    Ok(Json(ApiResponse::success(BookingListResponse {
        total: dtos.len(),
        bookings: dtos,
        stats,
    })))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Booking, Chef};
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use rust_decimal::Decimal;
    use tower::Service;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn booking_with_status(
        chef_id: Uuid,
        diner_id: Uuid,
        d: u32,
        status: BookingStatus,
    ) -> Booking {
        let mut b = Booking::new(
            chef_id,
            diner_id,
            day(d),
            "19:00",
            vec!["Plov".to_string()],
            2,
            Decimal::new(9000, 2),
            None,
        );
        b.status = status;
        b
    }

    /// App with one diner holding a mixed-status booking history, plus an
    /// unrelated booking that must never leak into their listing.
    async fn seeded_app() -> (Router, Uuid) {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let chef = Chef::new("Aziza", vec![]);
        let chef_id = chef.id;
        repos.chefs().save(chef).await.unwrap();

        let diner_id = Uuid::new_v4();
        for (d, status) in [
            (1, BookingStatus::Pending),
            (2, BookingStatus::Pending),
            (3, BookingStatus::Accepted),
            (4, BookingStatus::Cancelled),
        ] {
            repos
                .bookings()
                .save(booking_with_status(chef_id, diner_id, d, status))
                .await
                .unwrap();
        }
        repos
            .bookings()
            .save(booking_with_status(
                chef_id,
                Uuid::new_v4(),
                5,
                BookingStatus::Pending,
            ))
            .await
            .unwrap();

        let state = BookingAppState {
            booking_service: Arc::new(BookingService::new(repos.clone())),
            transition_engine: Arc::new(StatusTransitionEngine::new(repos.clone())),
            repos,
        };
        let app = Router::new().route("/", get(list_bookings)).with_state(state);
        (app, diner_id)
    }

    async fn send(app: &mut Router, uri: &str, caller: Uuid) -> (StatusCode, serde_json::Value) {
        let req = Request::builder()
            .uri(uri)
            .header("X-Caller-Id", caller.to_string())
            .body(Body::empty())
            .unwrap();
        let resp = app.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn listing_reports_grouped_status_counts() {
        let (mut app, diner_id) = seeded_app().await;

        let (status, body) =
            send(&mut app, &format!("/?role=diner&owner_id={diner_id}"), diner_id).await;
        assert_eq!(status, StatusCode::OK);

        let data = &body["data"];
        assert_eq!(data["total"], 4);
        assert_eq!(data["stats"]["pending"], 2);
        assert_eq!(data["stats"]["accepted"], 1);
        assert_eq!(data["stats"]["cancelled"], 1);
        assert_eq!(data["stats"]["rejected"], 0);
        assert_eq!(data["stats"]["completed"], 0);
    }

    #[tokio::test]
    async fn listing_honors_status_filter_and_ascending_sort() {
        let (mut app, diner_id) = seeded_app().await;

        let (status, body) = send(
            &mut app,
            &format!("/?role=diner&owner_id={diner_id}&status=Pending&sort=asc"),
            diner_id,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let data = &body["data"];
        assert_eq!(data["total"], 2);
        let days: Vec<&str> = data["bookings"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["day"].as_str().unwrap())
            .collect();
        assert_eq!(days, vec!["2024-06-01", "2024-06-02"]);
    }

    #[tokio::test]
    async fn listing_someone_elses_bookings_is_forbidden() {
        let (mut app, diner_id) = seeded_app().await;

        let (status, _) = send(
            &mut app,
            &format!("/?role=diner&owner_id={diner_id}"),
            Uuid::new_v4(),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unknown_role_or_sort_is_a_bad_request() {
        let (mut app, diner_id) = seeded_app().await;

        let (status, _) = send(
            &mut app,
            &format!("/?role=waiter&owner_id={diner_id}"),
            diner_id,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &mut app,
            &format!("/?role=diner&owner_id={diner_id}&sort=sideways"),
            diner_id,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
