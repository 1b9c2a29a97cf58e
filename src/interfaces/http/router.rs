//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::services::{AvailabilityService, BookingService, StatusTransitionEngine};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::availability::{self, AvailabilityAppState};
use crate::interfaces::http::modules::bookings::{self, BookingAppState};
use crate::interfaces::http::modules::chefs::{self, ChefAppState};
use crate::interfaces::http::modules::health::{self, HealthState};

/// Unified state for all booking/chef/availability routes.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub booking_service: Arc<BookingService>,
    pub transition_engine: Arc<StatusTransitionEngine>,
    pub availability_service: Arc<AvailabilityService>,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<ApiState> for BookingAppState {
    fn from_ref(s: &ApiState) -> Self {
        BookingAppState {
            repos: Arc::clone(&s.repos),
            booking_service: Arc::clone(&s.booking_service),
            transition_engine: Arc::clone(&s.transition_engine),
        }
    }
}

impl FromRef<ApiState> for ChefAppState {
    fn from_ref(s: &ApiState) -> Self {
        ChefAppState {
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<ApiState> for AvailabilityAppState {
    fn from_ref(s: &ApiState) -> Self {
        AvailabilityAppState {
            availability_service: Arc::clone(&s.availability_service),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Bookings
        bookings::handlers::create_booking,
        bookings::handlers::transition_booking,
        bookings::handlers::get_booking,
        bookings::handlers::list_bookings,
        // Chefs
        chefs::handlers::create_chef,
        chefs::handlers::list_chefs,
        chefs::handlers::get_chef,
        // Availability
        availability::handlers::chef_availability,
        availability::handlers::available_chefs,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Health
            health::handlers::HealthResponse,
            health::handlers::ComponentHealth,
            // Bookings
            bookings::dto::CreateBookingRequest,
            bookings::dto::TransitionRequest,
            bookings::dto::BookingDto,
            bookings::dto::BookingListResponse,
            bookings::dto::StatusCounts,
            // Chefs
            chefs::dto::CreateChefRequest,
            chefs::dto::ChefDto,
            // Availability
            availability::dto::AvailabilityResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Bookings", description = "Booking lifecycle: creation, status transitions, listing"),
        (name = "Chefs", description = "Chef registry"),
        (name = "Availability", description = "Per-chef committed-day ledger queries"),
    ),
    info(
        title = "Chefbook API",
        version = "1.0.0",
        description = "REST API for chef booking and availability management",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    booking_service: Arc<BookingService>,
    transition_engine: Arc<StatusTransitionEngine>,
    availability_service: Arc<AvailabilityService>,
    db: DatabaseConnection,
) -> Router {
    let api_state = ApiState {
        repos,
        booking_service,
        transition_engine,
        availability_service,
    };

    let health_state = HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Booking routes
    let booking_routes = Router::new()
        .route("/", post(bookings::handlers::create_booking))
        .route("/", get(bookings::handlers::list_bookings))
        .route("/{booking_id}", get(bookings::handlers::get_booking))
        .route(
            "/{booking_id}/transition",
            post(bookings::handlers::transition_booking),
        )
        .with_state(api_state.clone());

    // Chef + availability routes. The static /available segment takes
    // priority over the {chef_id} capture.
    let chef_routes = Router::new()
        .route(
            "/",
            get(chefs::handlers::list_chefs).post(chefs::handlers::create_chef),
        )
        .route("/available", get(availability::handlers::available_chefs))
        .route("/{chef_id}", get(chefs::handlers::get_chef))
        .route(
            "/{chef_id}/availability",
            get(availability::handlers::chef_availability),
        )
        .with_state(api_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::handlers::health_check))
        .with_state(health_state)
        // Bookings
        .nest("/api/v1/bookings", booking_routes)
        // Chefs + availability
        .nest("/api/v1/chefs", chef_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
