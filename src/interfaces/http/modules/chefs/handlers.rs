//! Chef HTTP handlers
//!
//! Minimal registry: enough to resolve a provider and render search results.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::domain::{Chef, DomainError, RepositoryProvider};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for chef handlers.
#[derive(Clone)]
pub struct ChefAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

type HandlerResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<T>>)>;

#[utoipa::path(
    post,
    path = "/api/v1/chefs",
    tag = "Chefs",
    request_body = CreateChefRequest,
    responses(
        (status = 200, description = "Registered chef", body = ApiResponse<ChefDto>),
        (status = 422, description = "Invalid request")
    )
)]
pub async fn create_chef(
    State(state): State<ChefAppState>,
    ValidatedJson(request): ValidatedJson<CreateChefRequest>,
) -> HandlerResult<ChefDto> {
    let chef = Chef::new(request.display_name, request.specialties);
    state
        .repos
        .chefs()
        .save(chef.clone())
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(chef.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/chefs",
    tag = "Chefs",
    responses(
        (status = 200, description = "All registered chefs", body = ApiResponse<Vec<ChefDto>>)
    )
)]
pub async fn list_chefs(State(state): State<ChefAppState>) -> HandlerResult<Vec<ChefDto>> {
    let chefs = state.repos.chefs().find_all().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        chefs.into_iter().map(ChefDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/chefs/{chef_id}",
    tag = "Chefs",
    params(("chef_id" = Uuid, Path, description = "Chef ID")),
    responses(
        (status = 200, description = "Chef details", body = ApiResponse<ChefDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_chef(
    State(state): State<ChefAppState>,
    Path(chef_id): Path<Uuid>,
) -> HandlerResult<ChefDto> {
    let chef = state
        .repos
        .chefs()
        .find_by_id(chef_id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| {
            domain_error(DomainError::NotFound {
                entity: "Chef",
                field: "id",
                value: chef_id.to_string(),
            })
        })?;
    Ok(Json(ApiResponse::success(chef.into())))
}
