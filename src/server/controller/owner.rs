use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        owner::{OwnerDto, OwnerRequestDto},
    },
    server::{
        error::AppError,
        model::owner::{Owner, OwnerFields, UpdateOwnerParams},
        service::owner::OwnerService,
        state::AppState,
    },
};

/// Tag for grouping owner endpoints in OpenAPI documentation
pub static OWNER_TAG: &str = "owner";

/// Create a new owner.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Owner contact details
///
/// # Returns
/// - `201 Created` - The created owner, without pets
/// - `400 Bad Request` - A field is blank or the telephone is not 1 to 12 digits
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/owners",
    tag = OWNER_TAG,
    request_body = OwnerRequestDto,
    responses(
        (status = 201, description = "Successfully created owner", body = OwnerDto),
        (status = 400, description = "Invalid owner data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_owner(
    State(state): State<AppState>,
    Json(payload): Json<OwnerRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let fields = OwnerFields::from_dto(payload)?;

    let owner = OwnerService::new(&state.db).create(fields).await?;

    Ok((StatusCode::CREATED, Json(owner.into_dto())))
}

/// Get an owner with their pets.
///
/// # Returns
/// - `200 OK` - The owner
/// - `400 Bad Request` - Owner ID is less than 1
/// - `404 Not Found` - No owner with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/owners/{owner_id}",
    tag = OWNER_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved owner", body = OwnerDto),
        (status = 400, description = "Invalid owner ID", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = OwnerService::new(&state.db).get_by_id(owner_id).await?;

    Ok((StatusCode::OK, Json(owner.into_dto())))
}

/// Get all owners with their pets.
#[utoipa::path(
    get,
    path = "/owners",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved owners", body = Vec<OwnerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let owners = OwnerService::new(&state.db).get_all().await?;

    let dtos: Vec<OwnerDto> = owners.into_iter().map(Owner::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Replace an owner's contact details.
///
/// # Returns
/// - `204 No Content` - Owner updated
/// - `400 Bad Request` - Invalid owner data
/// - `404 Not Found` - No owner with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/owners/{owner_id}",
    tag = OWNER_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID")
    ),
    request_body = OwnerRequestDto,
    responses(
        (status = 204, description = "Successfully updated owner"),
        (status = 400, description = "Invalid owner data", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
    Json(payload): Json<OwnerRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateOwnerParams {
        id: owner_id,
        fields: OwnerFields::from_dto(payload)?,
    };

    OwnerService::new(&state.db).update(params).await?;

    Ok(StatusCode::NO_CONTENT)
}
