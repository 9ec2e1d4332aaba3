use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        pet::{PetDetailsDto, PetDto, PetRequestDto, PetTypeDto},
    },
    server::{
        error::AppError,
        model::{
            context::RequestContext,
            pet::{CreatePetParams, PetType, UpdatePetParams},
        },
        service::pet::PetService,
        state::AppState,
    },
};

/// Tag for grouping pet endpoints in OpenAPI documentation
pub static PET_TAG: &str = "pet";

/// Get all pet types.
#[utoipa::path(
    get,
    path = "/petTypes",
    tag = PET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved pet types", body = Vec<PetTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pet_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pet_types = PetService::new(&state.db).get_pet_types().await?;

    let dtos: Vec<PetTypeDto> = pet_types.into_iter().map(PetType::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a pet for an owner.
///
/// A type ID that does not reference an existing pet type leaves the pet untyped.
///
/// # Returns
/// - `201 Created` - The created pet
/// - `404 Not Found` - No owner with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/owners/{owner_id}/pets",
    tag = PET_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID")
    ),
    request_body = PetRequestDto,
    responses(
        (status = 201, description = "Successfully created pet", body = PetDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
    Json(payload): Json<PetRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePetParams::from_dto(owner_id, payload);

    let pet = PetService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(pet.into_dto())))
}

/// Replace a pet's name, birth date, and type.
///
/// # Returns
/// - `204 No Content` - Pet updated
/// - `404 Not Found` - No pet with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/owners/{owner_id}/pets/{pet_id}",
    tag = PET_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID"),
        ("pet_id" = i32, Path, description = "Pet ID")
    ),
    request_body = PetRequestDto,
    responses(
        (status = 204, description = "Successfully updated pet"),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pet(
    State(state): State<AppState>,
    Path((_owner_id, pet_id)): Path<(i32, i32)>,
    Json(payload): Json<PetRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdatePetParams::from_dto(pet_id, payload);

    PetService::new(&state.db).update(params).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a pet's details with insurance and nutrition data.
///
/// Enrichment fields whose source failed under the `tolerate` policy are omitted from
/// the body. A failing `propagate` source fails the whole request.
///
/// # Arguments
/// - `state` - Application state containing the database connection and orchestrator
/// - `owner_id` - Owner named in the path, recorded on the request context
/// - `pet_id` - Pet to look up
///
/// # Returns
/// - `200 OK` - The enriched pet details
/// - `404 Not Found` - No pet with this ID
/// - `502 Bad Gateway` - An enrichment source with the `propagate` policy failed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/owners/{owner_id}/pets/{pet_id}",
    tag = PET_TAG,
    params(
        ("owner_id" = i32, Path, description = "Owner ID"),
        ("pet_id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved pet details", body = PetDetailsDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 502, description = "Enrichment source failed", body = ErrorDto)
    ),
)]
pub async fn get_pet_details(
    State(state): State<AppState>,
    Path((owner_id, pet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = RequestContext::new().with_owner(owner_id).with_pet(pet_id);

    let details = PetService::new(&state.db)
        .get_details(&ctx, &state.pet_enrichment, pet_id)
        .await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}
