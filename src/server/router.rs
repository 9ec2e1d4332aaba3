use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        owner::{OwnerDto, OwnerRequestDto},
        pet::{PetDetailsDto, PetDto, PetRequestDto, PetTypeDto},
    },
    server::{
        controller::{
            owner::{self, create_owner, get_owner, get_owners, update_owner},
            pet::{self, create_pet, get_pet_details, get_pet_types, update_pet},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Pet Clinic Customers API"),
    paths(
        owner::create_owner,
        owner::get_owner,
        owner::get_owners,
        owner::update_owner,
        pet::get_pet_types,
        pet::create_pet,
        pet::update_pet,
        pet::get_pet_details,
    ),
    components(schemas(
        ErrorDto,
        OwnerDto,
        OwnerRequestDto,
        PetDetailsDto,
        PetDto,
        PetRequestDto,
        PetTypeDto,
    )),
    tags(
        (name = "owner", description = "Pet owners"),
        (name = "pet", description = "Pets and pet details"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/owners", get(get_owners).post(create_owner))
        .route("/owners/{owner_id}", get(get_owner).put(update_owner))
        .route("/owners/{owner_id}/pets", post(create_pet))
        .route(
            "/owners/{owner_id}/pets/{pet_id}",
            get(get_pet_details).put(update_pet),
        )
        .route("/petTypes", get(get_pet_types))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
