//! Domain models for pet data operations.
//!
//! Defines pets, pet types, the enrichable `PetDetails` view, and parameter types for
//! pet create/update operations.

use chrono::NaiveDate;

use crate::model::pet::{PetDetailsDto, PetDto, PetRequestDto, PetTypeDto};

/// Kind of animal a pet is (cat, dog, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetType {
    pub id: i32,
    pub name: String,
}

impl PetType {
    /// Converts an entity model to a pet type domain model at the repository boundary.
    pub fn from_entity(entity: entity::pet_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> PetTypeDto {
        PetTypeDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Pet record belonging to an owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub owner_id: i32,
    pub pet_type: Option<PetType>,
}

impl Pet {
    /// Converts entity models to a pet domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The pet entity from the database
    /// - `pet_type` - The pet's type, if it has one
    pub fn from_entity(entity: entity::pet::Model, pet_type: Option<entity::pet_type::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            birth_date: entity.birth_date,
            owner_id: entity.owner_id,
            pet_type: pet_type.map(PetType::from_entity),
        }
    }

    pub fn into_dto(self) -> PetDto {
        PetDto {
            id: self.id,
            name: self.name,
            birth_date: self.birth_date,
            pet_type: self.pet_type.map(PetType::into_dto),
        }
    }
}

/// Pet view returned by the pet details endpoint.
///
/// The insurance and nutrition fields start unset and are only filled in by a
/// successful enrichment; a tolerated failure leaves them `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PetDetails {
    pub id: i32,
    pub name: String,
    /// Owner's full name.
    pub owner: String,
    pub birth_date: Option<NaiveDate>,
    pub pet_type: Option<PetType>,
    pub insurance_id: Option<i32>,
    pub insurance_name: Option<String>,
    pub price: Option<f64>,
    pub nutrition_facts: Option<String>,
}

impl PetDetails {
    /// Builds the unenriched view from the pet, its owner, and its type.
    pub fn from_entity(
        pet: entity::pet::Model,
        owner: entity::owner::Model,
        pet_type: Option<entity::pet_type::Model>,
    ) -> Self {
        Self {
            id: pet.id,
            name: pet.name,
            owner: format!("{} {}", owner.first_name, owner.last_name),
            birth_date: pet.birth_date,
            pet_type: pet_type.map(PetType::from_entity),
            insurance_id: None,
            insurance_name: None,
            price: None,
            nutrition_facts: None,
        }
    }

    pub fn into_dto(self) -> PetDetailsDto {
        PetDetailsDto {
            id: self.id,
            name: self.name,
            owner: self.owner,
            birth_date: self.birth_date,
            pet_type: self.pet_type.map(PetType::into_dto),
            insurance_id: self.insurance_id,
            insurance_name: self.insurance_name,
            price: self.price,
            nutrition_facts: self.nutrition_facts,
        }
    }
}

/// Parameters for creating a new pet.
#[derive(Debug, Clone)]
pub struct CreatePetParams {
    pub owner_id: i32,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    /// Requested type; an unknown id leaves the pet untyped.
    pub type_id: Option<i32>,
}

impl CreatePetParams {
    pub fn from_dto(owner_id: i32, dto: PetRequestDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            birth_date: dto.birth_date,
            type_id: dto.type_id,
        }
    }
}

/// Parameters for updating an existing pet. All fields are replaced.
#[derive(Debug, Clone)]
pub struct UpdatePetParams {
    pub id: i32,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub type_id: Option<i32>,
}

impl UpdatePetParams {
    pub fn from_dto(pet_id: i32, dto: PetRequestDto) -> Self {
        Self {
            id: pet_id,
            name: dto.name,
            birth_date: dto.birth_date,
            type_id: dto.type_id,
        }
    }
}
