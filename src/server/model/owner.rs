//! Domain models for owner data operations.

use crate::{
    model::owner::{OwnerDto, OwnerRequestDto},
    server::{error::AppError, model::pet::Pet},
};

/// Pet owner with contact details and pets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Converts an entity model and already-converted pets at the repository boundary.
    pub fn from_entity(entity: entity::owner::Model, pets: Vec<Pet>) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            address: entity.address,
            city: entity.city,
            telephone: entity.telephone,
            pets,
        }
    }

    pub fn into_dto(self) -> OwnerDto {
        OwnerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            city: self.city,
            telephone: self.telephone,
            pets: self.pets.into_iter().map(Pet::into_dto).collect(),
        }
    }
}

/// Contact fields shared by owner create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerFields {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl OwnerFields {
    /// Validates a request body and converts it to owner fields.
    ///
    /// All fields are required; the telephone must be 1 to 12 digits.
    ///
    /// # Returns
    /// - `Ok(OwnerFields)` - Valid fields
    /// - `Err(AppError::BadRequest)` - A field is blank or the telephone is malformed
    pub fn from_dto(dto: OwnerRequestDto) -> Result<Self, AppError> {
        let fields = [
            ("firstName", &dto.first_name),
            ("lastName", &dto.last_name),
            ("address", &dto.address),
            ("city", &dto.city),
            ("telephone", &dto.telephone),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AppError::BadRequest(format!("{} must not be blank", name)));
        }

        if dto.telephone.len() > 12 || !dto.telephone.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::BadRequest(
                "telephone must be at most 12 digits".to_string(),
            ));
        }

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            address: dto.address,
            city: dto.city,
            telephone: dto.telephone,
        })
    }
}

/// Parameters for updating an existing owner. All contact fields are replaced.
#[derive(Debug, Clone)]
pub struct UpdateOwnerParams {
    pub id: i32,
    pub fields: OwnerFields,
}
