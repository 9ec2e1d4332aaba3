use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::{insurance::PetInsuranceDto, nutrition::PetNutritionDto},
    server::{
        config::Config,
        data::{owner::OwnerRepository, pet::PetRepository},
        error::{lookup::LookupError, AppError},
        model::{
            context::RequestContext,
            pet::{CreatePetParams, Pet, PetDetails, PetType, UpdatePetParams},
        },
        remote::{insurance::InsuranceClient, nutrition::NutritionClient, RemoteLookup},
        service::enrichment::{EnrichmentDescriptor, EnrichmentOrchestrator},
    },
};

/// Primary lookup for pet details, backed by the database.
///
/// Pets are found by ID alone; the owner in the request path only labels the request.
pub struct PetDetailsLookup<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetDetailsLookup<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a> RemoteLookup for PetDetailsLookup<'a> {
    type Key = i32;
    type Value = PetDetails;

    async fn fetch(&self, _ctx: &RequestContext, pet_id: &i32) -> Result<PetDetails, LookupError> {
        let (pet, owner, pet_type) = PetRepository::new(self.db)
            .get_with_owner_and_type(*pet_id)
            .await
            .map_err(|e| LookupError::Unavailable(e.to_string()))?
            .ok_or_else(|| LookupError::NotFound(format!("Pet {}", pet_id)))?;

        Ok(PetDetails::from_entity(pet, owner, pet_type))
    }
}

/// Builds the pet details orchestrator from configuration.
///
/// Nutrition is declared before insurance, so a failing `Propagate` nutrition source
/// stops the request before insurance is looked up.
pub fn pet_enrichment(
    http_client: reqwest::Client,
    config: &Config,
) -> EnrichmentOrchestrator<PetDetails> {
    let nutrition = NutritionClient::new(
        http_client.clone(),
        &config.nutrition_service_url,
        config.lookup_timeout,
    );
    let insurance = InsuranceClient::new(
        http_client,
        &config.insurance_service_url,
        config.lookup_timeout,
    );

    EnrichmentOrchestrator::new(config.lookup_timeout)
        .with_fan_out(config.fan_out)
        .with_enrichment(EnrichmentDescriptor::new(
            "nutrition",
            config.nutrition_policy,
            nutrition,
            nutrition_key,
            merge_nutrition,
        ))
        .with_enrichment(EnrichmentDescriptor::new(
            "insurance",
            config.insurance_policy,
            insurance,
            insurance_key,
            merge_insurance,
        ))
}

fn nutrition_key(details: &PetDetails) -> Option<String> {
    details.pet_type.as_ref().map(|t| t.name.clone())
}

fn insurance_key(details: &PetDetails) -> Option<i32> {
    Some(details.id)
}

fn merge_nutrition(details: PetDetails, nutrition: Option<PetNutritionDto>) -> PetDetails {
    let Some(nutrition) = nutrition else {
        return details;
    };

    PetDetails {
        nutrition_facts: nutrition.facts.or(details.nutrition_facts),
        ..details
    }
}

fn merge_insurance(details: PetDetails, insurance: Option<PetInsuranceDto>) -> PetDetails {
    let Some(insurance) = insurance else {
        return details;
    };

    PetDetails {
        insurance_id: insurance.insurance_id.or(details.insurance_id),
        insurance_name: insurance.insurance_name.or(details.insurance_name),
        price: insurance.price.or(details.price),
        ..details
    }
}

pub struct PetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all pet types ordered by name
    pub async fn get_pet_types(&self) -> Result<Vec<PetType>, AppError> {
        let pet_types = PetRepository::new(self.db).get_pet_types().await?;

        Ok(pet_types.into_iter().map(PetType::from_entity).collect())
    }

    /// Creates a pet for an existing owner
    ///
    /// # Returns
    /// - `Ok(Pet)`: The created pet with its type
    /// - `Err(AppError::NotFound)`: Owner does not exist
    pub async fn create(&self, params: CreatePetParams) -> Result<Pet, AppError> {
        OwnerRepository::new(self.db)
            .get_by_id(params.owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Owner {} not found", params.owner_id)))?;

        let repo = PetRepository::new(self.db);
        let pet = repo.create(params).await?;

        self.load(pet.id).await
    }

    /// Replaces a pet's name, birth date, and type
    ///
    /// # Returns
    /// - `Ok(Pet)`: The updated pet
    /// - `Err(AppError::NotFound)`: Pet does not exist
    pub async fn update(&self, params: UpdatePetParams) -> Result<Pet, AppError> {
        let pet_id = params.id;
        PetRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pet {} not found", pet_id)))?;

        self.load(pet_id).await
    }

    /// Gets a pet's details merged with data from the enrichment sources
    ///
    /// # Arguments
    /// - `ctx`: Identifiers of the request being served
    /// - `enrichment`: Orchestrator holding the declared enrichment sources
    /// - `pet_id`: The pet to look up
    pub async fn get_details(
        &self,
        ctx: &RequestContext,
        enrichment: &EnrichmentOrchestrator<PetDetails>,
        pet_id: i32,
    ) -> Result<PetDetails, AppError> {
        let primary = PetDetailsLookup::new(self.db);

        Ok(enrichment.enrich(ctx, &primary, &pet_id).await?)
    }

    async fn load(&self, pet_id: i32) -> Result<Pet, AppError> {
        let (pet, _owner, pet_type) = PetRepository::new(self.db)
            .get_with_owner_and_type(pet_id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Pet {} vanished after write", pet_id)))?;

        Ok(Pet::from_entity(pet, pet_type))
    }
}
