use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PetTypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetRequestDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub type_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetDto {
    pub id: i32,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetTypeDto>,
}

/// Pet with owner name and any enrichment that succeeded.
///
/// Enrichment fields are omitted from the JSON body when unset.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetDetailsDto {
    pub id: i32,
    pub name: String,
    pub owner: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetTypeDto>,
    #[serde(rename = "insurance_id", skip_serializing_if = "Option::is_none", default)]
    pub insurance_id: Option<i32>,
    #[serde(rename = "insurance_name", skip_serializing_if = "Option::is_none", default)]
    pub insurance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nutrition_facts: Option<String>,
}
