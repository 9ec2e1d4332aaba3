use serde::{Deserialize, Serialize};

/// Nutrition facts for a pet type as returned by the nutrition service.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct PetNutritionDto {
    #[serde(default)]
    pub pet_type: Option<String>,
    #[serde(default)]
    pub facts: Option<String>,
}
