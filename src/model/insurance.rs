use serde::{Deserialize, Serialize};

/// Pet insurance record as returned by the insurance service.
///
/// Every field is optional so that an empty object decodes as "nothing to merge".
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct PetInsuranceDto {
    #[serde(default)]
    pub pet_id: Option<i32>,
    #[serde(default)]
    pub insurance_id: Option<i32>,
    #[serde(default)]
    pub insurance_name: Option<String>,
    /// Decimal price; the insurance service serializes decimals as strings.
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub price: Option<f64>,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    match Option::<Decimal>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Decimal::Number(value)) => Ok(Some(value)),
        Some(Decimal::Text(text)) => text.trim().parse::<f64>().map(Some).map_err(D::Error::custom),
    }
}
