use async_trait::async_trait;
use std::time::Duration;

use crate::{
    model::nutrition::PetNutritionDto,
    server::{
        error::lookup::LookupError, model::context::RequestContext, remote::http::get_json,
        remote::RemoteLookup,
    },
};

/// Client for the nutrition service, keyed by pet type name.
#[derive(Clone)]
pub struct NutritionClient {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl NutritionClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl RemoteLookup for NutritionClient {
    type Key = String;
    type Value = Option<PetNutritionDto>;

    async fn fetch(
        &self,
        ctx: &RequestContext,
        pet_type: &String,
    ) -> Result<Option<PetNutritionDto>, LookupError> {
        let url = format!("{}/nutrition/{}", self.base_url, pet_type);
        tracing::debug!(request_id = %ctx.request_id, %url, "Fetching nutrition facts");

        get_json(&self.http_client, &url, self.timeout).await
    }
}
