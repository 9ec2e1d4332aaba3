use async_trait::async_trait;
use std::time::Duration;

use crate::{
    model::insurance::PetInsuranceDto,
    server::{
        error::lookup::LookupError, model::context::RequestContext, remote::http::get_json,
        remote::RemoteLookup,
    },
};

/// Client for the insurance service, keyed by pet ID.
#[derive(Clone)]
pub struct InsuranceClient {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl InsuranceClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl RemoteLookup for InsuranceClient {
    type Key = i32;
    type Value = Option<PetInsuranceDto>;

    async fn fetch(
        &self,
        ctx: &RequestContext,
        pet_id: &i32,
    ) -> Result<Option<PetInsuranceDto>, LookupError> {
        let url = format!("{}/pet-insurances/{}", self.base_url, pet_id);
        tracing::debug!(request_id = %ctx.request_id, %url, "Fetching pet insurance");

        get_json(&self.http_client, &url, self.timeout).await
    }
}
