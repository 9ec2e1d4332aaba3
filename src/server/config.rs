use std::{str::FromStr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    service::enrichment::{FailurePolicy, FanOut},
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8081";
const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_PURGE_CRON: &str = "0 0 8 * * *";
const DEFAULT_PURGE_PAGE_SIZE: u64 = 100;
const DEFAULT_PURGE_CEILING: u64 = 10_000;
const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_PURGE_PET_NAME_PREFIX: &str = "lastName";
const DEFAULT_PURGE_OWNER_FIRST_NAME_PREFIX: &str = "firstName";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub insurance_service_url: String,
    pub nutrition_service_url: String,
    pub lookup_timeout: Duration,
    pub insurance_policy: FailurePolicy,
    pub nutrition_policy: FailurePolicy,
    pub fan_out: FanOut,

    pub purge_cron: String,
    pub purge_page_size: u64,
    pub purge_ceiling: u64,
    pub store_timeout: Duration,
    pub purge_pet_name_prefix: String,
    pub purge_owner_first_name_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable source.
    ///
    /// # Arguments
    /// - `var` - Returns the value of a variable, or `None` if it is unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let vars = Vars(var);

        Ok(Self {
            database_url: vars.required("DATABASE_URL")?,
            bind_address: vars.or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),

            insurance_service_url: vars.required("INSURANCE_SERVICE_URL")?,
            nutrition_service_url: vars.required("NUTRITION_SERVICE_URL")?,
            lookup_timeout: Duration::from_millis(
                vars.parsed("LOOKUP_TIMEOUT_MS", DEFAULT_LOOKUP_TIMEOUT_MS)?,
            ),
            insurance_policy: vars.parsed("INSURANCE_POLICY", FailurePolicy::Tolerate)?,
            nutrition_policy: vars.parsed("NUTRITION_POLICY", FailurePolicy::Propagate)?,
            fan_out: vars.parsed("ENRICHMENT_FAN_OUT", FanOut::Sequential)?,

            purge_cron: vars.or("PURGE_CRON", DEFAULT_PURGE_CRON),
            purge_page_size: vars.positive("PURGE_PAGE_SIZE", DEFAULT_PURGE_PAGE_SIZE)?,
            purge_ceiling: vars.positive("PURGE_CEILING", DEFAULT_PURGE_CEILING)?,
            store_timeout: Duration::from_millis(
                vars.parsed("STORE_TIMEOUT_MS", DEFAULT_STORE_TIMEOUT_MS)?,
            ),
            purge_pet_name_prefix: vars.or("PURGE_PET_NAME_PREFIX", DEFAULT_PURGE_PET_NAME_PREFIX),
            purge_owner_first_name_prefix: vars.or(
                "PURGE_OWNER_FIRST_NAME_PREFIX",
                DEFAULT_PURGE_OWNER_FIRST_NAME_PREFIX,
            ),
        })
    }
}

struct Vars<F>(F);

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    fn required(&self, name: &str) -> Result<String, ConfigError> {
        (self.0)(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn or(&self, name: &str, default: &str) -> String {
        (self.0)(name).unwrap_or_else(|| default.to_string())
    }

    fn parsed<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match (self.0)(name) {
            None => Ok(default),
            Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
                value,
            }),
        }
    }

    fn positive(&self, name: &str, default: u64) -> Result<u64, ConfigError> {
        let value = self.parsed(name, default)?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(value)
    }
}
