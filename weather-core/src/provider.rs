use crate::{
    Config, ForecastDocument, ForecastRequest, WeatherError,
    provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of forecast documents.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastDocument, WeatherError>;
}

/// Construct the WeatherAPI.com provider from config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    provider_with_key(config, config.resolved_api_key())
}

fn provider_with_key(
    config: &Config,
    api_key: Option<String>,
) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let api_key = api_key.ok_or(WeatherError::MissingApiKey)?;

    let provider = WeatherApiProvider::new(api_key).with_base_url(config.base_url());
    Ok(Box::new(provider))
}
