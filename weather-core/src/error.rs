use thiserror::Error;

/// Failures from fetching a forecast. The views themselves never fail.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City name must not be empty")]
    EmptyCity,

    #[error(
        "No WeatherAPI key configured.\n\
         Hint: run `weather configure` or set the WEATHERAPI_KEY environment variable."
    )]
    MissingApiKey,

    #[error("City not found or API unavailable: {0}")]
    Request(#[from] reqwest::Error),

    #[error("City not found or API unavailable (status {status}): {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("Failed to parse WeatherAPI forecast JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
