use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    WeatherError,
    config::DEFAULT_BASE_URL,
    model::{
        Condition, CurrentConditions, DayForecast, ForecastDocument, ForecastRequest,
        HourForecast, Location,
    },
};

use super::WeatherProvider;

/// Client for the WeatherAPI.com `forecast.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, base_url: DEFAULT_BASE_URL.to_string(), http: Client::new() }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[instrument(skip(self, request), fields(city = %request.city, days = request.days))]
    async fn fetch(&self, request: &ForecastRequest) -> Result<ForecastDocument, WeatherError> {
        let city = request.city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        let url = format!("{}/forecast.json", self.base_url);
        let days = request.days.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("days", days.as_str()),
                ("aqi", "yes"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "WeatherAPI forecast response");

        if !status.is_success() {
            return Err(WeatherError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaForecastResponse = serde_json::from_str(&body)?;
        let document = ForecastDocument::from(parsed);
        debug!(
            location = %document.location.name,
            days = document.days.len(),
            "forecast document built"
        );

        Ok(document)
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastDocument, WeatherError> {
        self.fetch(request).await
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    tz_id: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    code: i32,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    last_updated_epoch: i64,
    temp_c: f64,
    temp_f: f64,
    feelslike_c: f64,
    feelslike_f: f64,
    condition: WaCondition,
    humidity: u8,
    wind_mph: f64,
    wind_kph: f64,
    wind_dir: String,
}

#[derive(Debug, Deserialize)]
struct WaDay {
    maxtemp_c: f64,
    maxtemp_f: f64,
    mintemp_c: f64,
    mintemp_f: f64,
    #[serde(default)]
    daily_chance_of_rain: u8,
    #[serde(default)]
    daily_chance_of_snow: u8,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecastHour {
    time_epoch: i64,
    temp_c: f64,
    temp_f: f64,
    condition: WaCondition,
    #[serde(default)]
    chance_of_rain: u8,
    #[serde(default)]
    chance_of_snow: u8,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date_epoch: i64,
    day: WaDay,
    #[serde(default)]
    hour: Vec<WaForecastHour>,
}

#[derive(Debug, Default, Deserialize)]
struct WaForecast {
    #[serde(default)]
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    current: WaCurrent,
    #[serde(default)]
    forecast: WaForecast,
}

impl From<WaCondition> for Condition {
    fn from(c: WaCondition) -> Self {
        Condition { code: c.code, text: c.text }
    }
}

impl From<WaForecastHour> for HourForecast {
    fn from(h: WaForecastHour) -> Self {
        HourForecast {
            time_epoch: h.time_epoch,
            temp_c: h.temp_c,
            temp_f: h.temp_f,
            condition: h.condition.into(),
            chance_of_rain: h.chance_of_rain,
            chance_of_snow: h.chance_of_snow,
        }
    }
}

impl From<WaForecastDay> for DayForecast {
    fn from(d: WaForecastDay) -> Self {
        DayForecast {
            date_epoch: d.date_epoch,
            max_temp_c: d.day.maxtemp_c,
            max_temp_f: d.day.maxtemp_f,
            min_temp_c: d.day.mintemp_c,
            min_temp_f: d.day.mintemp_f,
            chance_of_rain: d.day.daily_chance_of_rain,
            chance_of_snow: d.day.daily_chance_of_snow,
            condition: d.day.condition.into(),
            hours: d.hour.into_iter().map(HourForecast::from).collect(),
        }
    }
}

impl From<WaForecastResponse> for ForecastDocument {
    fn from(r: WaForecastResponse) -> Self {
        ForecastDocument {
            location: Location {
                name: r.location.name,
                region: r.location.region,
                country: r.location.country,
                tz_id: r.location.tz_id,
            },
            current: CurrentConditions {
                last_updated_epoch: r.current.last_updated_epoch,
                temp_c: r.current.temp_c,
                temp_f: r.current.temp_f,
                feels_like_c: r.current.feelslike_c,
                feels_like_f: r.current.feelslike_f,
                condition: r.current.condition.into(),
                humidity: r.current.humidity,
                wind_mph: r.current.wind_mph,
                wind_kph: r.current.wind_kph,
                wind_dir: r.current.wind_dir,
            },
            days: r.forecast.forecastday.into_iter().map(DayForecast::from).collect(),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
