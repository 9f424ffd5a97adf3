use serde::{Deserialize, Serialize};

/// Number of forecast days requested from the provider by default.
pub const DEFAULT_FORECAST_DAYS: u8 = 5;

/// What the session asks the provider for.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    /// Free-text city query, e.g. "London" or "Paris, France".
    pub city: String,
    pub days: u8,
}

impl ForecastRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into(), days: DEFAULT_FORECAST_DAYS }
    }

    pub fn with_days(mut self, days: u8) -> Self {
        self.days = days;
        self
    }
}

/// Unit system used when rendering temperatures and wind speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Imperial,
    Metric,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Imperial => "imperial",
            Units::Metric => "metric",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Imperial => "°F",
            Units::Metric => "°C",
        }
    }

    pub fn speed_suffix(&self) -> &'static str {
        match self {
            Units::Imperial => "mph",
            Units::Metric => "km/h",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One complete fetch: where, what now, and the days ahead.
///
/// Built once by a provider and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDocument {
    pub location: Location,
    pub current: CurrentConditions,
    /// Chronological, at most the number of days requested.
    pub days: Vec<DayForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    /// IANA timezone identifier, e.g. "Europe/London".
    pub tz_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub code: i32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub last_updated_epoch: i64,
    pub temp_c: f64,
    pub temp_f: f64,
    pub feels_like_c: f64,
    pub feels_like_f: f64,
    pub condition: Condition,
    pub humidity: u8,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_dir: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// Midnight UTC of the forecast date.
    pub date_epoch: i64,
    pub max_temp_c: f64,
    pub max_temp_f: f64,
    pub min_temp_c: f64,
    pub min_temp_f: f64,
    pub chance_of_rain: u8,
    pub chance_of_snow: u8,
    pub condition: Condition,
    /// Chronological, normally 24 entries.
    pub hours: Vec<HourForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourForecast {
    pub time_epoch: i64,
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub chance_of_rain: u8,
    pub chance_of_snow: u8,
}
