//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The forecast document model and the WeatherAPI.com provider that fills it
//! - Views that normalize a document into display rows (current, daily, hourly)
//! - Text formatting of those rows, with condition glyphs
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod symbol;
pub mod view;

pub use config::Config;
pub use error::WeatherError;
pub use model::{
    Condition, CurrentConditions, DayForecast, ForecastDocument, ForecastRequest, HourForecast,
    Location, Units,
};
pub use provider::{WeatherProvider, provider_from_config};
pub use symbol::symbol_for;
pub use view::{DisplayZone, current_view, daily_view, hourly_view};
