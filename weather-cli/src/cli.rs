use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{Password, PasswordDisplayMode, Select};
use tracing::debug;
use weather_core::{
    Config, ForecastRequest, Units,
    config::MAX_FORECAST_DAYS,
    provider_from_config,
    view::{DEFAULT_MAX_DAYS, DEFAULT_MAX_HOURS},
};

use crate::{
    render::{Settings, View, print_lines, render_view},
    session,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Unit system; overrides the configured one.
    #[arg(long, value_enum, global = true)]
    pub units: Option<UnitsArg>,

    /// Without a subcommand the interactive session starts.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and preferred units.
    Configure,

    /// Ask for a city, then browse its current, hourly and daily forecast.
    Interactive,

    /// Print one forecast view for a city and exit.
    Show {
        /// City name, e.g. "London" or "Paris, France".
        city: String,

        #[arg(long, value_enum, default_value_t = View::Current)]
        view: View,

        /// Days in the daily view; defaults to the configured forecast length.
        #[arg(long)]
        days: Option<usize>,

        /// Hours in the hourly view.
        #[arg(long, default_value_t = DEFAULT_MAX_HOURS)]
        hours: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitsArg {
    Imperial,
    Metric,
}

impl From<UnitsArg> for Units {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Imperial => Units::Imperial,
            UnitsArg::Metric => Units::Metric,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let units = self.units.map(Units::from).unwrap_or(config.units);
        debug!(%units, forecast_days = config.forecast_days(), "configuration loaded");

        match self.command {
            Some(Command::Configure) => configure(config),
            Some(Command::Show { city, view, days, hours }) => {
                let settings = settings(&config, units, days, hours);
                let provider = provider_from_config(&config)?;
                let request = ForecastRequest::new(city).with_days(settings.forecast_days);

                let doc = provider.fetch_forecast(&request).await?;
                print_lines(&render_view(&doc, view, &settings, Utc::now()));
                Ok(())
            }
            Some(Command::Interactive) | None => {
                let settings = settings(&config, units, None, DEFAULT_MAX_HOURS);
                let provider = provider_from_config(&config)?;
                session::run(provider.as_ref(), &settings).await
            }
        }
    }
}

/// An explicit `days` also widens the fetch so every titled day can be shown.
fn settings(config: &Config, units: Units, days: Option<usize>, hours: usize) -> Settings {
    let configured = config.forecast_days();
    let (forecast_days, max_days) = match days {
        Some(days) => {
            let wanted = u8::try_from(days).unwrap_or(u8::MAX).clamp(1, MAX_FORECAST_DAYS);
            (configured.max(wanted), usize::from(wanted))
        }
        None => (configured, DEFAULT_MAX_DAYS.min(usize::from(configured))),
    };

    Settings { units, forecast_days, max_days, max_hours: hours }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("WeatherAPI.com key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    let units = [Units::Imperial, Units::Metric];
    let cursor = units.iter().position(|u| *u == config.units).unwrap_or(0);
    let units = Select::new("Preferred units:", units.to_vec())
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read units")?;

    config.set_api_key(api_key.trim().to_string());
    config.units = units;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["weather"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn show_defaults_to_current_view() {
        let cli = Cli::try_parse_from(["weather", "show", "London"]).unwrap();
        match cli.command {
            Some(Command::Show { city, view, days, hours }) => {
                assert_eq!(city, "London");
                assert_eq!(view, View::Current);
                assert_eq!(days, None);
                assert_eq!(hours, 12);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = ["weather", "show", "Oslo", "--view", "hourly", "--units", "metric", "-vv"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.units, Some(UnitsArg::Metric));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_view_is_rejected() {
        assert!(Cli::try_parse_from(["weather", "show", "Oslo", "--view", "weekly"]).is_err());
    }

    #[test]
    fn daily_length_follows_config_unless_given() {
        let cfg = Config { forecast_days: 3, ..Config::default() };
        assert_eq!(settings(&cfg, Units::Imperial, None, 12).max_days, 3);
        assert_eq!(settings(&cfg, Units::Imperial, Some(2), 12).max_days, 2);

        let cfg = Config { forecast_days: 10, ..Config::default() };
        let s = settings(&cfg, Units::Metric, None, 6);
        assert_eq!(s.max_days, 5);
        assert_eq!(s.forecast_days, 10);
        assert_eq!(s.max_hours, 6);
    }

    #[test]
    fn explicit_days_widen_the_fetch() {
        let s = settings(&Config::default(), Units::Imperial, Some(7), 12);
        assert_eq!(s.forecast_days, 7);
        assert_eq!(s.max_days, 7);

        let args = ["weather", "show", "London", "--view", "daily", "--days", "7"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Some(Command::Show { city, days, hours, .. }) = cli.command else {
            panic!("expected show");
        };
        let s = settings(&Config::default(), Units::Imperial, days, hours);
        let request = ForecastRequest::new(city).with_days(s.forecast_days);
        assert!(usize::from(request.days) >= s.max_days);
    }

    #[test]
    fn explicit_days_are_clamped_to_provider_limit() {
        let s = settings(&Config::default(), Units::Imperial, Some(30), 12);
        assert_eq!(s.forecast_days, 14);
        assert_eq!(s.max_days, 14);

        let s = settings(&Config::default(), Units::Imperial, Some(0), 12);
        assert_eq!(s.max_days, 1);
        assert_eq!(s.forecast_days, 5);
    }

    #[test]
    fn explicit_days_never_shrink_the_configured_fetch() {
        let cfg = Config { forecast_days: 10, ..Config::default() };
        let s = settings(&cfg, Units::Imperial, Some(3), 12);
        assert_eq!(s.forecast_days, 10);
        assert_eq!(s.max_days, 3);
    }
}
