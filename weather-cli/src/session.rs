//! Interactive loop: ask for a city, show the current weather, then offer
//! hourly/daily details until the user picks another city or exits.

use chrono::Utc;
use inquire::{Confirm, InquireError, Select, Text};
use tracing::{info, warn};
use weather_core::{ForecastRequest, WeatherProvider};

use crate::render::{Settings, View, print_lines, render_view};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Hourly,
    Daily,
    NewCity,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] =
        [MenuChoice::Hourly, MenuChoice::Daily, MenuChoice::NewCity, MenuChoice::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Hourly => "Hourly forecast",
            MenuChoice::Daily => "Daily forecast",
            MenuChoice::NewCity => "Enter a new city",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub async fn run(provider: &dyn WeatherProvider, settings: &Settings) -> anyhow::Result<()> {
    loop {
        let Some(city) = prompt_city()? else {
            println!("Exiting program.");
            return Ok(());
        };

        let request = ForecastRequest::new(city).with_days(settings.forecast_days);
        let doc = match provider.fetch_forecast(&request).await {
            Ok(doc) => doc,
            Err(err) => {
                warn!(city = %request.city, %err, "forecast fetch failed");
                println!("Error: {err}");

                if !confirm("Do you want to try again?")? {
                    println!("Exiting program.");
                    return Ok(());
                }
                continue;
            }
        };
        info!(location = %doc.location.name, "forecast loaded");

        print_lines(&render_view(&doc, View::Current, settings, Utc::now()));

        loop {
            let choice = Select::new("Would you like to see more details?", MenuChoice::ALL.to_vec())
                .prompt();
            let Some(choice) = answered(choice)? else {
                println!("Exiting program");
                return Ok(());
            };

            match choice {
                MenuChoice::Hourly => {
                    print_lines(&render_view(&doc, View::Hourly, settings, Utc::now()));
                }
                MenuChoice::Daily => {
                    print_lines(&render_view(&doc, View::Daily, settings, Utc::now()));
                }
                MenuChoice::NewCity => break,
                MenuChoice::Exit => {
                    if confirm("Are you sure want exit program?")? {
                        println!("Exiting program");
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// `None` when the user cancels the prompt.
fn prompt_city() -> anyhow::Result<Option<String>> {
    loop {
        let Some(city) = answered(Text::new("Enter city name:").prompt())? else {
            return Ok(None);
        };

        let city = city.trim();
        if city.is_empty() {
            println!("Enter a valid city name");
            continue;
        }
        return Ok(Some(city.to_string()));
    }
}

/// A cancelled confirmation counts as "no".
fn confirm(message: &str) -> anyhow::Result<bool> {
    let answer = Confirm::new(message).with_help_message("y/n").prompt();
    Ok(answered(answer)?.unwrap_or(false))
}

/// Esc and Ctrl-C end the prompt without being an error.
fn answered<T>(result: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
