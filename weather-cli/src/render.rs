use chrono::{DateTime, Utc};
use clap::ValueEnum;
use weather_core::{
    ForecastDocument, Units, current_view, daily_view,
    format::{render_current, render_daily, render_hourly},
    hourly_view,
};

/// Which part of a forecast to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    Current,
    Hourly,
    Daily,
}

/// Rendering knobs shared by `show` and the interactive session.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub units: Units,
    /// Days requested from the provider.
    pub forecast_days: u8,
    pub max_days: usize,
    pub max_hours: usize,
}

pub fn render_view(
    doc: &ForecastDocument,
    view: View,
    settings: &Settings,
    now: DateTime<Utc>,
) -> Vec<String> {
    match view {
        View::Current => render_current(&current_view(doc), settings.units),
        View::Daily => {
            let rows = daily_view(doc, settings.max_days);
            render_daily(&doc.location, &rows, settings.max_days, settings.units)
        }
        View::Hourly => {
            let rows = hourly_view(doc, now, settings.max_hours);
            render_hourly(&doc.location, &rows, settings.units)
        }
    }
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
