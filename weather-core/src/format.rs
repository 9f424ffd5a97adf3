//! Text rendering of view rows.
//!
//! Each `render_*` function returns one `String` per output line, banners
//! included; the caller decides where the lines go.

use crate::{
    model::{Location, Units},
    symbol::symbol_for,
    view::{CurrentViewRow, DayViewRow, HourViewRow},
};

pub const SEPARATOR: &str = "------------------------------------------";
const CURRENT_FOOTER: &str = "-----------------------------------------";

const DAY_LABEL: &str = "%a %m/%d";
const HOUR_LABEL: &str = "%a %m/%d %-I %p";

pub fn render_current(row: &CurrentViewRow<'_>, units: Units) -> Vec<String> {
    let location = row.location;
    let current = row.current;

    let (temp, feels_like, wind) = match units {
        Units::Imperial => (current.temp_f, current.feels_like_f, current.wind_mph),
        Units::Metric => (current.temp_c, current.feels_like_c, current.wind_kph),
    };
    let deg = units.temperature_suffix();

    vec![
        SEPARATOR.to_string(),
        format!("{}, {}, {}", location.name, location.region, location.country),
        SEPARATOR.to_string(),
        format!("{} {}", symbol_for(current.condition.code), current.condition.text),
        format!("Temp: {temp:.0}{deg} (Feels like {feels_like:.0}{deg})"),
        format!(
            "Humidity: {}% | Wind: {wind:.0} {} {}",
            current.humidity,
            units.speed_suffix(),
            current.wind_dir
        ),
        CURRENT_FOOTER.to_string(),
    ]
}

pub fn day_line(row: &DayViewRow<'_>, units: Units) -> String {
    let day = row.day;
    let (high, low) = match units {
        Units::Imperial => (day.max_temp_f, day.min_temp_f),
        Units::Metric => (day.max_temp_c, day.min_temp_c),
    };

    format!(
        "{}: {} {}, High: {high:.0}{}, Low: {low:.0}°, Chance of Rain: {}%",
        row.date.format(DAY_LABEL),
        symbol_for(day.condition.code),
        day.condition.text,
        units.temperature_suffix(),
        day.chance_of_rain,
    )
}

/// `days` is the length the user asked for, shown in the title.
pub fn render_daily(
    location: &Location,
    rows: &[DayViewRow<'_>],
    days: usize,
    units: Units,
) -> Vec<String> {
    let mut lines = vec![
        SEPARATOR.to_string(),
        format!("{days} Day Forecast for {}", location.name),
        SEPARATOR.to_string(),
    ];
    lines.extend(rows.iter().map(|row| day_line(row, units)));
    lines.push(SEPARATOR.to_string());
    lines
}

pub fn hour_line(row: &HourViewRow<'_>, units: Units) -> String {
    let hour = row.hour;
    let temp = match units {
        Units::Imperial => hour.temp_f,
        Units::Metric => hour.temp_c,
    };

    format!(
        "{}: {} {}, {temp:.0}{}, Chance of Rain: {}%",
        row.time.format(HOUR_LABEL),
        symbol_for(hour.condition.code),
        hour.condition.text,
        units.temperature_suffix(),
        hour.chance_of_rain,
    )
}

pub fn render_hourly(location: &Location, rows: &[HourViewRow<'_>], units: Units) -> Vec<String> {
    let mut lines = vec![
        SEPARATOR.to_string(),
        format!("Hourly Forecast for {}", location.name),
        SEPARATOR.to_string(),
    ];
    lines.extend(rows.iter().map(|row| hour_line(row, units)));
    lines.push(SEPARATOR.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{
        current_view, daily_view, hourly_view,
        tests::{base_epoch, document},
    };
    use chrono::DateTime;

    #[test]
    fn current_block_imperial() {
        let doc = document("Europe/London", 1);
        let lines = render_current(&current_view(&doc), Units::Imperial);

        assert_eq!(
            lines,
            vec![
                SEPARATOR,
                "London, City of London, Greater London, United Kingdom",
                SEPARATOR,
                "☀️ Sunny",
                "Temp: 42°F (Feels like 36°F)",
                "Humidity: 75% | Wind: 8 mph SW",
                "-----------------------------------------",
            ]
        );
    }

    #[test]
    fn current_block_metric() {
        let doc = document("Europe/London", 1);
        let lines = render_current(&current_view(&doc), Units::Metric);

        assert_eq!(lines[4], "Temp: 5°C (Feels like 2°C)");
        assert_eq!(lines[5], "Humidity: 75% | Wind: 13 km/h SW");
    }

    #[test]
    fn separators_are_fixed_width() {
        assert_eq!(SEPARATOR.len(), 42);
        assert_eq!(CURRENT_FOOTER.len(), 41);
    }

    #[test]
    fn unmapped_code_leaves_glyph_blank() {
        let mut doc = document("Europe/London", 0);
        doc.current.condition.code = 4242;
        let lines = render_current(&current_view(&doc), Units::Imperial);
        assert_eq!(lines[3], " Sunny");
    }

    #[test]
    fn daily_block() {
        let doc = document("Europe/London", 2);
        let rows = daily_view(&doc, 5);
        let lines = render_daily(&doc.location, &rows, 5, Units::Imperial);

        assert_eq!(
            lines,
            vec![
                SEPARATOR,
                "5 Day Forecast for London",
                SEPARATOR,
                "Mon 01/15: 🌧️ Light rain, High: 47°F, Low: 35°, Chance of Rain: 80%",
                "Tue 01/16: 🌧️ Light rain, High: 47°F, Low: 35°, Chance of Rain: 80%",
                SEPARATOR,
            ]
        );
    }

    #[test]
    fn daily_line_metric() {
        let doc = document("Europe/London", 1);
        let rows = daily_view(&doc, 1);
        assert_eq!(
            day_line(&rows[0], Units::Metric),
            "Mon 01/15: 🌧️ Light rain, High: 8°C, Low: 2°, Chance of Rain: 80%"
        );
    }

    #[test]
    fn hourly_block() {
        let doc = document("Europe/London", 2);
        let now = DateTime::from_timestamp(base_epoch() + 20 * 3600, 0).unwrap();
        let rows = hourly_view(&doc, now, 4);
        let lines = render_hourly(&doc.location, &rows, Units::Imperial);

        assert_eq!(
            lines,
            vec![
                SEPARATOR,
                "Hourly Forecast for London",
                SEPARATOR,
                "Mon 01/15 9 PM: ⛅ Partly cloudy, 40°F, Chance of Rain: 20%",
                "Mon 01/15 10 PM: ⛅ Partly cloudy, 40°F, Chance of Rain: 20%",
                "Mon 01/15 11 PM: ⛅ Partly cloudy, 40°F, Chance of Rain: 20%",
                "Tue 01/16 12 AM: ⛅ Partly cloudy, 40°F, Chance of Rain: 20%",
                SEPARATOR,
            ]
        );
    }

    #[test]
    fn hourly_line_metric_in_other_zone() {
        let doc = document("America/New_York", 1);
        let now = DateTime::from_timestamp(base_epoch() + 14 * 3600, 0).unwrap();
        let rows = hourly_view(&doc, now, 1);
        assert_eq!(
            hour_line(&rows[0], Units::Metric),
            "Mon 01/15 10 AM: ⛅ Partly cloudy, 4°C, Chance of Rain: 20%"
        );
    }

    #[test]
    fn empty_views_render_only_banners() {
        let doc = document("Europe/London", 0);
        assert_eq!(render_daily(&doc.location, &[], 5, Units::Imperial).len(), 4);
        assert_eq!(render_hourly(&doc.location, &[], Units::Imperial).len(), 4);
    }
}
