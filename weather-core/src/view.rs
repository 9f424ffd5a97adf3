//! Normalizes a [`ForecastDocument`] into display rows.
//!
//! Every function here is a pure projection over an already fetched
//! document; nothing fails; anomalies degrade into valid, possibly empty,
//! output.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::model::{CurrentConditions, DayForecast, ForecastDocument, HourForecast, Location};

/// Days shown by the daily view unless the caller asks otherwise.
pub const DEFAULT_MAX_DAYS: usize = 5;

/// Hours shown by the hourly view unless the caller asks otherwise.
pub const DEFAULT_MAX_HOURS: usize = 12;

/// Zone used to turn epoch timestamps into wall-clock labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// The location's own IANA zone.
    Named(Tz),
    /// The host's zone, used when the location's identifier is not recognized.
    Local,
}

impl DisplayZone {
    pub fn resolve(tz_id: &str) -> Self {
        match tz_id.parse::<Tz>() {
            Ok(tz) => DisplayZone::Named(tz),
            Err(err) => {
                warn!(tz_id, %err, "unrecognized timezone, falling back to local time");
                DisplayZone::Local
            }
        }
    }

    /// Wall-clock time of `epoch` in this zone.
    pub fn wall_time(&self, epoch: i64) -> NaiveDateTime {
        let instant = utc_from_epoch(epoch);
        match self {
            DisplayZone::Named(tz) => instant.with_timezone(tz).naive_local(),
            DisplayZone::Local => instant.with_timezone(&chrono::Local).naive_local(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentViewRow<'a> {
    pub location: &'a Location,
    pub current: &'a CurrentConditions,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayViewRow<'a> {
    pub date: NaiveDate,
    pub day: &'a DayForecast,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourViewRow<'a> {
    /// Wall-clock time in the location's zone (or the host's, on fallback).
    pub time: NaiveDateTime,
    pub hour: &'a HourForecast,
}

pub fn current_view(doc: &ForecastDocument) -> CurrentViewRow<'_> {
    CurrentViewRow { location: &doc.location, current: &doc.current }
}

/// The first `max_days` days in provider order. Fewer days are returned as-is.
pub fn daily_view(doc: &ForecastDocument, max_days: usize) -> Vec<DayViewRow<'_>> {
    doc.days
        .iter()
        .take(max_days)
        .map(|day| DayViewRow { date: utc_from_epoch(day.date_epoch).date_naive(), day })
        .collect()
}

/// Up to `max_hours` hour entries strictly after `now`, across day boundaries.
///
/// All days are scanned as one chronological stream, stopping as soon as
/// enough entries are found.
pub fn hourly_view(
    doc: &ForecastDocument,
    now: DateTime<Utc>,
    max_hours: usize,
) -> Vec<HourViewRow<'_>> {
    let zone = DisplayZone::resolve(&doc.location.tz_id);
    let now = now.timestamp();

    doc.days
        .iter()
        .flat_map(|day| day.hours.iter())
        .filter(|hour| hour.time_epoch > now)
        .take(max_hours)
        .map(|hour| HourViewRow { time: zone.wall_time(hour.time_epoch), hour })
        .collect()
}

/// Out-of-range timestamps collapse to the Unix epoch.
fn utc_from_epoch(epoch: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(epoch, 0).unwrap_or_default()
}
