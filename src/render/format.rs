use std::fmt::Display;

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockStyle {
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Time zone kickoffs are displayed in.
///
/// `Named` and `Local` apply the zone's rules to each instant, so kickoffs on
/// either side of a daylight-saving change get their own offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewerZone {
    /// The host's local zone
    #[default]
    Local,
    Named(Tz),
    Fixed(FixedOffset),
}

impl From<FixedOffset> for ViewerZone {
    fn from(offset: FixedOffset) -> Self {
        ViewerZone::Fixed(offset)
    }
}

impl From<Tz> for ViewerZone {
    fn from(zone: Tz) -> Self {
        ViewerZone::Named(zone)
    }
}

impl ViewerZone {
    pub fn format(&self, instant: DateTime<Utc>, clock: ClockStyle) -> String {
        match self {
            ViewerZone::Local => format_match_time(instant, &Local, clock),
            ViewerZone::Named(zone) => format_match_time(instant, zone, clock),
            ViewerZone::Fixed(offset) => format_match_time(instant, offset, clock),
        }
    }
}

/// Format an instant in the viewer's zone as weekday, month, day and time.
///
/// `Sun, Sep 7, 1:00 PM` for the 12-hour clock, `Sun, Sep 7, 13:00` for 24-hour.
pub fn format_match_time<Z>(instant: DateTime<Utc>, zone: &Z, clock: ClockStyle) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    let local = instant.with_timezone(zone);
    let pattern = match clock {
        ClockStyle::TwelveHour => "%a, %b %-d, %-I:%M %p",
        ClockStyle::TwentyFourHour => "%a, %b %-d, %H:%M",
    };
    local.format(pattern).to_string()
}
