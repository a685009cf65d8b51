//! Converts manual entries and feed payloads into canonical [`Match`] records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::constants::match_page_url;
use crate::error::{FixtureError, Result};
use crate::slug::slugify;
use crate::types::{DateInput, Match, MatchFields, MatchInput, RawFeedEvent};

// Offset-less layouts, read as UTC
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M%z"];
const DATE_FORMAT: &str = "%Y-%m-%d";
const FEED_TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Resolve any accepted date shape to an absolute UTC instant.
pub fn resolve_date(input: &DateInput) -> Result<DateTime<Utc>> {
    match input {
        DateInput::Instant(instant) => Ok(*instant),
        DateInput::Timestamp(millis) => Utc
            .timestamp_millis_opt(*millis)
            .single()
            .ok_or_else(|| FixtureError::InvalidDate(format!("timestamp {} out of range", millis))),
        DateInput::Text(text) => parse_date_text(text),
    }
}

fn parse_date_text(text: &str) -> Result<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FixtureError::MissingField("date".into()));
    }
    // "YYYY-MM-DD HH:mm" is accepted the same as the ISO 'T' form
    let mut normalized = if trimmed.contains('T') {
        trimmed.to_string()
    } else {
        trimmed.replacen(' ', "T", 1)
    };
    if let Some(stripped) = normalized.strip_suffix(|c: char| c == 'Z' || c == 'z') {
        normalized = format!("{}+00:00", stripped);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(&normalized, DATE_FORMAT) {
        return Ok(Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)));
    }

    Err(FixtureError::InvalidDate(text.to_string()))
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| FixtureError::MissingField(field.to_string()))
}

/// Validate a manual entry and build its canonical record with a fresh id.
pub fn normalize_manual(input: MatchInput) -> Result<Match> {
    let fields = match input {
        MatchInput::Positional { title, category, date, url } => MatchFields {
            title: Some(title),
            category: Some(category),
            date: Some(date),
            url,
        },
        MatchInput::Fields(fields) => fields,
    };

    let title = required(fields.title, "title")?;
    let category = required(fields.category, "category")?;
    let date_input = fields
        .date
        .ok_or_else(|| FixtureError::MissingField("date".into()))?;
    let date = resolve_date(&date_input)?;

    let slug = slugify(&title);
    let category_slug = slugify(&category);
    let url = fields
        .url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| match_page_url(&slug));

    Ok(Match {
        id: Uuid::new_v4().simple().to_string(),
        title,
        category,
        category_slug,
        date,
        url,
        slug,
    })
}

fn parse_feed_time(raw: Option<&str>) -> Result<NaiveTime> {
    let Some(raw) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(NaiveTime::MIN);
    };
    // Upstream occasionally suffixes an explicit UTC marker
    let bare = raw
        .strip_suffix("+00:00")
        .or_else(|| raw.strip_suffix('Z'))
        .unwrap_or(raw);

    FEED_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(bare, format).ok())
        .ok_or_else(|| FixtureError::InvalidDate(format!("time '{}'", raw)))
}

/// Map one upstream event to a canonical record, interpreting date+time as UTC.
pub fn normalize_feed_event(event: RawFeedEvent, event_page_base: &str) -> Result<Match> {
    let id = required(event.id_event, "idEvent")?;
    let title = required(event.str_event, "strEvent")?;
    let category = required(event.str_league, "strLeague")?;
    let day_text = required(event.date_event, "dateEvent")?;

    let day = NaiveDate::parse_from_str(&day_text, DATE_FORMAT)
        .map_err(|e| FixtureError::InvalidDate(format!("dateEvent '{}': {}", day_text, e)))?;
    let time = parse_feed_time(event.str_time.as_deref())?;
    let date = Utc.from_utc_datetime(&day.and_time(time));

    let url = format!("{}/{}", event_page_base.trim_end_matches('/'), id);
    debug!(event_id = %id, %date, "normalized feed event");

    Ok(Match {
        slug: slugify(&title),
        category_slug: slugify(&category),
        id,
        title,
        category,
        date,
        url,
    })
}
