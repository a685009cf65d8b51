use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical match record consumed by the aggregator regardless of origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub title: String,
    pub category: String,
    pub category_slug: String,
    pub date: DateTime<Utc>,
    pub url: String,
    pub slug: String,
}

/// A date as supplied by a caller, resolved to UTC during normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// Milliseconds since the Unix epoch
    Timestamp(i64),
    Text(String),
    Instant(DateTime<Utc>),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Instant(value)
    }
}

/// Structured manual entry; every field is optional until validated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<DateInput>,
    #[serde(default)]
    pub url: Option<String>,
}

/// The two accepted shapes of a manual entry
#[derive(Debug, Clone, PartialEq)]
pub enum MatchInput {
    Positional {
        title: String,
        category: String,
        date: DateInput,
        url: Option<String>,
    },
    Fields(MatchFields),
}

impl MatchInput {
    pub fn positional(
        title: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<DateInput>,
        url: Option<&str>,
    ) -> Self {
        MatchInput::Positional {
            title: title.into(),
            category: category.into(),
            date: date.into(),
            url: url.map(str::to_string),
        }
    }
}

impl From<MatchFields> for MatchInput {
    fn from(fields: MatchFields) -> Self {
        MatchInput::Fields(fields)
    }
}

impl<T, C, D> From<(T, C, D)> for MatchInput
where
    T: Into<String>,
    C: Into<String>,
    D: Into<DateInput>,
{
    fn from((title, category, date): (T, C, D)) -> Self {
        MatchInput::positional(title, category, date, None)
    }
}

/// One event as returned by TheSportsDB's league schedule endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFeedEvent {
    #[serde(rename = "idEvent", default)]
    pub id_event: Option<String>,
    #[serde(rename = "strEvent", default)]
    pub str_event: Option<String>,
    #[serde(rename = "strLeague", default)]
    pub str_league: Option<String>,
    #[serde(rename = "dateEvent", default)]
    pub date_event: Option<String>,
    #[serde(rename = "strTime", default)]
    pub str_time: Option<String>,
}

/// Core trait that every upstream feed must implement
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Identifier of the league/competition this feed serves
    fn feed_id(&self) -> &str;

    /// Fetch the raw events currently published for this feed
    async fn fetch_events(&self) -> Result<Vec<RawFeedEvent>>;
}
