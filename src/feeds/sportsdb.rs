use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::FeedsConfig;
use crate::constants::NEXT_EVENTS_ENDPOINT;
use crate::error::{FixtureError, Result};
use crate::types::{FeedSource, RawFeedEvent};

/// One TheSportsDB league schedule, fetched independently of any other league
pub struct SportsDbFeed {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    league_id: String,
}

impl SportsDbFeed {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        league_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            league_id: league_id.into(),
        }
    }

    /// One feed per configured league, sharing a single HTTP client
    pub fn from_config(config: &FeedsConfig) -> Result<Vec<Self>> {
        let client = build_client(config.request_timeout_seconds)?;
        Ok(config
            .league_ids
            .iter()
            .map(|id| Self::new(client.clone(), &config.base_url, &config.api_key, id.trim()))
            .collect())
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_key,
            NEXT_EVENTS_ENDPOINT
        )
    }
}

pub fn build_client(timeout_seconds: Option<u64>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Parse a schedule response body.
///
/// A `null` or absent `events` value means the league has nothing scheduled.
/// Entries that fail to deserialize are dropped individually.
pub fn parse_events_json(feed: &str, raw: &str) -> Result<Vec<RawFeedEvent>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        info!(feed, "response body was empty, no events");
        return Ok(Vec::new());
    }

    let root: Value = serde_json::from_str(trimmed)?;
    let events = match root.get("events") {
        None | Some(Value::Null) => {
            info!(feed, "response carried no events");
            return Ok(Vec::new());
        }
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(FixtureError::Feed {
                feed: feed.to_string(),
                message: format!("expected `events` array, got {}", json_kind(other)),
            })
        }
    };

    let mut parsed = Vec::with_capacity(events.len());
    for item in events {
        match serde_json::from_value::<RawFeedEvent>(item.clone()) {
            Ok(event) => parsed.push(event),
            Err(e) => warn!(feed, "Skipping undecodable event: {}", e),
        }
    }
    Ok(parsed)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait::async_trait]
impl FeedSource for SportsDbFeed {
    fn feed_id(&self) -> &str {
        &self.league_id
    }

    #[instrument(skip(self), fields(league = %self.league_id))]
    async fn fetch_events(&self) -> Result<Vec<RawFeedEvent>> {
        debug!("Fetching next events");
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("id", self.league_id.as_str())])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let events = parse_events_json(&self.league_id, &body)?;
        info!("Fetched {} events", events.len());
        Ok(events)
    }
}
