use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::config::FeedsConfig;
use crate::error::Result;
use crate::feeds::SportsDbFeed;
use crate::metrics::FeedMetrics;
use crate::normalize::normalize_feed_event;
use crate::render::{RenderTarget, Renderer};
use crate::types::{FeedSource, Match};

/// Fetches every configured feed in parallel and merges them into one snapshot
#[derive(Clone)]
pub struct RemoteSource {
    feeds: Vec<Arc<dyn FeedSource>>,
    event_page_base: String,
}

impl RemoteSource {
    pub fn new(feeds: Vec<Arc<dyn FeedSource>>, event_page_base: impl Into<String>) -> Self {
        Self {
            feeds,
            event_page_base: event_page_base.into(),
        }
    }

    pub fn from_config(config: &FeedsConfig) -> Result<Self> {
        let feeds = SportsDbFeed::from_config(config)?
            .into_iter()
            .map(|feed| Arc::new(feed) as Arc<dyn FeedSource>)
            .collect();
        Ok(Self::new(feeds, &config.event_page_base))
    }

    /// Fetch all feeds concurrently; a failing feed contributes nothing.
    ///
    /// Results are collected per feed slot in configuration order once every
    /// task has settled, then flattened.
    pub async fn fetch_matches(&self) -> Vec<Match> {
        let mut handles = Vec::with_capacity(self.feeds.len());

        for feed in &self.feeds {
            let feed = Arc::clone(feed);
            let page_base = self.event_page_base.clone();
            handles.push(tokio::spawn(async move { fetch_feed(feed, &page_base).await }));
        }

        let mut slots: Vec<Vec<Match>> = Vec::with_capacity(handles.len());
        for (handle, feed) in handles.into_iter().zip(&self.feeds) {
            match handle.await {
                Ok(records) => slots.push(records),
                Err(e) => {
                    error!(feed = feed.feed_id(), "Feed task aborted: {}", e);
                    FeedMetrics::record_error(feed.feed_id());
                    slots.push(Vec::new());
                }
            }
        }

        let merged: Vec<Match> = slots.into_iter().flatten().collect();
        info!("Fetched {} matches from {} feeds", merged.len(), self.feeds.len());
        merged
    }

    /// Fetch a fresh snapshot, keep upcoming matches and replace the target's contents.
    pub async fn refresh<T: RenderTarget + ?Sized>(
        &self,
        renderer: &Renderer,
        target: &mut T,
        now: DateTime<Utc>,
    ) -> Vec<Match> {
        let upcoming = upcoming_only(self.fetch_matches().await, now);
        renderer.render(&upcoming, target);
        upcoming
    }
}

async fn fetch_feed(feed: Arc<dyn FeedSource>, event_page_base: &str) -> Vec<Match> {
    let feed_id = feed.feed_id().to_string();
    let events = match feed.fetch_events().await {
        Ok(events) => events,
        Err(e) => {
            error!(feed = %feed_id, "Feed fetch failed: {}", e);
            FeedMetrics::record_error(&feed_id);
            return Vec::new();
        }
    };

    let mut records = Vec::with_capacity(events.len());
    for event in events {
        match normalize_feed_event(event, event_page_base) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(feed = %feed_id, "Skipping event: {}", e);
                FeedMetrics::record_skipped_event(&feed_id);
            }
        }
    }
    FeedMetrics::record_success(&feed_id, records.len());
    records
}

/// Keep only matches at or after `now`
pub fn upcoming_only(matches: Vec<Match>, now: DateTime<Utc>) -> Vec<Match> {
    matches.into_iter().filter(|m| m.date >= now).collect()
}
