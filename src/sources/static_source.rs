use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::normalize::normalize_manual;
use crate::render::{RenderTarget, Renderer};
use crate::store::MatchStore;
use crate::types::{Match, MatchFields, MatchInput};

/// `[[matches]]` tables of a fixtures file
#[derive(Debug, Default, Deserialize)]
pub struct FixturesFile {
    #[serde(default)]
    pub matches: Vec<MatchFields>,
}

impl FixturesFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }
}

/// Manually curated matches, re-rendered into the target after every addition
pub struct StaticSource<S: MatchStore, T: RenderTarget> {
    store: S,
    target: T,
    renderer: Renderer,
}

impl<S: MatchStore, T: RenderTarget> StaticSource<S, T> {
    pub fn new(store: S, target: T, renderer: Renderer) -> Self {
        Self {
            store,
            target,
            renderer,
        }
    }

    /// Validate and add one match, then re-render everything.
    ///
    /// Invalid input is logged and yields `None`; the store and the rendered
    /// output are left untouched.
    pub fn add_match(&mut self, input: impl Into<MatchInput>) -> Option<Match> {
        let record = match normalize_manual(input.into()) {
            Ok(record) => record,
            Err(e) => {
                warn!("add_match requires title, category, and a resolvable date: {}", e);
                return None;
            }
        };

        self.store.append(record.clone());
        self.render();
        Some(record)
    }

    /// Add every entry of a fixtures file; returns how many were accepted.
    pub fn seed(&mut self, fixtures: FixturesFile) -> usize {
        let total = fixtures.matches.len();
        let added = fixtures
            .matches
            .into_iter()
            .filter_map(|fields| self.add_match(fields))
            .count();
        if added < total {
            warn!("Skipped {} invalid fixture entries", total - added);
        }
        info!("Seeded {} matches", added);
        added
    }

    pub fn seed_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let fixtures = FixturesFile::load(path)?;
        Ok(self.seed(fixtures))
    }

    /// Render the current store contents into the target.
    pub fn render(&mut self) {
        self.renderer.render(self.store.records(), &mut self.target);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn matches(&self) -> &[Match] {
        self.store.records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixtureError;
    use crate::render::{Block, ClockStyle, HtmlTarget};
    use crate::store::InMemoryMatchStore;
    use chrono::FixedOffset;

    fn source() -> StaticSource<InMemoryMatchStore, HtmlTarget> {
        StaticSource::new(
            InMemoryMatchStore::new(),
            HtmlTarget::default(),
            Renderer::new(FixedOffset::east_opt(0).unwrap(), ClockStyle::TwelveHour),
        )
    }

    #[test]
    fn test_add_match_rerenders() {
        let mut board = source();
        board.render();
        assert!(matches!(board.target().blocks(), [Block::EmptyState(_)]));

        let added = board
            .add_match(("Georgia vs Bulgaria", "UEFA World Cup Qualifying", "2025-09-07 13:00"))
            .unwrap();
        assert_eq!(board.store().len(), 1);
        match board.target().blocks() {
            [Block::Category(section)] => {
                assert_eq!(section.cards[0].id, added.id);
                assert_eq!(section.cards[0].when, "Sun, Sep 7, 1:00 PM");
            }
            other => panic!("unexpected blocks {:?}", other),
        }
    }

    #[test]
    fn test_invalid_input_changes_nothing() {
        let mut board = source();
        board.add_match(("Arsenal vs Spurs", "Football", "2025-09-14 16:30"));
        let before = board.target().to_html().unwrap();

        assert!(board
            .add_match(MatchFields {
                title: Some("Lakers vs Celtics".into()),
                category: Some("Basketball".into()),
                date: None,
                url: None,
            })
            .is_none());
        assert!(board
            .add_match(("Lakers vs Celtics", "Basketball", "sometime soon"))
            .is_none());

        assert_eq!(board.store().len(), 1);
        assert_eq!(board.target().to_html().unwrap(), before);
    }

    #[test]
    fn test_seed_skips_invalid_entries() {
        let fixtures = FixturesFile::parse(
            r#"
            [[matches]]
            title = "Medvedev vs Alcaraz"
            category = "Tennis"
            date = "2025-09-20 14:00"

            [[matches]]
            title = "No category"
            date = "2025-09-20 14:00"

            [[matches]]
            title = "Lakers vs Celtics"
            category = "Basketball"
            date = 1759604400000
            url = "https://example.com/lakers"
            "#,
        )
        .unwrap();

        let mut board = source();
        assert_eq!(board.seed(fixtures), 2);
        assert_eq!(board.matches()[1].url, "https://example.com/lakers");
    }

    #[test]
    fn test_missing_fixtures_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FixturesFile::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, FixtureError::Io(_)));
    }
}
