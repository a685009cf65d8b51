use tracing::debug;

use crate::config::RenderConfig;
use crate::constants::STATIC_EMPTY_HINT;
use crate::render::aggregate::{group_by_category, CategoryGroup};
use crate::render::format::{ClockStyle, ViewerZone};
use crate::render::target::{Block, CategorySection, MatchCard, Placeholder, RenderTarget};
use crate::types::Match;

const EMPTY_HEADING: &str = "No upcoming matches";
const EMPTY_GROUP_HEADING: &str = "No matches here yet";

/// Turns canonical records into category sections on a render target
#[derive(Debug, Clone)]
pub struct Renderer {
    zone: ViewerZone,
    clock: ClockStyle,
    empty_hint: String,
}

impl Renderer {
    pub fn new(zone: impl Into<ViewerZone>, clock: ClockStyle) -> Self {
        Self {
            zone: zone.into(),
            clock,
            empty_hint: STATIC_EMPTY_HINT.to_string(),
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.viewer_zone(), config.clock)
    }

    pub fn with_empty_hint(mut self, hint: impl Into<String>) -> Self {
        self.empty_hint = hint.into();
        self
    }

    /// Replace the target's contents with the given records.
    pub fn render<T: RenderTarget + ?Sized>(&self, matches: &[Match], target: &mut T) {
        if matches.is_empty() {
            target.clear();
            target.append(Block::EmptyState(Placeholder {
                heading: EMPTY_HEADING.to_string(),
                hint: self.empty_hint.clone(),
            }));
            debug!(container = target.container_id(), "rendered empty state");
            return;
        }
        self.render_groups(&group_by_category(matches), target);
    }

    /// Replace the target's contents with pre-grouped sections, in the given order.
    pub fn render_groups<T: RenderTarget + ?Sized>(&self, groups: &[CategoryGroup], target: &mut T) {
        target.clear();
        for group in groups {
            target.append(Block::Category(self.section(group)));
        }
        debug!(
            container = target.container_id(),
            sections = groups.len(),
            "rendered category sections"
        );
    }

    fn section(&self, group: &CategoryGroup) -> CategorySection {
        let cards: Vec<MatchCard> = group.matches.iter().map(|m| self.card(m)).collect();
        let placeholder = cards.is_empty().then(|| Placeholder {
            heading: EMPTY_GROUP_HEADING.to_string(),
            hint: self.empty_hint.clone(),
        });
        CategorySection {
            name: group.category.clone(),
            slug: group
                .matches
                .first()
                .map(|m| m.category_slug.clone())
                .unwrap_or_else(|| crate::slug::slugify(&group.category)),
            cards,
            placeholder,
        }
    }

    fn card(&self, record: &Match) -> MatchCard {
        MatchCard {
            id: record.id.clone(),
            title: record.title.clone(),
            slug: record.slug.clone(),
            url: record.url.clone(),
            when: self.zone.format(record.date, self.clock),
        }
    }
}
