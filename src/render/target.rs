use serde::Serialize;

/// Placeholder card shown when there is nothing to list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub heading: String,
    pub hint: String,
}

/// One link card for a single match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchCard {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub url: String,
    /// Kickoff already formatted for the viewer
    pub when: String,
}

/// One section per category, cards in date order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySection {
    pub name: String,
    pub slug: String,
    pub cards: Vec<MatchCard>,
    /// Present only when the group has no cards
    pub placeholder: Option<Placeholder>,
}

impl CategorySection {
    /// The placeholder to show in place of cards, if the section has none
    pub fn empty_placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref().filter(|_| self.cards.is_empty())
    }
}

/// Top-level child of the render container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    EmptyState(Placeholder),
    Category(CategorySection),
}

/// Handle to the display region a renderer writes into
pub trait RenderTarget {
    /// Name of the container element this target represents
    fn container_id(&self) -> &str;

    /// Drop everything rendered so far
    fn clear(&mut self);

    fn append(&mut self, block: Block);

    fn blocks(&self) -> &[Block];
}
