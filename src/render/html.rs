//! HTML serialization of rendered blocks.
//!
//! Markup lives in `templates/`; class names there are the styling hooks the
//! page stylesheet targets, so keep them stable.

use askama::Template;

use crate::constants::CONTAINER_ID;
use crate::error::Result;
use crate::render::target::{Block, RenderTarget};

#[derive(Template)]
#[template(path = "board.html")]
struct BoardTemplate<'a> {
    container_id: &'a str,
    blocks: &'a [Block],
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    page_title: &'a str,
    container_id: &'a str,
    blocks: &'a [Block],
}

/// Render target that accumulates blocks and serializes them to HTML
#[derive(Debug, Clone)]
pub struct HtmlTarget {
    container_id: String,
    page_title: String,
    blocks: Vec<Block>,
}

impl Default for HtmlTarget {
    fn default() -> Self {
        Self::new(CONTAINER_ID)
    }
}

impl HtmlTarget {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            page_title: "Upcoming Matches".to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }

    /// The container element and its current children
    pub fn to_html(&self) -> Result<String> {
        let template = BoardTemplate {
            container_id: &self.container_id,
            blocks: &self.blocks,
        };
        Ok(template.render()?)
    }

    /// A complete standalone document wrapping the container
    pub fn page(&self) -> Result<String> {
        let template = PageTemplate {
            page_title: &self.page_title,
            container_id: &self.container_id,
            blocks: &self.blocks,
        };
        Ok(template.render()?)
    }
}

impl RenderTarget for HtmlTarget {
    fn container_id(&self) -> &str {
        &self.container_id
    }

    fn clear(&mut self) {
        self.blocks.clear();
    }

    fn append(&mut self, block: Block) {
        self.blocks.push(block);
    }

    fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}
