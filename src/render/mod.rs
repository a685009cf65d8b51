//! Aggregation of canonical records into category sections and their HTML form.

pub mod aggregate;
pub mod format;
pub mod html;
pub mod renderer;
pub mod target;

pub use aggregate::{group_by_category, CategoryGroup};
pub use format::{format_match_time, ClockStyle, ViewerZone};
pub use html::HtmlTarget;
pub use renderer::Renderer;
pub use target::{Block, CategorySection, MatchCard, Placeholder, RenderTarget};
