//! The two interchangeable match sources.

pub mod remote;
pub mod static_source;

pub use remote::{upcoming_only, RemoteSource};
pub use static_source::{FixturesFile, StaticSource};
