pub mod config;
pub mod constants;
pub mod error;
pub mod feeds;
pub mod logging;
pub mod metrics;
pub mod normalize;
pub mod render;
pub mod server;
pub mod slug;
pub mod sources;
pub mod store;
pub mod types;
