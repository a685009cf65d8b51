pub mod sportsdb;

pub use sportsdb::SportsDbFeed;
