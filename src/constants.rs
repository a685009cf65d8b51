/// Feed and rendering constants shared across the crate

// TheSportsDB public key; overridden by `feeds.api_key` or SPORTSDB_API_KEY
pub const DEFAULT_API_KEY: &str = "3";
pub const API_KEY_ENV: &str = "SPORTSDB_API_KEY";

pub const SPORTSDB_BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json";
pub const SPORTSDB_EVENT_PAGE_BASE: &str = "https://www.thesportsdb.com/event";
pub const NEXT_EVENTS_ENDPOINT: &str = "eventsnextleague.php";

// English Premier League, NBA, NFL, NHL
pub const DEFAULT_LEAGUE_IDS: [&str; 4] = ["4328", "4387", "4391", "4380"];

/// Name of the element every render replaces the children of
pub const CONTAINER_ID: &str = "categoriesContainer";

/// Directory prefix for locally generated match links
pub const MATCH_PAGE_DIR: &str = "matches";

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_FIXTURES_PATH: &str = "fixtures.toml";
pub const DEFAULT_OUTPUT_PATH: &str = "site/index.html";
pub const DEFAULT_SERVER_PORT: u16 = 8080;

pub const DEFAULT_LOG_DIRECTIVE: &str = "fixture_board=info";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILE: &str = "fixture_board.log";

pub const STATIC_EMPTY_HINT: &str = "Open fixtures.toml and add some matches.";
pub const REMOTE_EMPTY_HINT: &str =
    "None of the configured leagues returned upcoming events. Check the league ids and API key.";

/// Build the locally hosted page path for a match slug
pub fn match_page_url(slug: &str) -> String {
    format!("{}/{}.html", MATCH_PAGE_DIR, slug)
}
