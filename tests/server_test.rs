use std::net::TcpListener;

use chrono::FixedOffset;
use fixture_board::render::{ClockStyle, HtmlTarget, Renderer};
use fixture_board::server::{create_server, AppState, Board};
use fixture_board::sources::StaticSource;
use fixture_board::store::InMemoryMatchStore;
use fixture_board::types::Match;
use scraper::{Html, Selector};
use tokio::sync::Mutex;

async fn spawn_static_server() -> String {
    let mut board = StaticSource::new(
        InMemoryMatchStore::new(),
        HtmlTarget::default(),
        Renderer::new(FixedOffset::east_opt(0).unwrap(), ClockStyle::TwelveHour),
    );
    board.render();
    board.add_match(("Lithuania vs Netherlands", "UEFA World Cup Qualifying", "2025-09-07 16:00"));
    board.add_match(("Arsenal vs Spurs", "Football", "2025-09-14 16:30"));

    let app = create_server(AppState::new(Board::Static(Mutex::new(board))));
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service())
            .await
            .unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health() {
    let base = spawn_static_server().await;
    let body: serde_json::Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_index_serves_rendered_board() {
    let base = spawn_static_server().await;
    let html = reqwest::get(format!("{}/", base)).await.unwrap().text().await.unwrap();

    let document = Html::parse_document(&html);
    let headings = Selector::parse("#categoriesContainer section.category-card h2").unwrap();
    let names: Vec<String> = document.select(&headings).map(|h| h.text().collect()).collect();
    assert_eq!(names, vec!["Football", "UEFA World Cup Qualifying"]);
}

#[tokio::test]
async fn test_api_lists_canonical_records() {
    let base = spawn_static_server().await;
    let matches: Vec<Match> = reqwest::get(format!("{}/api/matches", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[1].slug, "arsenal-vs-spurs");
    assert_eq!(matches[1].url, "matches/arsenal-vs-spurs.html");
}
