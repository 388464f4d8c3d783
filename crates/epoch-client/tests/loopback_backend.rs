//! Drives `ArticleClient` against a `tiny_http` backend on `127.0.0.1:0`.

use std::thread::JoinHandle;

use epoch_client::{ArticleClient, ArticleQuery, ArticleSource, ClientError};
use epoch_config::ApiConfig;
use epoch_core::GeoPoint;
use pretty_assertions::assert_eq;

const TWO_ARTICLES: &str = r#"[
    {"title": "Temple of Hephaestus", "extract": "Doric temple.", "url": "https://en.wikipedia.org/wiki?curid=1",
     "lat": 37.9756, "lon": 23.7214, "distance": 1500},
    {"title": "Sparta", "extract": "City-state.", "url": "https://en.wikipedia.org/wiki?curid=2",
     "lat": 37.0755, "lon": 22.4303, "distance": 500000}
]"#;

/// Serve exactly one request with `status` / `body` and hand back the
/// request URL the client sent.
fn serve_once(status: u16, body: &'static str) -> (ApiConfig, JoinHandle<String>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind loopback");
    let port = server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .expect("ip listener");

    let handle = std::thread::spawn(move || {
        let request = server.recv().expect("request arrives");
        let url = request.url().to_string();
        let response = tiny_http::Response::from_string(body).with_status_code(status);
        request.respond(response).expect("respond");
        url
    });

    let config = ApiConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        timeout_secs: 5,
        ..Default::default()
    };
    (config, handle)
}

fn click_query() -> ArticleQuery {
    ArticleQuery::new(GeoPoint::new(37.97, 23.72), "500 BCE", "2024 CE")
}

#[tokio::test]
async fn fetches_and_decodes_articles() {
    let (config, server) = serve_once(200, TWO_ARTICLES);
    let client = ArticleClient::new(&config).expect("client builds");

    let articles = client.fetch(&click_query()).await.expect("fetch succeeds");
    let url = server.join().expect("server thread");

    assert_eq!(
        url,
        "/api/articles?lat=37.97&lng=23.72&startYear=500%20BCE&endYear=2024%20CE"
    );
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "Temple of Hephaestus");
    assert_eq!(articles[1].position(), GeoPoint::new(37.0755, 22.4303));
}

#[tokio::test]
async fn empty_array_is_success() {
    let (config, server) = serve_once(200, "[]");
    let client = ArticleClient::new(&config).expect("client builds");

    let articles = client.fetch(&click_query()).await.expect("fetch succeeds");
    server.join().expect("server thread");
    assert!(articles.is_empty());
}

#[tokio::test]
async fn server_error_is_api_error() {
    let (config, server) = serve_once(500, r#"{"error": "wikipedia unavailable"}"#);
    let client = ArticleClient::new(&config).expect("client builds");

    let err = client.fetch(&click_query()).await.unwrap_err();
    server.join().expect("server thread");
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("wikipedia unavailable"));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let (config, server) = serve_once(200, r#"{"not": "an array"}"#);
    let client = ArticleClient::new(&config).expect("client builds");

    let err = client.fetch(&click_query()).await.unwrap_err();
    server.join().expect("server thread");
    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn article_missing_coordinates_is_parse_error() {
    let (config, server) = serve_once(200, r#"[{"title": "t", "extract": "e", "url": "u", "distance": 1}]"#);
    let client = ArticleClient::new(&config).expect("client builds");

    let err = client.fetch(&click_query()).await.unwrap_err();
    server.join().expect("server thread");
    assert!(matches!(err, ClientError::Parse(_)));
}
