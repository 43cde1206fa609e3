//! MediaWiki client tests against a mocked action API.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ursid_wiki::config::Config;
use ursid_wiki::error::ClientError;
use ursid_wiki::services::AvailabilityChecker;
use ursid_wiki::WikiClient;

fn setup_client(mock_server: &MockServer) -> WikiClient {
    WikiClient::new(&Config::for_testing(&mock_server.uri())).unwrap()
}

// =============================================================================
// fetch_wikitext
// =============================================================================

#[tokio::test]
async fn test_fetch_wikitext_sends_parse_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "parse"))
        .and(query_param("page", "List_of_ursids"))
        .and(query_param("prop", "wikitext"))
        .and(query_param("section", "3"))
        .and(query_param("format", "json"))
        .and(query_param("origin", "*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "parse": {"title": "List of ursids", "wikitext": {"*": "{{Species table/end}}"}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let wikitext = client.fetch_wikitext("List_of_ursids", 3).await.unwrap();

    assert_eq!(wikitext, "{{Species table/end}}");
}

#[tokio::test]
async fn test_fetch_wikitext_missing_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"code": "missingtitle", "info": "The page you specified doesn't exist."}
        })))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.fetch_wikitext("Nope", 3).await.unwrap_err();

    assert!(matches!(err, ClientError::MissingField(_)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_wikitext_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.fetch_wikitext("List_of_ursids", 3).await.unwrap_err();

    match err {
        ClientError::Server { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_wikitext_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    assert!(client.fetch_wikitext("List_of_ursids", 3).await.is_err());
}

// =============================================================================
// lookup_image_url
// =============================================================================

#[tokio::test]
async fn test_lookup_image_url_sends_file_title() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "query"))
        .and(query_param("titles", "File:Polar bear.jpg"))
        .and(query_param("prop", "imageinfo"))
        .and(query_param("iiprop", "url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": {"4242": {"title": "File:Polar bear.jpg", "imageinfo": [
                {"url": "https://upload.wikimedia.org/wikipedia/commons/polar.jpg"}
            ]}}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let url = client.lookup_image_url("Polar bear.jpg").await.unwrap();

    assert_eq!(url.as_deref(), Some("https://upload.wikimedia.org/wikipedia/commons/polar.jpg"));
}

#[tokio::test]
async fn test_lookup_image_url_missing_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": {"-1": {"ns": 6, "title": "File:Nope.jpg", "missing": ""}}}
        })))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    assert_eq!(client.lookup_image_url("Nope.jpg").await.unwrap(), None);
}

#[tokio::test]
async fn test_lookup_image_url_without_query_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"batchcomplete": ""})))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    assert!(client.lookup_image_url("Polar bear.jpg").await.is_err());
}

// =============================================================================
// Availability
// =============================================================================

#[tokio::test]
async fn test_availability_follows_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/ok.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8]))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/images/gone.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);

    assert!(client.is_available(&format!("{}/images/ok.jpg", mock_server.uri())).await);
    assert!(!client.is_available(&format!("{}/images/gone.jpg", mock_server.uri())).await);
}

#[tokio::test]
async fn test_availability_network_failure_is_false() {
    let client = WikiClient::new(&Config::for_testing("http://127.0.0.1:1")).unwrap();
    assert!(!client.is_available("http://127.0.0.1:1/images/bear.jpg").await);
}
