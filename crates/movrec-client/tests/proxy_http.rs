//! End-to-end tests: `DatabaseProxy` over `DatabaseClient` over a stub
//! HTTP server.
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use movrec_client::database::{DatabaseClient, DatabaseProxy, ProxyError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MOVIES_JSON: &str =
    r#"[{"id":"Alien","vector":[0.1,0.2]},{"id":"zorro","vector":[0.3,0.4]}]"#;

fn proxy_for(mock_server: &MockServer) -> DatabaseProxy<DatabaseClient> {
    let base_url = format!("{}/", mock_server.uri());
    let client = DatabaseClient::builder()
        .base_url(base_url.parse().unwrap())
        .build()
        .unwrap();
    DatabaseProxy::new(client)
}

#[tokio::test]
async fn test_get_movies_end_to_end() {
    // Arrange
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/db/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MOVIES_JSON))
        .mount(&mock_server)
        .await;

    let proxy = proxy_for(&mock_server);

    // Act
    let movies = proxy.get_movies("db").await.unwrap();

    // Assert
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, "Alien");
    assert_eq!(movies[0].vector, vec![0.1, 0.2]);
    assert_eq!(movies[1].id, "zorro");
    assert_eq!(movies[1].vector, vec![0.3, 0.4]);
}

#[tokio::test]
async fn test_get_movies_map_end_to_end() {
    // Arrange
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/db/movies/map"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"Alien":[0.1,0.2],"zorro":[0.3,0.4]}"#),
        )
        .mount(&mock_server)
        .await;

    let proxy = proxy_for(&mock_server);

    // Act
    let map = proxy.get_movies_map("db").await.unwrap();

    // Assert
    assert_eq!(map.len(), 2);
    assert_eq!(map["Alien"], vec![0.1, 0.2]);
}

#[tokio::test]
async fn test_not_found_surfaces_as_request_failed() {
    // Arrange
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let proxy = proxy_for(&mock_server);

    // Act
    let err = proxy.search_movies("db", "Matrix").await.unwrap_err();

    // Assert
    assert!(matches!(err, ProxyError::RequestFailed { status: 404 }));
    assert_eq!(err.to_string(), "Request failed: 404");
}

#[tokio::test]
async fn test_search_query_reaches_the_service() {
    // Arrange
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/db/timed/movies/search"))
        .and(query_param("query", "zor"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[{"id":"zorro","vector":[0.3,0.4]}]"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let proxy = proxy_for(&mock_server);

    // Act
    let movies = proxy.search_movies_timed("db", "zor").await.unwrap();

    // Assert (mock expect(1) verifies path and query parameter)
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, "zorro");
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_fault() {
    // Arrange: nothing is listening on this address
    let client = DatabaseClient::builder()
        .base_url("http://127.0.0.1:1/".parse().unwrap())
        .build()
        .unwrap();
    let proxy = DatabaseProxy::new(client);

    // Act
    let err = proxy.get_movies("db").await.unwrap_err();

    // Assert
    assert!(matches!(err, ProxyError::Transport(_)));
    assert_eq!(err.status(), None);
}
