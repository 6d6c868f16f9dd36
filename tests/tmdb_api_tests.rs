use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reel::tmdb::Tmdb;

fn client(server: &MockServer) -> Tmdb {
    Tmdb::with_base_url("test-key".to_string(), None, server.uri())
}

#[tokio::test]
async fn search_parses_page_and_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("query", "the dark knight"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "page": 1,
            "total_pages": 5,
            "results": [
                {
                    "id": 155,
                    "title": "The Dark Knight",
                    "release_date": "2008-07-16",
                    "poster_path": "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
                    "overview": "Batman raises the stakes in his war on crime."
                },
                {
                    "id": 272,
                    "title": "Batman Begins",
                    "release_date": "2005-06-10",
                    "poster_path": null,
                    "overview": ""
                }
            ]
        })))
        .mount(&server)
        .await;

    let page = client(&server).search("the dark knight", 1).await.unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 5);
    assert!(page.has_more());
    assert_eq!(page.movies.len(), 2);
    assert_eq!(page.movies[0].id, 155);
    assert_eq!(
        page.movies[0].poster_path.as_deref(),
        Some("/qJ2tW6WMUDux911r6m7haRef0WH.jpg")
    );
    assert_eq!(page.movies[1].title, "Batman Begins");
    assert!(page.movies[1].poster_path.is_none());
}

#[tokio::test]
async fn popular_hits_popular_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "page": 2,
            "total_pages": 2,
            "results": [
                {"id": 603, "title": "The Matrix", "release_date": "1999-03-31", "poster_path": null, "overview": ""}
            ]
        })))
        .mount(&server)
        .await;

    let page = client(&server).popular(2).await.unwrap();

    assert_eq!(page.movies.len(), 1);
    assert_eq!(page.page, 2);
    assert!(!page.has_more());
}

#[tokio::test]
async fn language_is_sent_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .and(query_param("language", "fr-FR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "page": 1,
            "total_pages": 1,
            "results": []
        })))
        .mount(&server)
        .await;

    let tmdb = Tmdb::with_base_url(
        "test-key".to_string(),
        Some("fr-FR".to_string()),
        server.uri(),
    );

    let page = tmdb.popular(1).await.unwrap();
    assert!(page.movies.is_empty());
}

#[tokio::test]
async fn missing_results_field_yields_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "page": 1,
            "total_pages": 1
        })))
        .mount(&server)
        .await;

    let page = client(&server).search("nothing", 1).await.unwrap();

    assert!(page.movies.is_empty());
    assert!(!page.has_more());
}

#[tokio::test]
async fn malformed_body_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client(&server).search("batman", 1).await.unwrap_err();

    assert!(err.to_string().starts_with("API error"));
}

#[tokio::test]
async fn details_not_found_surfaces_status_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&server)
        .await;

    let err = client(&server).details(999_999).await.unwrap_err();

    assert!(err.to_string().contains("could not be found"));
}

#[tokio::test]
async fn details_maps_full_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/272"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 272,
            "title": "Batman Begins",
            "release_date": "2005-06-10",
            "poster_path": "/poster.jpg",
            "backdrop_path": "/backdrop.jpg",
            "overview": "Bruce Wayne returns to Gotham.",
            "runtime": 140,
            "genres": [
                {"id": 28, "name": "Action"},
                {"id": 80, "name": "Crime"}
            ]
        })))
        .mount(&server)
        .await;

    let movie = client(&server).details(272).await.unwrap();

    assert_eq!(movie.id, 272);
    assert_eq!(movie.title, "Batman Begins");
    assert_eq!(movie.runtime, 140);
    assert_eq!(movie.backdrop_path.as_deref(), Some("/backdrop.jpg"));
    assert_eq!(movie.genres.len(), 2);
    assert_eq!(movie.genres[0].name, "Action");
    assert_eq!(movie.genres[1].name, "Crime");
}

#[tokio::test]
async fn details_defaults_absent_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 5
        })))
        .mount(&server)
        .await;

    let movie = client(&server).details(5).await.unwrap();

    assert_eq!(movie.id, 5);
    assert!(movie.title.is_empty());
    assert_eq!(movie.runtime, 0);
    assert!(movie.genres.is_empty());
    assert!(movie.poster_path.is_none());
    assert!(movie.backdrop_path.is_none());
}
