use reqwest::Client;
use serde::Deserialize;

use crate::error::{ReelError, Result};
use crate::types::{Genre, Movie, MovieDetails, MoviePage};

pub const API_BASE: &str = "https://api.themoviedb.org/3";
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

pub struct Tmdb {
    client: Client,
    base_url: String,
    api_key: String,
    language: Option<String>,
}

impl std::fmt::Debug for Tmdb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tmdb").finish_non_exhaustive()
    }
}

impl Tmdb {
    pub fn new(api_key: String, language: Option<String>) -> Self {
        Self::with_base_url(api_key, language, API_BASE.to_string())
    }

    /// Point the client at a different API root (used by tests)
    pub fn with_base_url(api_key: String, language: Option<String>, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            language,
        }
    }

    fn api_url(&self, path: &str) -> String {
        let mut url = format!("{}{}?api_key={}", self.base_url, path, self.api_key);
        if let Some(language) = &self.language {
            url.push_str("&language=");
            url.push_str(&urlencoding::encode(language));
        }
        url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ReelError::Api(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            // TMDB error bodies carry a human-readable status_message
            let message = serde_json::from_str::<TmdbStatus>(&text)
                .map(|s| s.status_message)
                .unwrap_or(text);
            return Err(ReelError::Api(format!("TMDB API {}: {}", status, message)));
        }

        response
            .json()
            .await
            .map_err(|e| ReelError::Api(e.to_string()))
    }

    pub async fn popular(&self, page: u32) -> Result<MoviePage> {
        let url = format!("{}&page={}", self.api_url("/movie/popular"), page);
        let response: TmdbListResponse = self.get_json(&url).await?;
        Ok(map_page(page, response))
    }

    pub async fn search(&self, query: &str, page: u32) -> Result<MoviePage> {
        let url = format!(
            "{}&query={}&page={}",
            self.api_url("/search/movie"),
            urlencoding::encode(query),
            page
        );
        let response: TmdbListResponse = self.get_json(&url).await?;
        Ok(map_page(page, response))
    }

    pub async fn details(&self, id: u64) -> Result<MovieDetails> {
        let url = self.api_url(&format!("/movie/{}", id));
        let movie: TmdbMovieDetails = self.get_json(&url).await?;

        Ok(MovieDetails {
            id: movie.id,
            title: movie.title.unwrap_or_default(),
            release_date: movie.release_date.unwrap_or_default(),
            poster_path: movie.poster_path,
            backdrop_path: movie.backdrop_path,
            overview: movie.overview.unwrap_or_default(),
            runtime: movie.runtime.unwrap_or(0),
            genres: movie
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| Genre {
                    id: g.id,
                    name: g.name,
                })
                .collect(),
        })
    }
}

// TMDB API response types

#[derive(Deserialize)]
struct TmdbStatus {
    status_message: String,
}

#[derive(Deserialize)]
struct TmdbListResponse {
    results: Option<Vec<TmdbMovie>>,
    page: Option<u32>,
    total_pages: Option<u32>,
}

#[derive(Deserialize)]
struct TmdbMovie {
    id: u64,
    title: Option<String>,
    release_date: Option<String>,
    poster_path: Option<String>,
    overview: Option<String>,
}

#[derive(Deserialize)]
struct TmdbMovieDetails {
    id: u64,
    title: Option<String>,
    release_date: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    overview: Option<String>,
    runtime: Option<u32>,
    genres: Option<Vec<TmdbGenre>>,
}

#[derive(Deserialize)]
struct TmdbGenre {
    id: u64,
    name: String,
}

/// A body without `results` is a valid empty page, not an error. Missing
/// pagination metadata collapses to "no further pages".
fn map_page(requested_page: u32, response: TmdbListResponse) -> MoviePage {
    let page = response.page.unwrap_or(requested_page);
    let total_pages = response.total_pages.unwrap_or(page);

    let movies = response
        .results
        .unwrap_or_default()
        .into_iter()
        .map(|m| Movie {
            id: m.id,
            title: m.title.unwrap_or_default(),
            release_date: m.release_date.unwrap_or_default(),
            poster_path: m.poster_path,
            overview: m.overview.unwrap_or_default(),
        })
        .collect();

    MoviePage {
        movies,
        page,
        total_pages,
    }
}

/// Poster thumbnail for list rows
pub fn poster_thumb_url(path: &str) -> String {
    format!("{}/w92{}", IMAGE_BASE, path)
}

/// Larger backdrop for the details header
pub fn backdrop_url(path: &str) -> String {
    format!("{}/w500{}", IMAGE_BASE, path)
}

/// TMDB web page for a movie, for open-in-browser and yank
pub fn movie_url(id: u64) -> String {
    format!("https://www.themoviedb.org/movie/{}", id)
}
