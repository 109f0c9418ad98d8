/// TMDB API provider
///
/// Wraps the three read endpoints the site needs:
/// 1. Trending: /trending/movie/day
/// 2. Search: /search/movie?query=...
/// 3. Detail: /movie/{id}, /movie/{id}/credits, /movie/{id}/videos
///
/// The API key travels as the `api_key` query parameter on every call.
use reqwest::{Client as HttpClient, Url};
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{TmdbCredits, TmdbMovie, TmdbPage, TmdbVideos},
    services::providers::MovieProvider,
};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tmdb_key.clone(), config.tmdb_api_url.clone())
    }

    /// Builds `{api_url}/{segments...}`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| AppError::Internal(format!("Invalid TMDB API URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| AppError::Internal("TMDB API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// GETs `url` with the API key attached and decodes the JSON body.
    ///
    /// A non-success status is logged but the body is still decoded, so a
    /// not-found answer becomes an empty value. Transport and decode failures
    /// are errors.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, &str)],
    ) -> AppResult<T> {
        let path = url.path().to_string();

        let response = self
            .http_client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                path = %path,
                status = %status,
                provider = "tmdb",
                "TMDB returned non-success status"
            );
        }

        let body = response.text().await?;
        tracing::debug!(path = %path, response = %body, "Raw TMDB response");

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                "Failed to deserialize TMDB response"
            );
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })
    }
}

#[async_trait::async_trait]
impl MovieProvider for TmdbProvider {
    async fn trending(&self) -> AppResult<Vec<TmdbMovie>> {
        let url = self.endpoint(&["trending", "movie", "day"])?;
        let page: TmdbPage = self.get_json(url, &[]).await?;

        tracing::info!(
            results = page.results.len(),
            provider = "tmdb",
            "Trending movies fetched"
        );

        Ok(page.results)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<TmdbMovie>> {
        let url = self.endpoint(&["search", "movie"])?;
        let page: TmdbPage = self.get_json(url, &[("query", query)]).await?;

        tracing::info!(
            query = %query,
            results = page.results.len(),
            provider = "tmdb",
            "Title search completed"
        );

        Ok(page.results)
    }

    async fn movie(&self, id: &str) -> AppResult<TmdbMovie> {
        let url = self.endpoint(&["movie", id])?;
        self.get_json(url, &[]).await
    }

    async fn credits(&self, id: &str) -> AppResult<TmdbCredits> {
        let url = self.endpoint(&["movie", id, "credits"])?;
        self.get_json(url, &[]).await
    }

    async fn videos(&self, id: &str) -> AppResult<TmdbVideos> {
        let url = self.endpoint(&["movie", id, "videos"])?;
        self.get_json(url, &[]).await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider(api_url: &str) -> TmdbProvider {
        TmdbProvider::new("test_key".to_string(), api_url.to_string())
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let provider = create_test_provider("https://api.themoviedb.org/3");
        let url = provider.endpoint(&["trending", "movie", "day"]).unwrap();
        assert_eq!(url.as_str(), "https://api.themoviedb.org/3/trending/movie/day");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let provider = create_test_provider("https://api.themoviedb.org/3/");
        let url = provider.endpoint(&["movie", "27205", "credits"]).unwrap();
        assert_eq!(url.as_str(), "https://api.themoviedb.org/3/movie/27205/credits");
    }

    #[test]
    fn test_endpoint_encodes_raw_id() {
        let provider = create_test_provider("https://api.themoviedb.org/3");
        let url = provider.endpoint(&["movie", "1?x=2"]).unwrap();
        assert_eq!(url.path(), "/3/movie/1%3Fx=2");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_endpoint_invalid_base() {
        let provider = create_test_provider("not a url");
        assert!(matches!(
            provider.endpoint(&["movie", "1"]),
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn test_name() {
        assert_eq!(create_test_provider("https://api.themoviedb.org/3").name(), "tmdb");
    }
}
