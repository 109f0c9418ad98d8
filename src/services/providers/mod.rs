/// Movie metadata provider abstraction
///
/// Page handlers never talk HTTP to the metadata source directly; they go
/// through this trait so the source can be swapped for a test double.
use crate::{
    error::AppResult,
    models::{TmdbCredits, TmdbMovie, TmdbVideos},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
///
/// Every method is a single read-only upstream call. Nothing is cached or
/// retried: each page view fetches again.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Movies trending today
    async fn trending(&self) -> AppResult<Vec<TmdbMovie>>;

    /// Movies whose title matches `query`
    async fn search(&self, query: &str) -> AppResult<Vec<TmdbMovie>>;

    /// Details for one movie.
    ///
    /// `id` is passed through unvalidated; an unknown id yields an empty movie
    /// rather than an error.
    async fn movie(&self, id: &str) -> AppResult<TmdbMovie>;

    /// Cast list for one movie, in billing order
    async fn credits(&self, id: &str) -> AppResult<TmdbCredits>;

    /// Videos attached to one movie, in provider order
    async fn videos(&self, id: &str) -> AppResult<TmdbVideos>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
