use crate::{
    error::AppResult,
    models::{DetailView, MediaUrls, MovieView},
    services::providers::MovieProvider,
};

/// Today's trending movies as grid tiles
pub async fn trending(provider: &dyn MovieProvider, urls: &MediaUrls) -> AppResult<Vec<MovieView>> {
    let movies = provider.trending().await?;
    Ok(movies
        .into_iter()
        .map(|movie| MovieView::from_tmdb(movie, urls))
        .collect())
}

/// Search results for `query` as grid tiles
pub async fn search(
    provider: &dyn MovieProvider,
    query: &str,
    urls: &MediaUrls,
) -> AppResult<Vec<MovieView>> {
    let movies = provider.search(query).await?;
    Ok(movies
        .into_iter()
        .map(|movie| MovieView::from_tmdb(movie, urls))
        .collect())
}

/// Detail page for one movie.
///
/// Issues the movie, credits and videos calls one after another.
pub async fn detail(
    provider: &dyn MovieProvider,
    id: &str,
    urls: &MediaUrls,
) -> AppResult<DetailView> {
    let movie = provider.movie(id).await?;
    let credits = provider.credits(id).await?;
    let videos = provider.videos(id).await?;

    tracing::debug!(
        movie_id = %id,
        cast = credits.cast.len(),
        videos = videos.results.len(),
        provider = provider.name(),
        "Movie detail fetched"
    );

    Ok(DetailView::compose(movie, credits.cast, &videos.results, urls))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        models::{TmdbCastMember, TmdbCredits, TmdbMovie, TmdbVideo, TmdbVideos},
        services::providers::MockMovieProvider,
    };

    fn urls() -> MediaUrls {
        MediaUrls::new("https://image.tmdb.org/t/p", "https://www.youtube.com/watch?v=")
    }

    fn movie(id: u64, title: &str) -> TmdbMovie {
        TmdbMovie {
            id: Some(id),
            title: Some(title.to_string()),
            release_date: Some("1999-03-31".to_string()),
            vote_average: Some(8.2),
            poster_path: Some(format!("/{}.jpg", id)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_trending_shapes_results() {
        let mut provider = MockMovieProvider::new();
        provider
            .expect_trending()
            .times(1)
            .returning(|| Ok(vec![movie(603, "The Matrix"), TmdbMovie::default()]));

        let views = trending(&provider, &urls()).await.unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].year, "1999");
        assert_eq!(views[0].poster, "https://image.tmdb.org/t/p/w500/603.jpg");
        assert_eq!(views[1].poster, "");
    }

    #[tokio::test]
    async fn test_search_passes_query() {
        let mut provider = MockMovieProvider::new();
        provider
            .expect_search()
            .withf(|query| query == "matrix")
            .times(1)
            .returning(|_| Ok(vec![movie(603, "The Matrix")]));

        let views = search(&provider, "matrix", &urls()).await.unwrap();
        assert_eq!(views[0].title.as_deref(), Some("The Matrix"));
    }

    #[tokio::test]
    async fn test_search_propagates_errors() {
        let mut provider = MockMovieProvider::new();
        provider
            .expect_search()
            .returning(|_| Err(AppError::ExternalApi("bad json".to_string())));

        assert!(search(&provider, "matrix", &urls()).await.is_err());
    }

    #[tokio::test]
    async fn test_detail_makes_three_calls() {
        let mut provider = MockMovieProvider::new();
        provider
            .expect_movie()
            .withf(|id| id == "603")
            .times(1)
            .returning(|_| Ok(movie(603, "The Matrix")));
        provider.expect_credits().times(1).returning(|_| {
            Ok(TmdbCredits {
                cast: vec![TmdbCastMember {
                    name: Some("Keanu Reeves".to_string()),
                    character: Some("Neo".to_string()),
                    profile_path: None,
                }],
            })
        });
        provider.expect_videos().times(1).returning(|_| {
            Ok(TmdbVideos {
                results: vec![TmdbVideo {
                    key: "vKQi3bBA1y8".to_string(),
                    video_type: Some("Trailer".to_string()),
                    ..Default::default()
                }],
            })
        });
        provider.expect_name().return_const("mock");

        let detail = detail(&provider, "603", &urls()).await.unwrap();
        assert_eq!(detail.id, Some(603));
        assert_eq!(detail.cast[0].character.as_deref(), Some("Neo"));
        assert_eq!(detail.cast[0].image, "");
        assert_eq!(detail.trailer, "https://www.youtube.com/watch?v=vKQi3bBA1y8");
    }
}
