use serde::Serialize;

use crate::config::Config;

use super::tmdb::{TmdbCastMember, TmdbMovie, TmdbVideo};

/// Image size prefix for posters
pub const POSTER_SIZE: &str = "w500";

/// Image size prefix for cast profile pictures
pub const PROFILE_SIZE: &str = "w200";

/// Number of cast members shown on a detail page
pub const MAX_CAST: usize = 6;

/// Video type that qualifies as a trailer
pub const TRAILER_TYPE: &str = "Trailer";

/// Base URLs used to turn TMDB paths and keys into links
#[derive(Debug, Clone, PartialEq)]
pub struct MediaUrls {
    pub poster_base: String,
    pub profile_base: String,
    pub trailer_base: String,
}

impl MediaUrls {
    pub fn new(image_url: &str, trailer_url: &str) -> Self {
        let image_url = image_url.trim_end_matches('/');
        Self {
            poster_base: format!("{}/{}", image_url, POSTER_SIZE),
            profile_base: format!("{}/{}", image_url, PROFILE_SIZE),
            trailer_base: trailer_url.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.tmdb_image_url, &config.trailer_url)
    }

    pub fn poster(&self, path: Option<&str>) -> String {
        image_url(&self.poster_base, path)
    }

    pub fn profile(&self, path: Option<&str>) -> String {
        image_url(&self.profile_base, path)
    }
}

/// First four characters of a `YYYY-MM-DD` release date; empty in, empty out
pub fn release_year(release_date: &str) -> String {
    release_date.chars().take(4).collect()
}

/// Joins an image base with a TMDB path, or yields "" when there is no path
pub fn image_url(base: &str, path: Option<&str>) -> String {
    match path {
        Some(path) if !path.is_empty() => format!("{}{}", base, path),
        _ => String::new(),
    }
}

/// Rating text as the provider sent it; whole numbers keep their ".0"
pub fn format_rating(vote_average: Option<f64>) -> Option<String> {
    vote_average.map(|rating| format!("{:?}", rating))
}

/// Link to the first video of type "Trailer", in provider order.
///
/// Returns an empty string when the list holds no trailer.
pub fn select_trailer(videos: &[TmdbVideo], trailer_base: &str) -> String {
    videos
        .iter()
        .find(|video| video.video_type.as_deref() == Some(TRAILER_TYPE))
        .map(|video| format!("{}{}", trailer_base, video.key))
        .unwrap_or_default()
}

/// A movie tile on the trending / search grid
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovieView {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub year: String,
    pub rating: Option<String>,
    pub overview: Option<String>,
    pub poster: String,
}

impl MovieView {
    pub fn from_tmdb(movie: TmdbMovie, urls: &MediaUrls) -> Self {
        Self {
            id: movie.id,
            year: release_year(movie.release_date.as_deref().unwrap_or_default()),
            poster: urls.poster(movie.poster_path.as_deref()),
            title: movie.title,
            rating: format_rating(movie.vote_average),
            overview: movie.overview,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CastMember {
    pub name: Option<String>,
    pub character: Option<String>,
    pub image: String,
}

impl CastMember {
    pub fn from_tmdb(member: TmdbCastMember, urls: &MediaUrls) -> Self {
        Self {
            image: urls.profile(member.profile_path.as_deref()),
            name: member.name,
            character: member.character,
        }
    }
}

/// Everything the detail page shows for one movie
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailView {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub rating: Option<String>,
    pub year: String,
    pub overview: Option<String>,
    pub poster: String,
    pub runtime: Option<u32>,
    pub cast: Vec<CastMember>,
    pub trailer: String,
}

impl DetailView {
    pub fn compose(
        movie: TmdbMovie,
        cast: Vec<TmdbCastMember>,
        videos: &[TmdbVideo],
        urls: &MediaUrls,
    ) -> Self {
        let cast = cast
            .into_iter()
            .take(MAX_CAST)
            .map(|member| CastMember::from_tmdb(member, urls))
            .collect();

        Self {
            id: movie.id,
            year: release_year(movie.release_date.as_deref().unwrap_or_default()),
            poster: urls.poster(movie.poster_path.as_deref()),
            title: movie.title,
            rating: format_rating(movie.vote_average),
            overview: movie.overview,
            runtime: movie.runtime,
            cast,
            trailer: select_trailer(videos, &urls.trailer_base),
        }
    }
}
