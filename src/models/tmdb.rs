//! Raw TMDB response shapes.
//!
//! Every field is optional or defaulted: TMDB answers an unknown id with a
//! small status object rather than a movie, and that body must still decode
//! into an (empty) movie.
use serde::Deserialize;

/// A movie object as returned by trending, search and movie details
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TmdbMovie {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub runtime: Option<u32>,
}

/// Paged list response from `/trending/movie/day` and `/search/movie`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbPage {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

/// Response from `/movie/{id}/credits`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TmdbCastMember {
    pub name: Option<String>,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

/// Response from `/movie/{id}/videos`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbVideos {
    #[serde(default)]
    pub results: Vec<TmdbVideo>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TmdbVideo {
    #[serde(default)]
    pub key: String,
    #[serde(rename = "type")]
    pub video_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserialization() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "release_date": "2010-07-15",
            "vote_average": 8.369,
            "overview": "Cobb, a skilled thief...",
            "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
            "adult": false,
            "genre_ids": [28, 878]
        }"#;

        let movie: TmdbMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, Some(27205));
        assert_eq!(movie.title.as_deref(), Some("Inception"));
        assert_eq!(movie.vote_average, Some(8.369));
        assert_eq!(movie.runtime, None);
    }

    #[test]
    fn test_not_found_body_decodes_as_empty_movie() {
        let json = r#"{
            "success": false,
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        }"#;

        let movie: TmdbMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie, TmdbMovie::default());
    }

    #[test]
    fn test_page_without_results_is_empty() {
        let page: TmdbPage = serde_json::from_str(r#"{"status_code": 7}"#).unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_video_type_field_renamed() {
        let json = r#"{"key": "YoHD9XEInc0", "type": "Trailer", "site": "YouTube"}"#;
        let video: TmdbVideo = serde_json::from_str(json).unwrap();
        assert_eq!(video.video_type.as_deref(), Some("Trailer"));
        assert_eq!(video.key, "YoHD9XEInc0");
    }
}
