pub mod movie;
pub mod tmdb;
pub mod user;

pub use movie::{CastMember, DetailView, MediaUrls, MovieView};
pub use tmdb::{TmdbCastMember, TmdbCredits, TmdbMovie, TmdbPage, TmdbVideo, TmdbVideos};
pub use user::{AddFavoriteForm, Credentials, FavoriteEntry, SearchForm, User};
