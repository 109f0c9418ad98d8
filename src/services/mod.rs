pub mod accounts;
pub mod movies;
pub mod providers;
pub mod watchlist;

pub use providers::{MovieProvider, TmdbProvider};
