use serde::{Deserialize, Serialize};

/// A row of the `users` table.
///
/// Usernames carry no uniqueness constraint and the password is stored as
/// submitted.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// A row of the `fav` table
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct FavoriteEntry {
    /// TMDB movie id
    #[sqlx(rename = "id")]
    pub external_id: String,
    pub title: String,
    pub poster: String,
    pub rating: String,
    pub year: String,
    /// Username of the owning user
    #[sqlx(rename = "user")]
    pub owner: String,
}

/// Form body of `POST /login` and `POST /register`
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Form body of `POST /search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchForm {
    pub name: String,
}

/// Form body of `POST /addfav`; every field must be present
#[derive(Debug, Clone, Deserialize)]
pub struct AddFavoriteForm {
    pub id: String,
    pub title: String,
    pub poster: String,
    pub rating: String,
    pub year: String,
}

impl AddFavoriteForm {
    pub fn into_entry(self, owner: &str) -> FavoriteEntry {
        FavoriteEntry {
            external_id: self.id,
            title: self.title,
            poster: self.poster,
            rating: self.rating,
            year: self.year,
            owner: owner.to_string(),
        }
    }
}
