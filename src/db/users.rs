use sqlx::Connection;

use crate::{error::AppResult, models::User};

use super::Database;

impl Database {
    /// Inserts a user row and returns its generated id. Duplicate usernames are accepted.
    pub async fn create_user(&self, username: &str, password: &str) -> AppResult<i64> {
        let mut conn = self.connect().await?;

        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password)
            .execute(&mut conn)
            .await?;

        conn.close().await?;
        Ok(result.last_insert_rowid())
    }

    /// Finds a user whose username and password both match exactly
    pub async fn find_user(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        let mut conn = self.connect().await?;

        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE username = ? AND password = ?",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&mut conn)
        .await?;

        conn.close().await?;
        Ok(user)
    }
}
