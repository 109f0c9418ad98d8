use sqlx::Connection;

use crate::{error::AppResult, models::FavoriteEntry};

use super::Database;

impl Database {
    /// Unconditional insert; adding the same movie twice yields two rows
    pub async fn add_favorite(&self, entry: &FavoriteEntry) -> AppResult<()> {
        let mut conn = self.connect().await?;

        sqlx::query(
            "INSERT INTO fav (id, title, poster, rating, year, user) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&entry.external_id)
        .bind(&entry.title)
        .bind(&entry.poster)
        .bind(&entry.rating)
        .bind(&entry.year)
        .bind(&entry.owner)
        .execute(&mut conn)
        .await?;

        conn.close().await?;
        Ok(())
    }

    /// All favorites owned by `owner`, oldest first
    pub async fn list_favorites(&self, owner: &str) -> AppResult<Vec<FavoriteEntry>> {
        let mut conn = self.connect().await?;

        let entries = sqlx::query_as::<_, FavoriteEntry>(
            "SELECT id, title, poster, rating, year, user FROM fav WHERE user = ? ORDER BY rowid",
        )
        .bind(owner)
        .fetch_all(&mut conn)
        .await?;

        conn.close().await?;
        Ok(entries)
    }

    /// Deletes every row with this movie id, whoever owns it.
    ///
    /// Returns the number of rows removed; zero is not an error.
    pub async fn remove_favorite(&self, external_id: &str) -> AppResult<u64> {
        let mut conn = self.connect().await?;

        let result = sqlx::query("DELETE FROM fav WHERE id = ?")
            .bind(external_id)
            .execute(&mut conn)
            .await?;

        conn.close().await?;
        Ok(result.rows_affected())
    }
}
