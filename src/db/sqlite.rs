use std::path::{Path, PathBuf};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    ConnectOptions, Connection,
};

use crate::error::AppResult;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT,
        password TEXT
    )
"#;

const CREATE_FAV_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS fav (
        id TEXT,
        title TEXT,
        poster TEXT,
        rating TEXT,
        year TEXT,
        user TEXT
    )
"#;

/// Handle to the single-file SQLite store.
///
/// Holds no open connection: each operation connects, runs its statements
/// and closes again, so the handle is cheap to clone into every request.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Database {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        Self { path, options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection for one operation
    pub(crate) async fn connect(&self) -> AppResult<SqliteConnection> {
        Ok(self.options.connect().await?)
    }

    /// Creates both tables if they do not exist yet. Never alters existing ones.
    pub async fn init(&self) -> AppResult<()> {
        let mut conn = self.connect().await?;

        sqlx::query(CREATE_USERS_TABLE).execute(&mut conn).await?;
        sqlx::query(CREATE_FAV_TABLE).execute(&mut conn).await?;

        conn.close().await?;

        tracing::info!(path = %self.path.display(), "Database schema ready");
        Ok(())
    }
}
