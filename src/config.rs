use serde::Deserialize;

/// Signing secret used when `SESSION_SECRET` is not set.
///
/// Anyone who knows it can forge a session cookie for any username, so
/// deployments should always override it.
pub const DEFAULT_SESSION_SECRET: &str = "movie_secret::watchlist-session-signing-key";

/// Minimum length accepted for the session signing secret
pub const MIN_SESSION_SECRET_LEN: usize = 32;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key, attached to every upstream request
    pub tmdb_key: String,

    /// TMDB REST API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// TMDB image CDN base URL (size prefix is appended per use)
    #[serde(default = "default_tmdb_image_url")]
    pub tmdb_image_url: String,

    /// Prefix a video key is appended to when building a trailer link
    #[serde(default = "default_trailer_url")]
    pub trailer_url: String,

    /// Path of the SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Directory holding the Tera page templates
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Secret the session cookie is signed with
    #[serde(default = "default_session_secret")]
    pub session_secret: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_trailer_url() -> String {
    "https://www.youtube.com/watch?v=".to_string()
}

fn default_database_path() -> String {
    "watchlist.db".to_string()
}

fn default_templates_dir() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/templates").to_string()
}

fn default_session_secret() -> String {
    DEFAULT_SESSION_SECRET.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tmdb_key.trim().is_empty() {
            anyhow::bail!("TMDB_KEY must not be empty");
        }
        if self.session_secret.len() < MIN_SESSION_SECRET_LEN {
            anyhow::bail!(
                "SESSION_SECRET must be at least {} bytes",
                MIN_SESSION_SECRET_LEN
            );
        }
        Ok(())
    }

    pub fn uses_default_session_secret(&self) -> bool {
        self.session_secret == DEFAULT_SESSION_SECRET
    }

    /// Glob Tera loads templates from
    pub fn templates_glob(&self) -> String {
        format!("{}/**/*", self.templates_dir.trim_end_matches('/'))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
