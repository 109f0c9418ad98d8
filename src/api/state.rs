use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use tera::Tera;

use crate::{
    config::Config,
    db::Database,
    models::MediaUrls,
    services::{MovieProvider, TmdbProvider},
};

/// Shared application state.
///
/// Built once from `Config` at startup; every field is immutable afterwards.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub provider: Arc<dyn MovieProvider>,
    pub templates: Arc<Tera>,
    pub urls: Arc<MediaUrls>,
    cookie_key: Key,
}

impl AppState {
    /// Creates state around an explicit provider
    pub fn new(config: &Config, provider: Arc<dyn MovieProvider>) -> anyhow::Result<Self> {
        config.validate()?;

        let templates = Tera::new(&config.templates_glob())
            .map_err(|e| anyhow::anyhow!("Failed to load templates: {}", e))?;

        tracing::debug!(
            templates = templates.get_template_names().count(),
            provider = provider.name(),
            "Application state created"
        );

        Ok(Self {
            db: Database::new(&config.database_path),
            provider,
            templates: Arc::new(templates),
            urls: Arc::new(MediaUrls::from_config(config)),
            cookie_key: Key::derive_from(config.session_secret.as_bytes()),
        })
    }

    /// Creates state backed by the TMDB API
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(config, Arc::new(TmdbProvider::from_config(config)))
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
