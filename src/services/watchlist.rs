use crate::{
    db::Database,
    error::AppResult,
    models::{AddFavoriteForm, FavoriteEntry},
};

pub async fn add(db: &Database, form: AddFavoriteForm, owner: &str) -> AppResult<()> {
    let entry = form.into_entry(owner);
    db.add_favorite(&entry).await?;

    tracing::info!(
        movie_id = %entry.external_id,
        owner = %owner,
        "Added to watchlist"
    );
    Ok(())
}

pub async fn list(db: &Database, owner: &str) -> AppResult<Vec<FavoriteEntry>> {
    db.list_favorites(owner).await
}

/// Removes every watchlist row for `external_id`, across all owners
pub async fn remove(db: &Database, external_id: &str) -> AppResult<u64> {
    let removed = db.remove_favorite(external_id).await?;

    tracing::info!(movie_id = %external_id, removed, "Removed from watchlist");
    Ok(removed)
}
