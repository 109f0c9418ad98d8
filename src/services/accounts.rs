use crate::{
    db::Database,
    error::AppResult,
    models::{Credentials, User},
};

/// Stores a new account. No duplicate check, no password policy.
pub async fn register(db: &Database, credentials: &Credentials) -> AppResult<i64> {
    let id = db
        .create_user(&credentials.username, &credentials.password)
        .await?;

    tracing::info!(user_id = id, username = %credentials.username, "User registered");
    Ok(id)
}

/// Returns the matching user, or `None` when the pair does not match exactly
pub async fn authenticate(db: &Database, credentials: &Credentials) -> AppResult<Option<User>> {
    let user = db
        .find_user(&credentials.username, &credentials.password)
        .await?;

    match &user {
        Some(user) => tracing::info!(user_id = user.id, username = %user.username, "Login succeeded"),
        None => tracing::info!(username = %credentials.username, "Login failed"),
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn credentials(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let dir = TempDir::new().unwrap();
        let db = Database::new(dir.path().join("accounts.db"));
        db.init().await.unwrap();

        register(&db, &credentials("neo", "redpill")).await.unwrap();

        let user = authenticate(&db, &credentials("neo", "redpill")).await.unwrap();
        assert_eq!(user.map(|u| u.username), Some("neo".to_string()));
        assert!(authenticate(&db, &credentials("neo", "bluepill"))
            .await
            .unwrap()
            .is_none());
    }
}
