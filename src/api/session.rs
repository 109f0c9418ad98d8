//! Cookie-backed login session.
//!
//! The authenticated username lives in a signed cookie named `user`. There is
//! no server-side session record: a valid signature is the whole proof.
use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};

/// Cookie name the username is stored under
pub const SESSION_USER_KEY: &str = "user";

/// Request-scoped view of the session: who, if anyone, is logged in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    fn from_jar(jar: &SignedCookieJar) -> Self {
        Self {
            user: jar
                .get(SESSION_USER_KEY)
                .map(|cookie| cookie.value().to_string()),
        }
    }
}

async fn jar_from_parts<S>(parts: &mut Parts, state: &S) -> SignedCookieJar
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    SignedCookieJar::<Key>::from_request_parts(parts, state)
        .await
        .unwrap_or_else(|never| match never {})
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = jar_from_parts(parts, state).await;
        Ok(Self::from_jar(&jar))
    }
}

/// Username of the logged-in user.
///
/// Extracting it from a request without a valid session rejects with a
/// redirect to `/login`, so the handler body never runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = jar_from_parts(parts, state).await;
        match Session::from_jar(&jar).user {
            Some(user) => Ok(AuthUser(user)),
            None => {
                tracing::debug!(uri = %parts.uri, "No session, redirecting to login");
                Err(Redirect::to("/login"))
            }
        }
    }
}

/// Adds the signed session cookie for `username`
pub fn start(jar: SignedCookieJar, username: String) -> SignedCookieJar {
    jar.add(
        Cookie::build((SESSION_USER_KEY, username))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Clears the session cookie
pub fn end(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build((SESSION_USER_KEY, "")).path("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> Key {
        Key::derive_from(b"0123456789abcdef0123456789abcdef")
    }

    #[test]
    fn test_start_sets_signed_user() {
        let jar = start(SignedCookieJar::new(key()), "neo".to_string());
        let session = Session::from_jar(&jar);
        assert_eq!(session.user(), Some("neo"));
    }

    #[test]
    fn test_end_clears_user() {
        let jar = start(SignedCookieJar::new(key()), "neo".to_string());
        let jar = end(jar);
        assert_eq!(Session::from_jar(&jar), Session::default());
    }

    #[test]
    fn test_empty_jar_is_anonymous() {
        let session = Session::from_jar(&SignedCookieJar::new(key()));
        assert_eq!(session.user(), None);
    }
}
