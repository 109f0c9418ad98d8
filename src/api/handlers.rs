use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::SignedCookieJar;
use tera::Context;

use crate::{
    error::AppResult,
    models::{AddFavoriteForm, Credentials, SearchForm},
    services::{accounts, movies, watchlist},
};

use super::{
    session::{self, AuthUser, Session},
    AppState,
};

/// Body returned when a login attempt does not match
pub const INVALID_LOGIN: &str = "Invalid Login";

fn page_context(session: &Session) -> Context {
    let mut ctx = Context::new();
    ctx.insert("user", &session.user());
    ctx
}

fn render(state: &AppState, template: &str, ctx: &Context) -> AppResult<Html<String>> {
    Ok(Html(state.templates.render(template, ctx)?))
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Home page: today's trending movies
pub async fn index(State(state): State<AppState>, session: Session) -> AppResult<Html<String>> {
    let movies = movies::trending(state.provider.as_ref(), &state.urls).await?;

    let mut ctx = page_context(&session);
    ctx.insert("movies", &movies);
    render(&state, "index.html", &ctx)
}

/// Search results, rendered with the home page grid
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let movies = movies::search(state.provider.as_ref(), &form.name, &state.urls).await?;

    let mut ctx = page_context(&session);
    ctx.insert("movies", &movies);
    ctx.insert("query", &form.name);
    render(&state, "index.html", &ctx)
}

/// Detail page with cast and trailer
pub async fn movie_detail(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let movie = movies::detail(state.provider.as_ref(), &id, &state.urls).await?;

    let mut ctx = page_context(&session);
    ctx.insert("movie", &movie);
    render(&state, "detail.html", &ctx)
}

pub async fn register_page(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Html<String>> {
    render(&state, "register.html", &page_context(&session))
}

pub async fn register(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> AppResult<Redirect> {
    accounts::register(&state.db, &credentials).await?;
    Ok(Redirect::to("/login"))
}

pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Html<String>> {
    render(&state, "login.html", &page_context(&session))
}

/// Checks the submitted pair; on success starts a session and goes home,
/// otherwise answers with plain text and no redirect.
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(credentials): Form<Credentials>,
) -> AppResult<Response> {
    match accounts::authenticate(&state.db, &credentials).await? {
        Some(user) => Ok((session::start(jar, user.username), Redirect::to("/")).into_response()),
        None => Ok(INVALID_LOGIN.into_response()),
    }
}

pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    (session::end(jar), Redirect::to("/login"))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Form(form): Form<AddFavoriteForm>,
) -> AppResult<Redirect> {
    watchlist::add(&state.db, form, &user).await?;
    Ok(Redirect::to("/watchlist"))
}

pub async fn watchlist(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> AppResult<Html<String>> {
    let movies = watchlist::list(&state.db, &user).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &user);
    ctx.insert("movies", &movies);
    render(&state, "watchlist.html", &ctx)
}

/// Removes the movie from every watchlist.
// NOTE: not scoped to the session user and needs no login.
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    watchlist::remove(&state.db, &id).await?;
    Ok(Redirect::to("/watchlist"))
}
