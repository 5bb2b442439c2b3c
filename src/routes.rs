use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{EditErrors, EditForm, NewMovie},
    ranking, templates,
};

/// List view. Ranks are recomputed and written back on every render, even
/// when no rating changed.
pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let mut movies = state.store.list_by_rating().await?;
    ranking::assign(&mut movies);

    let ranks: Vec<(i32, i32)> = movies.iter().map(|m| (m.id, m.ranking)).collect();
    state.store.save_rankings(&ranks).await?;

    Ok(Html(templates::index_page(&movies)))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
) -> AppResult<Html<String>> {
    let movie = state.store.find(movie_id).await?.ok_or(AppError::NotFound("movie"))?;

    let form = EditForm { rating: movie.rating.to_string(), review: movie.review.clone() };
    Ok(Html(templates::edit_page(movie.id, &movie.title, &form, &EditErrors::default())))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let movie = state.store.find(movie_id).await?.ok_or(AppError::NotFound("movie"))?;

    match form.validate() {
        Ok(input) => {
            state.store.update_review(movie.id, input.rating, input.review).await?;
            tracing::debug!(id = movie.id, title = %movie.title, "updated movie");
            Ok(Redirect::to("/").into_response())
        },
        Err(errors) => {
            Ok(Html(templates::edit_page(movie.id, &movie.title, &form, &errors)).into_response())
        },
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
) -> AppResult<Redirect> {
    state.store.delete(movie_id).await?;
    tracing::debug!(id = movie_id, "deleted movie");
    Ok(Redirect::to("/"))
}

pub async fn select(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(templates::select_page(state.catalog.candidates(), &state.config.image_base_url))
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i64>,
) -> AppResult<Redirect> {
    let candidate = state.catalog.get(movie_id).ok_or(AppError::NotFound("movie"))?;

    let new = NewMovie::from_candidate(candidate, &state.config.image_base_url)?;
    let movie = state.store.insert(new).await?;
    tracing::info!(id = movie.id, title = %movie.title, "added movie from catalog");

    Ok(Redirect::to("/"))
}
