//! Genre pages

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;

use super::error::{ApiError, ApiResult};
use super::row_id;
use crate::domain::{DomainError, NewGenre, ValidationErrors};
use crate::infrastructure::AppState;
use crate::views::genre as view;

const GENRE_LIST: &str = "/catalog/genres";

/// Submitted genre form
#[derive(Debug, Default, Deserialize)]
pub struct GenreForm {
    #[serde(default)]
    pub name: String,
}

impl GenreForm {
    pub fn validate(&self) -> Result<NewGenre, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors
            .field("name", &self.name)
            .min_chars(3, "Genre name must contain at least 3 characters.")
            .max_chars(100, "Genre name must be at most 100 characters.")
            .finish();

        if errors.is_empty() {
            Ok(NewGenre { name })
        } else {
            Err(errors)
        }
    }
}

pub async fn list_genres(State(state): State<AppState>) -> ApiResult {
    let genres = state.genre_repo.find_all().await?;
    Ok(view::genre_list(&genres).into_response())
}

pub async fn get_genre(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult {
    let id = row_id(&raw_id).ok_or(ApiError::NotFound("Genre not found"))?;
    let genre = state
        .genre_repo
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Genre not found"))?;
    let books = state.book_repo.find_by_genre(id).await?;

    Ok(view::genre_detail(&genre, &books).into_response())
}

pub async fn create_genre_form() -> Html<String> {
    view::genre_form(&GenreForm::default(), &ValidationErrors::new())
}

pub async fn create_genre(State(state): State<AppState>, Form(form): Form<GenreForm>) -> ApiResult {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                view::genre_form(&form, &errors),
            )
                .into_response());
        }
    };

    // Same name already catalogued: go there instead of duplicating
    if let Some(existing) = state.genre_repo.find_by_name(&input.name).await? {
        return Ok(Redirect::to(&existing.url()).into_response());
    }

    let genre = state.genre_repo.create(input).await?;
    tracing::info!(genre_id = genre.id, name = %genre.name, "Genre created");

    Ok(Redirect::to(&genre.url()).into_response())
}

pub async fn delete_genre_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult {
    let Some(id) = row_id(&raw_id) else {
        return Ok(Redirect::to(GENRE_LIST).into_response());
    };
    let Some(genre) = state.genre_repo.find_by_id(id).await? else {
        return Ok(Redirect::to(GENRE_LIST).into_response());
    };
    let books = state.book_repo.find_by_genre(id).await?;

    Ok(view::genre_delete(&genre, &books).into_response())
}

pub async fn delete_genre(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult {
    let Some(id) = row_id(&raw_id) else {
        return Ok(Redirect::to(GENRE_LIST).into_response());
    };
    let Some(genre) = state.genre_repo.find_by_id(id).await? else {
        return Ok(Redirect::to(GENRE_LIST).into_response());
    };

    let books = state.book_repo.find_by_genre(id).await?;
    if !books.is_empty() {
        return Ok((StatusCode::CONFLICT, view::genre_delete(&genre, &books)).into_response());
    }

    match state.genre_repo.delete(id).await {
        Ok(()) => tracing::info!(genre_id = id, "Genre deleted"),
        // Already gone
        Err(DomainError::NotFound) => {}
        Err(e) => return Err(e.into()),
    }

    Ok(Redirect::to(GENRE_LIST).into_response())
}
