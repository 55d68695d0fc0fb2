//! Book pages

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use super::error::{ApiError, ApiResult};
use super::row_id;
use crate::domain::{DomainError, NewBook, ValidationErrors};
use crate::infrastructure::AppState;
use crate::views::book as view;

const BOOK_LIST: &str = "/catalog/books";

/// Submitted book form; `author` and `genre` carry row ids
#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub genre: String,
}

/// Render the book form with author and genre choices
async fn render_form(
    state: &AppState,
    form: &BookForm,
    errors: &ValidationErrors,
    status: StatusCode,
) -> ApiResult {
    let authors = state.author_repo.find_all().await?;
    let genres = state.genre_repo.find_all().await?;

    Ok((status, view::book_form(form, &authors, &genres, errors)).into_response())
}

/// Field rules plus the referenced author and genre must exist
async fn validate(
    state: &AppState,
    form: &BookForm,
) -> Result<Result<NewBook, ValidationErrors>, DomainError> {
    let mut errors = ValidationErrors::new();

    let title = errors
        .field("title", &form.title)
        .min_chars(1, "Title must not be empty.")
        .finish();
    let author_id = errors.required_id("author", &form.author, "Author must not be empty.");
    let summary = errors
        .field("summary", &form.summary)
        .min_chars(1, "Summary must not be empty.")
        .finish();
    let isbn = errors
        .field("isbn", &form.isbn)
        .min_chars(1, "ISBN must not be empty.")
        .finish();
    let genre_id = errors.required_id("genre", &form.genre, "Genre must not be empty.");

    if let Some(id) = author_id
        && state.author_repo.find_by_id(id).await?.is_none()
    {
        errors.add("author", "Selected author does not exist.");
    }
    if let Some(id) = genre_id
        && state.genre_repo.find_by_id(id).await?.is_none()
    {
        errors.add("genre", "Selected genre does not exist.");
    }

    Ok(match (author_id, genre_id) {
        (Some(author_id), Some(genre_id)) if errors.is_empty() => Ok(NewBook {
            title,
            summary,
            isbn,
            author_id,
            genre_id,
        }),
        _ => Err(errors),
    })
}

pub async fn list_books(State(state): State<AppState>) -> ApiResult {
    let books = state.book_repo.find_all().await?;
    Ok(view::book_list(&books).into_response())
}

pub async fn get_book(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult {
    let id = row_id(&raw_id).ok_or(ApiError::NotFound("Book not found"))?;
    let book = state
        .book_repo
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Book not found"))?;
    let author = state.author_repo.find_by_id(book.author_id).await?;
    let genre = state.genre_repo.find_by_id(book.genre_id).await?;
    let instances = state.book_instance_repo.find_by_book(id).await?;

    Ok(view::book_detail(&book, author.as_ref(), genre.as_ref(), &instances).into_response())
}

pub async fn create_book_form(State(state): State<AppState>) -> ApiResult {
    render_form(
        &state,
        &BookForm::default(),
        &ValidationErrors::new(),
        StatusCode::OK,
    )
    .await
}

pub async fn create_book(State(state): State<AppState>, Form(form): Form<BookForm>) -> ApiResult {
    let input = match validate(&state, &form).await? {
        Ok(input) => input,
        Err(errors) => {
            return render_form(&state, &form, &errors, StatusCode::UNPROCESSABLE_ENTITY).await;
        }
    };

    let book = state.book_repo.create(input).await?;
    tracing::info!(book_id = book.id, title = %book.title, "Book created");

    Ok(Redirect::to(&book.url()).into_response())
}

pub async fn delete_book_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult {
    let Some(id) = row_id(&raw_id) else {
        return Ok(Redirect::to(BOOK_LIST).into_response());
    };
    let Some(book) = state.book_repo.find_by_id(id).await? else {
        return Ok(Redirect::to(BOOK_LIST).into_response());
    };
    let instances = state.book_instance_repo.find_by_book(id).await?;

    Ok(view::book_delete(&book, &instances).into_response())
}

pub async fn delete_book(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult {
    let Some(id) = row_id(&raw_id) else {
        return Ok(Redirect::to(BOOK_LIST).into_response());
    };
    let Some(book) = state.book_repo.find_by_id(id).await? else {
        return Ok(Redirect::to(BOOK_LIST).into_response());
    };

    let instances = state.book_instance_repo.find_by_book(id).await?;
    if !instances.is_empty() {
        return Ok((StatusCode::CONFLICT, view::book_delete(&book, &instances)).into_response());
    }

    match state.book_repo.delete(id).await {
        Ok(()) => tracing::info!(book_id = id, "Book deleted"),
        Err(DomainError::NotFound) => {}
        Err(e) => return Err(e.into()),
    }

    Ok(Redirect::to(BOOK_LIST).into_response())
}
