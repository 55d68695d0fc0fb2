//! Book instance (copy) pages

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use super::error::{ApiError, ApiResult};
use super::row_id;
use crate::domain::{BookInstanceStatus, DomainError, NewBookInstance, ValidationErrors};
use crate::infrastructure::AppState;
use crate::views::book_instance as view;

const BOOK_INSTANCE_LIST: &str = "/catalog/bookinstances";

/// Submitted copy form; `book` carries the book id
#[derive(Debug, Default, Deserialize)]
pub struct BookInstanceForm {
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub imprint: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub due_back: String,
}

async fn render_form(
    state: &AppState,
    form: &BookInstanceForm,
    errors: &ValidationErrors,
    status: StatusCode,
) -> ApiResult {
    let books: Vec<_> = state
        .book_repo
        .find_all()
        .await?
        .into_iter()
        .map(|entry| entry.book)
        .collect();

    Ok((status, view::book_instance_form(form, &books, errors)).into_response())
}

async fn validate(
    state: &AppState,
    form: &BookInstanceForm,
) -> Result<Result<NewBookInstance, ValidationErrors>, DomainError> {
    let mut errors = ValidationErrors::new();

    let book_id = errors.required_id("book", &form.book, "Book must be specified.");
    if let Some(id) = book_id
        && state.book_repo.find_by_id(id).await?.is_none()
    {
        errors.add("book", "Selected book does not exist.");
    }

    let imprint = errors
        .field("imprint", &form.imprint)
        .min_chars(1, "Imprint must be specified.")
        .finish();

    // Blank status falls back to the column default
    let status = match form.status.trim() {
        "" => BookInstanceStatus::default(),
        raw => match raw.parse::<BookInstanceStatus>() {
            Ok(status) => status,
            Err(_) => {
                errors.add("status", "Invalid status.");
                BookInstanceStatus::default()
            }
        },
    };

    let due_back = errors.optional_date("due_back", &form.due_back, "Invalid date");

    Ok(match book_id {
        Some(book_id) if errors.is_empty() => Ok(NewBookInstance {
            book_id,
            imprint,
            status,
            due_back,
        }),
        _ => Err(errors),
    })
}

pub async fn list_book_instances(State(state): State<AppState>) -> ApiResult {
    let instances = state.book_instance_repo.find_all().await?;
    Ok(view::book_instance_list(&instances).into_response())
}

pub async fn get_book_instance(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult {
    let id = row_id(&raw_id).ok_or(ApiError::NotFound("Book copy not found"))?;
    let entry = state
        .book_instance_repo
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Book copy not found"))?;

    Ok(view::book_instance_detail(&entry).into_response())
}

pub async fn create_book_instance_form(State(state): State<AppState>) -> ApiResult {
    render_form(
        &state,
        &BookInstanceForm::default(),
        &ValidationErrors::new(),
        StatusCode::OK,
    )
    .await
}

pub async fn create_book_instance(
    State(state): State<AppState>,
    Form(form): Form<BookInstanceForm>,
) -> ApiResult {
    let input = match validate(&state, &form).await? {
        Ok(input) => input,
        Err(errors) => {
            return render_form(&state, &form, &errors, StatusCode::UNPROCESSABLE_ENTITY).await;
        }
    };

    let instance = state.book_instance_repo.create(input).await?;
    tracing::info!(
        book_instance_id = instance.id,
        book_id = instance.book_id,
        status = %instance.status,
        "Book instance created"
    );

    Ok(Redirect::to(&instance.url()).into_response())
}

pub async fn delete_book_instance_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult {
    let Some(id) = row_id(&raw_id) else {
        return Ok(Redirect::to(BOOK_INSTANCE_LIST).into_response());
    };
    let Some(entry) = state.book_instance_repo.find_by_id(id).await? else {
        return Ok(Redirect::to(BOOK_INSTANCE_LIST).into_response());
    };

    Ok(view::book_instance_delete(&entry).into_response())
}

/// Copies have no dependents, so deletion always proceeds
pub async fn delete_book_instance(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult {
    let Some(id) = row_id(&raw_id) else {
        return Ok(Redirect::to(BOOK_INSTANCE_LIST).into_response());
    };
    match state.book_instance_repo.delete(id).await {
        Ok(()) => tracing::info!(book_instance_id = id, "Book instance deleted"),
        Err(DomainError::NotFound) => {}
        Err(e) => return Err(e.into()),
    }

    Ok(Redirect::to(BOOK_INSTANCE_LIST).into_response())
}
