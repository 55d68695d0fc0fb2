//! Author pages

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;

use super::error::{ApiError, ApiResult};
use super::row_id;
use crate::domain::{DomainError, NewAuthor, ValidationErrors};
use crate::infrastructure::AppState;
use crate::views::author as view;

const AUTHOR_LIST: &str = "/catalog/authors";

/// Submitted author form. Dates arrive as text and are parsed during
/// validation so the raw input can be shown again on failure.
#[derive(Debug, Default, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_death: String,
    #[serde(default)]
    pub image_path: String,
}

impl AuthorForm {
    pub fn validate(&self) -> Result<NewAuthor, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = errors
            .field("first_name", &self.first_name)
            .min_chars(1, "First name must be specified.")
            .alphanumeric("First name has non-alphanumeric characters.")
            .max_chars(100, "First name must be at most 100 characters.")
            .finish();
        let family_name = errors
            .field("family_name", &self.family_name)
            .min_chars(1, "Family name must be specified.")
            .alphanumeric("Family name has non-alphanumeric characters.")
            .max_chars(100, "Family name must be at most 100 characters.")
            .finish();
        let date_of_birth =
            errors.optional_date("date_of_birth", &self.date_of_birth, "Invalid date of birth");
        let date_of_death =
            errors.optional_date("date_of_death", &self.date_of_death, "Invalid date of death");
        let image_path = errors
            .field("image_path", &self.image_path)
            .max_chars(255, "Image path must be at most 255 characters.")
            .finish();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewAuthor {
            first_name,
            family_name,
            date_of_birth,
            date_of_death,
            image_path: (!image_path.is_empty()).then_some(image_path),
        })
    }
}

pub async fn list_authors(State(state): State<AppState>) -> ApiResult {
    let authors = state.author_repo.find_all().await?;
    Ok(view::author_list(&authors).into_response())
}

pub async fn get_author(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult {
    let id = row_id(&raw_id).ok_or(ApiError::NotFound("Author not found"))?;
    let author = state
        .author_repo
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Author not found"))?;
    let books = state.book_repo.find_by_author(id).await?;

    Ok(view::author_detail(&author, &books).into_response())
}

pub async fn create_author_form() -> Html<String> {
    view::author_form(&AuthorForm::default(), &ValidationErrors::new())
}

pub async fn create_author(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> ApiResult {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                view::author_form(&form, &errors),
            )
                .into_response());
        }
    };

    let author = state.author_repo.create(input).await?;
    tracing::info!(author_id = author.id, name = %author.name(), "Author created");

    Ok(Redirect::to(&author.url()).into_response())
}

pub async fn delete_author_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult {
    let Some(id) = row_id(&raw_id) else {
        return Ok(Redirect::to(AUTHOR_LIST).into_response());
    };
    let Some(author) = state.author_repo.find_by_id(id).await? else {
        return Ok(Redirect::to(AUTHOR_LIST).into_response());
    };
    let books = state.book_repo.find_by_author(id).await?;

    Ok(view::author_delete(&author, &books).into_response())
}

pub async fn delete_author(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult {
    let Some(id) = row_id(&raw_id) else {
        return Ok(Redirect::to(AUTHOR_LIST).into_response());
    };
    let Some(author) = state.author_repo.find_by_id(id).await? else {
        return Ok(Redirect::to(AUTHOR_LIST).into_response());
    };

    let books = state.book_repo.find_by_author(id).await?;
    if !books.is_empty() {
        return Ok((StatusCode::CONFLICT, view::author_delete(&author, &books)).into_response());
    }

    match state.author_repo.delete(id).await {
        Ok(()) => tracing::info!(author_id = id, "Author deleted"),
        Err(DomainError::NotFound) => {}
        Err(e) => return Err(e.into()),
    }

    Ok(Redirect::to(AUTHOR_LIST).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form(first: &str, family: &str) -> AuthorForm {
        AuthorForm {
            first_name: first.to_string(),
            family_name: family.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_author_is_trimmed() {
        let mut f = form("  Isaac ", "Asimov");
        f.date_of_birth = "1920-01-02".to_string();

        let input = f.validate().expect("valid form");
        assert_eq!(input.first_name, "Isaac");
        assert_eq!(input.date_of_birth, NaiveDate::from_ymd_opt(1920, 1, 2));
        assert_eq!(input.date_of_death, None);
        assert_eq!(input.image_path, None);
    }

    #[test]
    fn test_invalid_author_reports_each_field() {
        let mut f = form("", "Le Guin");
        f.date_of_death = "yesterday".to_string();

        let errors = f.validate().unwrap_err();
        assert_eq!(
            errors.for_field("first_name").collect::<Vec<_>>(),
            vec!["First name must be specified."]
        );
        assert_eq!(
            errors.for_field("family_name").collect::<Vec<_>>(),
            vec!["Family name has non-alphanumeric characters."]
        );
        assert_eq!(
            errors.for_field("date_of_death").collect::<Vec<_>>(),
            vec!["Invalid date of death"]
        );
    }

    #[test]
    fn test_name_checks_run_in_order() {
        let long = "x".repeat(101);
        let errors = form("Isaac", &format!("O'{}", long)).validate().unwrap_err();
        assert_eq!(
            errors.for_field("family_name").collect::<Vec<_>>(),
            vec!["Family name has non-alphanumeric characters."]
        );

        let errors = form(&long, "Asimov").validate().unwrap_err();
        assert_eq!(
            errors.for_field("first_name").collect::<Vec<_>>(),
            vec!["First name must be at most 100 characters."]
        );

        assert!(form(&"x".repeat(100), "Asimov").validate().is_ok());
    }
}
