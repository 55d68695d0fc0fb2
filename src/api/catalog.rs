//! Catalog home page

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};

use super::error::ApiResult;
use crate::domain::CatalogCounts;
use crate::infrastructure::AppState;
use crate::views;

pub async fn root_redirect() -> Redirect {
    Redirect::to("/catalog")
}

/// Record counts for books, copies, available copies, authors and genres
pub async fn index(State(state): State<AppState>) -> ApiResult {
    let (books, book_instances, available_book_instances, authors, genres) = tokio::try_join!(
        state.book_repo.count(),
        state.book_instance_repo.count(),
        state.book_instance_repo.count_available(),
        state.author_repo.count(),
        state.genre_repo.count(),
    )?;

    let counts = CatalogCounts {
        books,
        book_instances,
        available_book_instances,
        authors,
        genres,
    };

    Ok(views::home::index(&counts).into_response())
}
