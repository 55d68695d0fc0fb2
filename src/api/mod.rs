pub mod author;
pub mod book;
pub mod book_instance;
pub mod catalog;
pub mod error;
pub mod genre;
pub mod health;

use axum::{Router, routing::get};

use crate::api_docs;
use crate::infrastructure::AppState;

/// Full application router: catalog pages, health check and API docs
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(catalog::root_redirect))
        .nest("/catalog", catalog_router())
        // JSON endpoints
        .route("/api/health", get(health::health_check))
        .route("/api-docs/openapi.json", get(api_docs::openapi_json))
        .fallback(error::not_found)
        .with_state(state)
}

/// Catalog pages. Detail URLs use the singular entity segment; the plural
/// segment is accepted for detail, create and delete as well.
pub fn catalog_router() -> Router<AppState> {
    let mut router = Router::new()
        .route("/", get(catalog::index))
        // Lists
        .route("/authors", get(author::list_authors))
        .route("/books", get(book::list_books))
        .route("/genres", get(genre::list_genres))
        .route("/bookinstances", get(book_instance::list_book_instances));

    for base in ["/author", "/authors"] {
        router = router
            .route(
                &format!("{base}/create"),
                get(author::create_author_form).post(author::create_author),
            )
            .route(&format!("{base}/:id"), get(author::get_author))
            .route(
                &format!("{base}/:id/delete"),
                get(author::delete_author_form).post(author::delete_author),
            );
    }

    for base in ["/book", "/books"] {
        router = router
            .route(
                &format!("{base}/create"),
                get(book::create_book_form).post(book::create_book),
            )
            .route(&format!("{base}/:id"), get(book::get_book))
            .route(
                &format!("{base}/:id/delete"),
                get(book::delete_book_form).post(book::delete_book),
            );
    }

    for base in ["/genre", "/genres"] {
        router = router
            .route(
                &format!("{base}/create"),
                get(genre::create_genre_form).post(genre::create_genre),
            )
            .route(&format!("{base}/:id"), get(genre::get_genre))
            .route(
                &format!("{base}/:id/delete"),
                get(genre::delete_genre_form).post(genre::delete_genre),
            );
    }

    for base in ["/bookinstance", "/bookinstances"] {
        router = router
            .route(
                &format!("{base}/create"),
                get(book_instance::create_book_instance_form)
                    .post(book_instance::create_book_instance),
            )
            .route(&format!("{base}/:id"), get(book_instance::get_book_instance))
            .route(
                &format!("{base}/:id/delete"),
                get(book_instance::delete_book_instance_form)
                    .post(book_instance::delete_book_instance),
            );
    }

    router
}

/// Row id from a `:id` path segment. A segment that is not a valid id
/// names no row, so handlers treat `None` like a missing row.
pub(crate) fn row_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}
