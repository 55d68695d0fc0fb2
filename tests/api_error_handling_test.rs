use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use locallibrary::api;
use locallibrary::db;
use locallibrary::infrastructure::AppState;
use locallibrary::models::book_instance::Status;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Option<String>, String) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, location, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// Helper to create an author, a genre and one book linking them
async fn create_test_book(db: &DatabaseConnection) -> (i32, i32, i32) {
    let author = locallibrary::models::author::ActiveModel {
        first_name: Set("Ben".to_string()),
        family_name: Set("Bova".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create author");

    let genre = locallibrary::models::genre::ActiveModel {
        name: Set("Science Fiction".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create genre");

    let book = locallibrary::models::book::ActiveModel {
        title: Set("Apes and Angels".to_string()),
        summary: Set("Humankind's first expedition".to_string()),
        isbn: Set("9780765379528".to_string()),
        author_id: Set(author.id),
        genre_id: Set(genre.id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create book");

    (author.id, genre.id, book.id)
}

#[tokio::test]
async fn test_detail_pages_not_found() {
    let state = setup_test_state().await;
    let app = api::app_router(state);

    for (uri, message) in [
        ("/catalog/author/999", "Author not found"),
        ("/catalog/book/999", "Book not found"),
        ("/catalog/genre/999", "Genre not found"),
        ("/catalog/bookinstance/999", "Book copy not found"),
    ] {
        let (status, _, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(body.contains(message), "{} should say '{}'", uri, message);
    }
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let state = setup_test_state().await;
    let app = api::app_router(state);

    let (status, _, body) = send(&app, get("/catalog/publishers")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Back to the catalog"));
}

#[tokio::test]
async fn test_unparsable_ids_treated_as_missing() {
    let state = setup_test_state().await;
    let app = api::app_router(state);

    for (uri, message) in [
        ("/catalog/author/2147483648", "Author not found"),
        ("/catalog/genre/abc", "Genre not found"),
        ("/catalog/book/not-a-number", "Book not found"),
        ("/catalog/bookinstance/-", "Book copy not found"),
    ] {
        let (status, _, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(body.contains(message), "{} should say '{}'", uri, message);
        assert!(body.contains("Back to the catalog"));
    }

    for (uri, list) in [
        ("/catalog/book/2147483648/delete", "/catalog/books"),
        ("/catalog/author/abc/delete", "/catalog/authors"),
        ("/catalog/genre/9999999999/delete", "/catalog/genres"),
        ("/catalog/bookinstance/x1/delete", "/catalog/bookinstances"),
    ] {
        let (status, location, _) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::SEE_OTHER, "GET {}", uri);
        assert_eq!(location.as_deref(), Some(list));

        let (status, location, _) = send(&app, post_form(uri, "")).await;
        assert_eq!(status, StatusCode::SEE_OTHER, "POST {}", uri);
        assert_eq!(location.as_deref(), Some(list));
    }
}

#[tokio::test]
async fn test_delete_missing_rows_redirect_to_list() {
    let state = setup_test_state().await;
    let app = api::app_router(state);

    for (uri, list) in [
        ("/catalog/author/42/delete", "/catalog/authors"),
        ("/catalog/book/42/delete", "/catalog/books"),
        ("/catalog/genre/42/delete", "/catalog/genres"),
        ("/catalog/bookinstance/42/delete", "/catalog/bookinstances"),
    ] {
        let (status, location, _) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::SEE_OTHER, "GET {}", uri);
        assert_eq!(location.as_deref(), Some(list));

        let (status, location, _) = send(&app, post_form(uri, "")).await;
        assert_eq!(status, StatusCode::SEE_OTHER, "POST {}", uri);
        assert_eq!(location.as_deref(), Some(list));
    }
}

#[tokio::test]
async fn test_delete_genre_with_books_blocked() {
    let state = setup_test_state().await;
    let (_, genre_id, _) = create_test_book(state.db()).await;
    let app = api::app_router(state.clone());

    let uri = format!("/catalog/genre/{}/delete", genre_id);
    let (status, _, body) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Delete the following books before attempting to delete this genre."));
    assert!(!body.contains("<form"));

    let (status, _, body) = send(&app, post_form(&uri, "")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("Apes and Angels"));

    let genre = locallibrary::models::genre::Entity::find_by_id(genre_id)
        .one(state.db())
        .await
        .unwrap();
    assert!(genre.is_some());
}

#[tokio::test]
async fn test_delete_book_with_copies_blocked() {
    let state = setup_test_state().await;
    let (_, _, book_id) = create_test_book(state.db()).await;
    let copy = locallibrary::models::book_instance::ActiveModel {
        book_id: Set(book_id),
        imprint: Set("Tor, 2016.".to_string()),
        status: Set(Status::Reserved),
        due_back: Set(None),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .expect("Failed to create copy");
    let app = api::app_router(state.clone());

    let uri = format!("/catalog/book/{}/delete", book_id);
    let (status, _, body) = send(&app, post_form(&uri, "")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("Delete the following copies before attempting to delete this book."));
    assert!(body.contains("Tor, 2016."));

    // Removing the copy unblocks the book
    let (status, location, _) = send(
        &app,
        post_form(&format!("/catalog/bookinstance/{}/delete", copy.id), ""),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/catalog/bookinstances"));

    let (status, location, _) = send(&app, post_form(&uri, "")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/catalog/books"));
}

#[tokio::test]
async fn test_create_author_validation_errors() {
    let state = setup_test_state().await;
    let app = api::app_router(state.clone());

    let (status, _, body) = send(
        &app,
        post_form(
            "/catalog/author/create",
            "first_name=Jean+Paul&family_name=&date_of_birth=not-a-date&date_of_death=",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("First name has non-alphanumeric characters."));
    assert!(body.contains("Family name must be specified."));
    assert!(body.contains("Invalid date of birth"));
    // Submitted values are shown again
    assert!(body.contains("value=\"Jean Paul\""));

    let authors = locallibrary::models::author::Entity::find()
        .count(state.db())
        .await
        .unwrap();
    assert_eq!(authors, 0);
}

#[tokio::test]
async fn test_create_author_name_length_limit() {
    let state = setup_test_state().await;
    let app = api::app_router(state.clone());

    let too_long = "x".repeat(101);
    let (status, _, body) = send(
        &app,
        post_form(
            "/catalog/author/create",
            &format!("first_name=Isaac&family_name={}", too_long),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Family name must be at most 100 characters."));

    // Punctuation is reported before length
    let (status, _, body) = send(
        &app,
        post_form(
            "/catalog/author/create",
            &format!("first_name=Isaac&family_name=O%27{}", too_long),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Family name has non-alphanumeric characters."));
    assert!(!body.contains("Family name must be at most 100 characters."));

    let authors = locallibrary::models::author::Entity::find()
        .count(state.db())
        .await
        .unwrap();
    assert_eq!(authors, 0);

    let longest = "x".repeat(100);
    let (status, location, _) = send(
        &app,
        post_form(
            "/catalog/author/create",
            &format!("first_name={}&family_name={}", longest, longest),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/catalog/author/1"));

    let stored = locallibrary::models::author::Entity::find_by_id(1)
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.family_name, longest);
}

#[tokio::test]
async fn test_create_book_with_unknown_references() {
    let state = setup_test_state().await;
    let app = api::app_router(state.clone());

    let (status, _, body) = send(
        &app,
        post_form(
            "/catalog/book/create",
            "title=Orphan&author=77&summary=Nobody+wrote+it&isbn=123&genre=88",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Selected author does not exist."));
    assert!(body.contains("Selected genre does not exist."));
    assert!(body.contains("value=\"Orphan\""));

    let (status, _, body) = send(
        &app,
        post_form("/catalog/book/create", "title=&author=&summary=&isbn=&genre="),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Title must not be empty."));
    assert!(body.contains("Author must not be empty."));
    assert!(body.contains("Genre must not be empty."));

    let books = locallibrary::models::book::Entity::find()
        .count(state.db())
        .await
        .unwrap();
    assert_eq!(books, 0);
}

#[tokio::test]
async fn test_create_book_instance_validation_errors() {
    let state = setup_test_state().await;
    let (_, _, book_id) = create_test_book(state.db()).await;
    let app = api::app_router(state.clone());

    let form = format!(
        "book={}&imprint=&status=Lost&due_back=tomorrow",
        book_id
    );
    let (status, _, body) = send(&app, post_form("/catalog/bookinstance/create", &form)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Imprint must be specified."));
    assert!(body.contains("Invalid status."));
    assert!(body.contains("Invalid date"));

    let (status, _, body) = send(
        &app,
        post_form("/catalog/bookinstance/create", "book=999&imprint=Tor&status=Available"),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Selected book does not exist."));

    let copies = locallibrary::models::book_instance::Entity::find()
        .count(state.db())
        .await
        .unwrap();
    assert_eq!(copies, 0);
}
