use axum::response::Html;

use super::page;
use crate::domain::CatalogCounts;

pub fn index(counts: &CatalogCounts) -> Html<String> {
    page(
        "Local Library Home",
        &format!(
            r#"<h1>Local Library Home</h1>
<p>Welcome to <em>LocalLibrary</em>, a very basic catalog of books, authors, genres and copies.</p>
<h2>Dynamic content</h2>
<p>The library has the following record counts:</p>
<ul>
    <li><strong>Books:</strong> {}</li>
    <li><strong>Copies:</strong> {}</li>
    <li><strong>Copies available:</strong> {}</li>
    <li><strong>Authors:</strong> {}</li>
    <li><strong>Genres:</strong> {}</li>
</ul>"#,
            counts.books,
            counts.book_instances,
            counts.available_book_instances,
            counts.authors,
            counts.genres
        ),
    )
}
