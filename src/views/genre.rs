use axum::response::Html;

use super::book::book_entries;
use super::{error_list, escape, page};
use crate::api::genre::GenreForm;
use crate::domain::{Book, Genre, ValidationErrors};

pub fn genre_list(genres: &[Genre]) -> Html<String> {
    let body = if genres.is_empty() {
        "<p>There are no genres.</p>".to_string()
    } else {
        let items: String = genres
            .iter()
            .map(|g| format!("<li><a href=\"{}\">{}</a></li>\n", g.url(), escape(&g.name)))
            .collect();
        format!("<ul>\n{}</ul>", items)
    };

    page("Genre List", &format!("<h1>Genre List</h1>\n{}", body))
}

pub fn genre_detail(genre: &Genre, books: &[Book]) -> Html<String> {
    let books_html = if books.is_empty() {
        "<p>This genre has no books.</p>".to_string()
    } else {
        format!("<dl>\n{}</dl>", book_entries(books))
    };

    page(
        "Genre Detail",
        &format!(
            "<h1>Genre: {}</h1>\n<div class=\"dependents\">\n<h2>Books</h2>\n{}\n</div>\n\
             <p><a href=\"{}/delete\">Delete genre</a></p>",
            escape(&genre.name),
            books_html,
            genre.url()
        ),
    )
}

pub fn genre_form(form: &GenreForm, errors: &ValidationErrors) -> Html<String> {
    page(
        "Create Genre",
        &format!(
            r#"<h1>Create Genre</h1>
<form method="POST" action="/catalog/genre/create">
    <div class="form-group">
        <label for="name">Genre:</label>
        <input id="name" type="text" name="name" placeholder="Fantasy, Poetry etc." required value="{}">
    </div>
    <button type="submit">Submit</button>
</form>
{}"#,
            escape(&form.name),
            error_list(errors)
        ),
    )
}

pub fn genre_delete(genre: &Genre, books: &[Book]) -> Html<String> {
    let body = if books.is_empty() {
        format!(
            r#"<p>Do you really want to delete this Genre?</p>
<form method="POST" action="{}/delete">
    <input type="hidden" name="genreid" value="{}">
    <button type="submit">Delete</button>
</form>"#,
            genre.url(),
            genre.id
        )
    } else {
        format!(
            "<p><strong>Delete the following books before attempting to delete this genre.</strong></p>\n\
             <div class=\"dependents\">\n<h2>Books</h2>\n<dl>\n{}</dl>\n</div>",
            book_entries(books)
        )
    };

    page(
        "Delete Genre",
        &format!("<h1>Delete Genre: {}</h1>\n{}", escape(&genre.name), body),
    )
}
