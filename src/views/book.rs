use axum::response::Html;

use super::{error_list, escape, option, page};
use crate::api::book::BookForm;
use crate::domain::{
    Author, Book, BookInstance, BookInstanceStatus, BookWithAuthor, Genre, ValidationErrors,
};

/// Title/summary pairs for the books listed under an author, genre or
/// delete confirmation
pub fn book_entries(books: &[Book]) -> String {
    books
        .iter()
        .map(|b| {
            format!(
                "<dt><a href=\"{}\">{}</a></dt>\n<dd>{}</dd>\n",
                b.url(),
                escape(&b.title),
                escape(&b.summary)
            )
        })
        .collect()
}

/// CSS class used to colour a status
pub fn status_class(status: BookInstanceStatus) -> &'static str {
    match status {
        BookInstanceStatus::Available => "text-success",
        BookInstanceStatus::Maintenance => "text-danger",
        BookInstanceStatus::Loaned | BookInstanceStatus::Reserved => "text-warning",
    }
}

fn instance_entries(instances: &[BookInstance]) -> String {
    instances
        .iter()
        .map(|i| {
            let due = if i.status != BookInstanceStatus::Available && i.due_back.is_some() {
                format!("<p><strong>Due back:</strong> {}</p>\n", i.due_back_formatted())
            } else {
                String::new()
            };
            format!(
                "<hr>\n<p class=\"{}\">{}</p>\n<p><strong>Imprint:</strong> {}</p>\n{}\
                 <p><strong>Id:</strong> <a href=\"{}\">{}</a></p>\n",
                status_class(i.status),
                i.status,
                escape(&i.imprint),
                due,
                i.url(),
                i.id
            )
        })
        .collect()
}

pub fn book_list(books: &[BookWithAuthor]) -> Html<String> {
    let body = if books.is_empty() {
        "<p>There are no books.</p>".to_string()
    } else {
        let items: String = books
            .iter()
            .map(|entry| {
                let author = entry
                    .author
                    .as_ref()
                    .map(|a| format!(" ({})", escape(&a.name())))
                    .unwrap_or_default();
                format!(
                    "<li><a href=\"{}\">{}</a>{}</li>\n",
                    entry.book.url(),
                    escape(&entry.book.title),
                    author
                )
            })
            .collect();
        format!("<ul>\n{}</ul>", items)
    };

    page("Book List", &format!("<h1>Book List</h1>\n{}", body))
}

pub fn book_detail(
    book: &Book,
    author: Option<&Author>,
    genre: Option<&Genre>,
    instances: &[BookInstance],
) -> Html<String> {
    let author_html = author
        .map(|a| format!("<a href=\"{}\">{}</a>", a.url(), escape(&a.name())))
        .unwrap_or_default();
    let genre_html = genre
        .map(|g| format!("<a href=\"{}\">{}</a>", g.url(), escape(&g.name)))
        .unwrap_or_default();
    let copies_html = if instances.is_empty() {
        "<p>There are no copies of this book in the library.</p>".to_string()
    } else {
        instance_entries(instances)
    };

    page(
        &book.title,
        &format!(
            "<h1>Title: {}</h1>\n<p><strong>Author:</strong> {}</p>\n\
             <p><strong>Summary:</strong> {}</p>\n<p><strong>ISBN:</strong> {}</p>\n\
             <p><strong>Genre:</strong> {}</p>\n\
             <div class=\"dependents\">\n<h2>Copies</h2>\n{}\n</div>\n\
             <p><a href=\"{}/delete\">Delete book</a></p>",
            escape(&book.title),
            author_html,
            escape(&book.summary),
            escape(&book.isbn),
            genre_html,
            copies_html,
            book.url()
        ),
    )
}

pub fn book_form(
    form: &BookForm,
    authors: &[Author],
    genres: &[Genre],
    errors: &ValidationErrors,
) -> Html<String> {
    let author_options: String = authors
        .iter()
        .map(|a| {
            let id = a.id.to_string();
            option(&id, &a.name(), form.author.trim() == id)
        })
        .collect();
    let genre_options: String = genres
        .iter()
        .map(|g| {
            let id = g.id.to_string();
            option(&id, &g.name, form.genre.trim() == id)
        })
        .collect();

    page(
        "Create Book",
        &format!(
            r#"<h1>Create Book</h1>
<form method="POST" action="/catalog/book/create">
    <div class="form-group">
        <label for="title">Title:</label>
        <input id="title" type="text" name="title" placeholder="Name of book" required value="{}">
    </div>
    <div class="form-group">
        <label for="author">Author:</label>
        <select id="author" name="author" required>
            <option value="">--Please select an author--</option>
            {}
        </select>
    </div>
    <div class="form-group">
        <label for="summary">Summary:</label>
        <textarea id="summary" name="summary" placeholder="Summary" required>{}</textarea>
    </div>
    <div class="form-group">
        <label for="isbn">ISBN:</label>
        <input id="isbn" type="text" name="isbn" placeholder="ISBN13" required value="{}">
    </div>
    <div class="form-group">
        <label for="genre">Genre:</label>
        <select id="genre" name="genre" required>
            <option value="">--Please select a genre--</option>
            {}
        </select>
    </div>
    <button type="submit">Submit</button>
</form>
{}"#,
            escape(&form.title),
            author_options,
            escape(&form.summary),
            escape(&form.isbn),
            genre_options,
            error_list(errors)
        ),
    )
}

pub fn book_delete(book: &Book, instances: &[BookInstance]) -> Html<String> {
    let body = if instances.is_empty() {
        format!(
            r#"<p>Do you really want to delete this Book?</p>
<form method="POST" action="{}/delete">
    <input type="hidden" name="bookid" value="{}">
    <button type="submit">Delete</button>
</form>"#,
            book.url(),
            book.id
        )
    } else {
        format!(
            "<p><strong>Delete the following copies before attempting to delete this book.</strong></p>\n\
             <div class=\"dependents\">\n<h2>Copies</h2>\n{}</div>",
            instance_entries(instances)
        )
    };

    page(
        "Delete Book",
        &format!("<h1>Delete Book: {}</h1>\n{}", escape(&book.title), body),
    )
}
