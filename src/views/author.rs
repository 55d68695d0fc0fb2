use axum::response::Html;

use super::book::book_entries;
use super::{error_list, escape, page};
use crate::api::author::AuthorForm;
use crate::domain::{Author, Book, ValidationErrors};

pub fn author_list(authors: &[Author]) -> Html<String> {
    let body = if authors.is_empty() {
        "<p>There are no authors.</p>".to_string()
    } else {
        let items: String = authors
            .iter()
            .map(|a| {
                let lifespan = a.lifespan();
                let lifespan = if lifespan.is_empty() {
                    lifespan
                } else {
                    format!(" ({})", lifespan)
                };
                format!(
                    "<li><a href=\"{}\">{}</a>{}</li>\n",
                    a.url(),
                    escape(&a.name()),
                    lifespan
                )
            })
            .collect();
        format!("<ul>\n{}</ul>", items)
    };

    page("Author List", &format!("<h1>Author List</h1>\n{}", body))
}

fn portrait(author: &Author) -> String {
    match &author.image_path {
        Some(path) => format!(
            "<img class=\"portrait\" src=\"{}\" alt=\"{}\">\n",
            escape(path),
            escape(&author.name())
        ),
        None => String::new(),
    }
}

pub fn author_detail(author: &Author, books: &[Book]) -> Html<String> {
    let books_html = if books.is_empty() {
        "<p>This author has no books.</p>".to_string()
    } else {
        format!("<dl>\n{}</dl>", book_entries(books))
    };

    page(
        "Author Detail",
        &format!(
            "<h1>Author: {}</h1>\n{}<p>{}</p>\n<div class=\"dependents\">\n<h2>Books</h2>\n{}\n</div>\n\
             <p><a href=\"{}/delete\">Delete author</a></p>",
            escape(&author.name()),
            portrait(author),
            author.lifespan(),
            books_html,
            author.url()
        ),
    )
}

pub fn author_form(form: &AuthorForm, errors: &ValidationErrors) -> Html<String> {
    page(
        "Create Author",
        &format!(
            r#"<h1>Create Author</h1>
<form method="POST" action="/catalog/author/create">
    <div class="form-group">
        <label for="first_name">First Name:</label>
        <input id="first_name" type="text" name="first_name" placeholder="First name" required value="{}">
        <label for="family_name">Family Name:</label>
        <input id="family_name" type="text" name="family_name" placeholder="Family name" required value="{}">
    </div>
    <div class="form-group">
        <label for="date_of_birth">Date of birth:</label>
        <input id="date_of_birth" type="date" name="date_of_birth" value="{}">
        <label for="date_of_death">Date of death:</label>
        <input id="date_of_death" type="date" name="date_of_death" value="{}">
    </div>
    <div class="form-group">
        <label for="image_path">Image path:</label>
        <input id="image_path" type="text" name="image_path" placeholder="/static/images/author.jpg" value="{}">
    </div>
    <button type="submit">Submit</button>
</form>
{}"#,
            escape(&form.first_name),
            escape(&form.family_name),
            escape(&form.date_of_birth),
            escape(&form.date_of_death),
            escape(&form.image_path),
            error_list(errors)
        ),
    )
}

pub fn author_delete(author: &Author, books: &[Book]) -> Html<String> {
    let body = if books.is_empty() {
        format!(
            r#"<p>Do you really want to delete this Author?</p>
<form method="POST" action="{}/delete">
    <input type="hidden" name="authorid" value="{}">
    <button type="submit">Delete</button>
</form>"#,
            author.url(),
            author.id
        )
    } else {
        format!(
            "<p><strong>Delete the following books before attempting to delete this author.</strong></p>\n\
             <div class=\"dependents\">\n<h2>Books</h2>\n<dl>\n{}</dl>\n</div>",
            book_entries(books)
        )
    };

    page(
        "Delete Author",
        &format!(
            "<h1>Delete Author: {}</h1>\n<p>{}</p>\n{}",
            escape(&author.name()),
            author.lifespan(),
            body
        ),
    )
}
