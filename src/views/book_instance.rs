use axum::response::Html;

use super::book::status_class;
use super::{error_list, escape, option, page};
use crate::api::book_instance::BookInstanceForm;
use crate::domain::{Book, BookInstanceStatus, BookInstanceWithBook, ValidationErrors};

fn book_link(book: Option<&Book>) -> String {
    book.map(|b| format!("<a href=\"{}\">{}</a>", b.url(), escape(&b.title)))
        .unwrap_or_default()
}

pub fn book_instance_list(instances: &[BookInstanceWithBook]) -> Html<String> {
    let body = if instances.is_empty() {
        "<p>There are no book copies in this library.</p>".to_string()
    } else {
        let items: String = instances
            .iter()
            .map(|entry| {
                let i = &entry.instance;
                let title = entry
                    .book
                    .as_ref()
                    .map(|b| escape(&b.title))
                    .unwrap_or_default();
                let due = if i.status != BookInstanceStatus::Available && i.due_back.is_some() {
                    format!(" <span>(Due: {})</span>", i.due_back_formatted())
                } else {
                    String::new()
                };
                format!(
                    "<li><a href=\"{}\">{} : {}</a> - <span class=\"{}\">{}</span>{}</li>\n",
                    i.url(),
                    title,
                    escape(&i.imprint),
                    status_class(i.status),
                    i.status,
                    due
                )
            })
            .collect();
        format!("<ul>\n{}</ul>", items)
    };

    page(
        "Book Instance List",
        &format!("<h1>Book Instance List</h1>\n{}", body),
    )
}

fn instance_summary(entry: &BookInstanceWithBook) -> String {
    let i = &entry.instance;
    let due = if i.status != BookInstanceStatus::Available && i.due_back.is_some() {
        format!("<p><strong>Due back:</strong> {}</p>\n", i.due_back_formatted())
    } else {
        String::new()
    };
    format!(
        "<p><strong>Title:</strong> {}</p>\n<p><strong>Imprint:</strong> {}</p>\n\
         <p><strong>Status:</strong> <span class=\"{}\">{}</span></p>\n{}",
        book_link(entry.book.as_ref()),
        escape(&i.imprint),
        status_class(i.status),
        i.status,
        due
    )
}

pub fn book_instance_detail(entry: &BookInstanceWithBook) -> Html<String> {
    page(
        "Book Instance Detail",
        &format!(
            "<h1>ID: {}</h1>\n{}<p><a href=\"{}/delete\">Delete book instance</a></p>",
            entry.instance.id,
            instance_summary(entry),
            entry.instance.url()
        ),
    )
}

pub fn book_instance_form(
    form: &BookInstanceForm,
    books: &[Book],
    errors: &ValidationErrors,
) -> Html<String> {
    let book_options: String = books
        .iter()
        .map(|b| {
            let id = b.id.to_string();
            option(&id, &b.title, form.book.trim() == id)
        })
        .collect();
    let selected_status = form.status.trim();
    let status_options: String = BookInstanceStatus::ALL
        .iter()
        .map(|s| {
            let selected = if selected_status.is_empty() {
                *s == BookInstanceStatus::default()
            } else {
                selected_status == s.as_str()
            };
            option(s.as_str(), s.as_str(), selected)
        })
        .collect();

    page(
        "Create BookInstance",
        &format!(
            r#"<h1>Create BookInstance</h1>
<form method="POST" action="/catalog/bookinstance/create">
    <div class="form-group">
        <label for="book">Book:</label>
        <select id="book" name="book" required>
            <option value="">--Please select a book--</option>
            {}
        </select>
    </div>
    <div class="form-group">
        <label for="imprint">Imprint:</label>
        <input id="imprint" type="text" name="imprint" placeholder="Publisher and date information" required value="{}">
    </div>
    <div class="form-group">
        <label for="due_back">Date when book available:</label>
        <input id="due_back" type="date" name="due_back" value="{}">
    </div>
    <div class="form-group">
        <label for="status">Status:</label>
        <select id="status" name="status" required>
            {}
        </select>
    </div>
    <button type="submit">Submit</button>
</form>
{}"#,
            book_options,
            escape(&form.imprint),
            escape(&form.due_back),
            status_options,
            error_list(errors)
        ),
    )
}

pub fn book_instance_delete(entry: &BookInstanceWithBook) -> Html<String> {
    page(
        "Delete BookInstance",
        &format!(
            r#"<h1>Delete BookInstance: {id}</h1>
<p>Do you really want to delete this BookInstance?</p>
{summary}<form method="POST" action="{url}/delete">
    <input type="hidden" name="bookinstanceid" value="{id}">
    <button type="submit">Delete</button>
</form>"#,
            id = entry.instance.id,
            summary = instance_summary(entry),
            url = entry.instance.url()
        ),
    )
}
