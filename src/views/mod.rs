//! HTML rendering for catalog pages
//!
//! Every page goes through [`page`], which wraps the body in the shared
//! layout with the catalog sidebar. All user-supplied text is passed
//! through [`escape`] before it is interpolated.

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;
pub mod home;

use axum::response::Html;

use crate::domain::ValidationErrors;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared layout
pub fn page(title: &str, content: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <div class="container">
        <nav class="sidebar">
            <ul>
                <li><a href="/catalog">Home</a></li>
                <li><a href="/catalog/books">All books</a></li>
                <li><a href="/catalog/authors">All authors</a></li>
                <li><a href="/catalog/genres">All genres</a></li>
                <li><a href="/catalog/bookinstances">All book-instances</a></li>
                <li><hr></li>
                <li><a href="/catalog/author/create">Create new author</a></li>
                <li><a href="/catalog/genre/create">Create new genre</a></li>
                <li><a href="/catalog/book/create">Create new book</a></li>
                <li><a href="/catalog/bookinstance/create">Create new book instance (copy)</a></li>
            </ul>
        </nav>
        <main class="content">
{content}
        </main>
    </div>
</body>
</html>
"#,
        title = escape(title),
        content = content,
    ))
}

/// List of validation messages shown under a form
pub fn error_list(errors: &ValidationErrors) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let items: String = errors
        .iter()
        .map(|e| format!("<li>{}</li>", escape(&e.message)))
        .collect();
    format!("<ul class=\"errors\">{}</ul>", items)
}

/// `<option>` for a select box, marked selected when it matches
pub fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>",
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    )
}

/// Error page used for not-found and internal failures
pub fn error_page(title: &str, message: &str) -> Html<String> {
    page(
        title,
        &format!(
            "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/catalog\">Back to the catalog</a></p>",
            escape(title),
            escape(message)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#x27;y&#x27;&lt;/script&gt;"
        );
        assert_eq!(escape("Science Fiction"), "Science Fiction");
    }

    #[test]
    fn test_error_list() {
        let mut errors = ValidationErrors::new();
        assert_eq!(error_list(&errors), "");

        errors.add("name", "Genre name must contain at least 3 characters.");
        let html = error_list(&errors);
        assert!(html.contains("<li>Genre name must contain at least 3 characters.</li>"));
    }

    #[test]
    fn test_page_escapes_title() {
        let Html(html) = page("<b>Genre</b>", "<p>body</p>");
        assert!(html.contains("<title>&lt;b&gt;Genre&lt;/b&gt;</title>"));
        assert!(html.contains("<p>body</p>"));
    }
}
