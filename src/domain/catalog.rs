//! Catalog entities as seen by handlers and views
//!
//! These carry the derived (non-persisted) display fields: author name and
//! lifespan, detail-page URLs, formatted due-back dates.

use chrono::NaiveDate;
use serde::Serialize;

pub use crate::models::book_instance::Status as BookInstanceStatus;

/// Author data for pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub image_path: Option<String>,
}

impl Author {
    /// "Family, First"
    pub fn name(&self) -> String {
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// "birth - death", with "..." standing in for a missing death date.
    /// Empty when neither date is known.
    pub fn lifespan(&self) -> String {
        match (self.date_of_birth, self.date_of_death) {
            (None, None) => String::new(),
            (birth, death) => format!(
                "{} - {}",
                birth.map(|d| d.to_string()).unwrap_or_default(),
                death
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "...".to_string())
            ),
        }
    }

    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }
}

/// Input for creating an author
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

/// Input for creating a genre
#[derive(Debug, Clone)]
pub struct NewGenre {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author_id: i32,
    pub genre_id: i32,
}

impl Book {
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }
}

/// Input for creating a book
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author_id: i32,
    pub genre_id: i32,
}

/// Book row joined with its author, as shown on the book list
#[derive(Debug, Clone)]
pub struct BookWithAuthor {
    pub book: Book,
    pub author: Option<Author>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookInstance {
    pub id: i32,
    pub book_id: i32,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: Option<NaiveDate>,
}

impl BookInstance {
    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }

    /// Due-back date as "Oct 6, 2024", empty when unset
    pub fn due_back_formatted(&self) -> String {
        self.due_back
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

/// Input for creating a book instance
#[derive(Debug, Clone)]
pub struct NewBookInstance {
    pub book_id: i32,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: Option<NaiveDate>,
}

/// Instance row joined with the book it copies
#[derive(Debug, Clone)]
pub struct BookInstanceWithBook {
    pub instance: BookInstance,
    pub book: Option<Book>,
}

/// Record counts shown on the catalog home page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogCounts {
    pub books: u64,
    pub book_instances: u64,
    pub available_book_instances: u64,
    pub authors: u64,
    pub genres: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(birth: Option<NaiveDate>, death: Option<NaiveDate>) -> Author {
        Author {
            id: 7,
            first_name: "Isaac".to_string(),
            family_name: "Asimov".to_string(),
            date_of_birth: birth,
            date_of_death: death,
            image_path: None,
        }
    }

    #[test]
    fn test_author_name_and_url() {
        let a = author(None, None);
        assert_eq!(a.name(), "Asimov, Isaac");
        assert_eq!(a.url(), "/catalog/author/7");
    }

    #[test]
    fn test_author_lifespan() {
        let birth = NaiveDate::from_ymd_opt(1920, 1, 2);
        let death = NaiveDate::from_ymd_opt(1992, 4, 6);

        assert_eq!(author(None, None).lifespan(), "");
        assert_eq!(author(birth, death).lifespan(), "1920-01-02 - 1992-04-06");
        assert_eq!(author(birth, None).lifespan(), "1920-01-02 - ...");
        assert_eq!(author(None, death).lifespan(), " - 1992-04-06");
    }

    #[test]
    fn test_due_back_formatted() {
        let mut instance = BookInstance {
            id: 3,
            book_id: 1,
            imprint: "Gollancz, 2011.".to_string(),
            status: BookInstanceStatus::Loaned,
            due_back: NaiveDate::from_ymd_opt(2024, 10, 6),
        };
        assert_eq!(instance.due_back_formatted(), "Oct 6, 2024");
        assert_eq!(instance.url(), "/catalog/bookinstance/3");

        instance.due_back = None;
        assert_eq!(instance.due_back_formatted(), "");
    }
}
