//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use super::catalog::{
    Author, Book, BookInstance, BookInstanceWithBook, BookWithAuthor, Genre, NewAuthor, NewBook,
    NewBookInstance, NewGenre,
};

/// Repository trait for Author entity
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find all authors, ordered by family name then first name
    async fn find_all(&self) -> Result<Vec<Author>, DomainError>;

    /// Find an author by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DomainError>;

    /// Create a new author
    async fn create(&self, input: NewAuthor) -> Result<Author, DomainError>;

    /// Delete an author by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository trait for Genre entity
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Find all genres, ordered by name
    async fn find_all(&self) -> Result<Vec<Genre>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, DomainError>;

    /// Exact-match lookup used to avoid duplicate genres
    async fn find_by_name(&self, name: &str) -> Result<Option<Genre>, DomainError>;

    async fn create(&self, input: NewGenre) -> Result<Genre, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find all books with their authors, ordered by title
    async fn find_all(&self) -> Result<Vec<BookWithAuthor>, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError>;

    /// Books written by an author, ordered by title
    async fn find_by_author(&self, author_id: i32) -> Result<Vec<Book>, DomainError>;

    /// Books in a genre, ordered by title
    async fn find_by_genre(&self, genre_id: i32) -> Result<Vec<Book>, DomainError>;

    /// Create a new book
    async fn create(&self, input: NewBook) -> Result<Book, DomainError>;

    /// Delete a book by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository trait for BookInstance entity
#[async_trait]
pub trait BookInstanceRepository: Send + Sync {
    /// Find all instances with their books, ordered by book title
    async fn find_all(&self) -> Result<Vec<BookInstanceWithBook>, DomainError>;

    /// Find an instance by ID, together with its book
    async fn find_by_id(&self, id: i32) -> Result<Option<BookInstanceWithBook>, DomainError>;

    /// Instances of a specific book
    async fn find_by_book(&self, book_id: i32) -> Result<Vec<BookInstance>, DomainError>;

    async fn create(&self, input: NewBookInstance) -> Result<BookInstance, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Number of instances currently on the shelf
    async fn count_available(&self) -> Result<u64, DomainError>;
}
