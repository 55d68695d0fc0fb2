//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{Author, Book, BookRepository, BookWithAuthor, DomainError, NewBook};
use crate::models::author::Entity as AuthorEntity;
use crate::models::book::{ActiveModel, Column, Entity as BookEntity};

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_all(&self) -> Result<Vec<BookWithAuthor>, DomainError> {
        let books_with_authors = BookEntity::find()
            .find_also_related(AuthorEntity)
            .order_by_asc(Column::Title)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(books_with_authors
            .into_iter()
            .map(|(book, author)| BookWithAuthor {
                book: Book::from(book),
                author: author.map(Author::from),
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
        let book = BookEntity::find_by_id(id).one(&self.db).await?;

        Ok(book.map(Book::from))
    }

    async fn find_by_author(&self, author_id: i32) -> Result<Vec<Book>, DomainError> {
        let books = BookEntity::find()
            .filter(Column::AuthorId.eq(author_id))
            .order_by_asc(Column::Title)
            .all(&self.db)
            .await?;

        Ok(books.into_iter().map(Book::from).collect())
    }

    async fn find_by_genre(&self, genre_id: i32) -> Result<Vec<Book>, DomainError> {
        let books = BookEntity::find()
            .filter(Column::GenreId.eq(genre_id))
            .order_by_asc(Column::Title)
            .all(&self.db)
            .await?;

        Ok(books.into_iter().map(Book::from).collect())
    }

    async fn create(&self, input: NewBook) -> Result<Book, DomainError> {
        let book = ActiveModel {
            title: Set(input.title),
            author_id: Set(input.author_id),
            summary: Set(input.summary),
            isbn: Set(input.isbn),
            genre_id: Set(input.genre_id),
            ..Default::default()
        };

        let result = book.insert(&self.db).await?;

        Ok(Book::from(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = BookEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(BookEntity::find().count(&self.db).await?)
    }
}
