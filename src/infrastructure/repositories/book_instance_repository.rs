//! SeaORM implementation of BookInstanceRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{
    Book, BookInstance, BookInstanceRepository, BookInstanceStatus, BookInstanceWithBook,
    DomainError, NewBookInstance,
};
use crate::models::book::{Column as BookColumn, Entity as BookEntity};
use crate::models::book_instance::{ActiveModel, Column, Entity as BookInstanceEntity};

/// SeaORM-based implementation of BookInstanceRepository
pub struct SeaOrmBookInstanceRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookInstanceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookInstanceRepository for SeaOrmBookInstanceRepository {
    async fn find_all(&self) -> Result<Vec<BookInstanceWithBook>, DomainError> {
        let instances_with_books = BookInstanceEntity::find()
            .find_also_related(BookEntity)
            .order_by_asc(BookColumn::Title)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(instances_with_books
            .into_iter()
            .map(|(instance, book)| BookInstanceWithBook {
                instance: BookInstance::from(instance),
                book: book.map(Book::from),
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<BookInstanceWithBook>, DomainError> {
        let result = BookInstanceEntity::find_by_id(id)
            .find_also_related(BookEntity)
            .one(&self.db)
            .await?;

        Ok(result.map(|(instance, book)| BookInstanceWithBook {
            instance: BookInstance::from(instance),
            book: book.map(Book::from),
        }))
    }

    async fn find_by_book(&self, book_id: i32) -> Result<Vec<BookInstance>, DomainError> {
        let instances = BookInstanceEntity::find()
            .filter(Column::BookId.eq(book_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(instances.into_iter().map(BookInstance::from).collect())
    }

    async fn create(&self, input: NewBookInstance) -> Result<BookInstance, DomainError> {
        let instance = ActiveModel {
            book_id: Set(input.book_id),
            imprint: Set(input.imprint),
            status: Set(input.status),
            due_back: Set(input.due_back),
            ..Default::default()
        };

        let result = instance.insert(&self.db).await?;

        Ok(BookInstance::from(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = BookInstanceEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(BookInstanceEntity::find().count(&self.db).await?)
    }

    async fn count_available(&self) -> Result<u64, DomainError> {
        Ok(BookInstanceEntity::find()
            .filter(Column::Status.eq(BookInstanceStatus::Available))
            .count(&self.db)
            .await?)
    }
}
