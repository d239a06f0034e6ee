use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Book, BookIsbn};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier: 'static + Sync + Send {
    type Connection: Send;

    /// Inserts a new row and returns it as persisted. Fails with
    /// [`KernelError::Conflict`] when the isbn is already taken.
    async fn create(
        &self,
        con: &mut Self::Connection,
        book: &Book,
    ) -> error_stack::Result<Book, KernelError>;

    /// Replaces every non-key column of the row addressed by the book's isbn.
    /// Returns `None` when no row carries that isbn.
    async fn update(
        &self,
        con: &mut Self::Connection,
        book: &Book,
    ) -> error_stack::Result<Option<Book>, KernelError>;

    /// Removes the addressed row. Returns `false` when no row carried the
    /// isbn.
    async fn delete(
        &self,
        con: &mut Self::Connection,
        isbn: &BookIsbn,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookModifier: BookModifier<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn book_modifier(&self) -> &Self::BookModifier;
}
