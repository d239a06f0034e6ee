use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    AmazonUrl, Book, BookAuthor, BookIsbn, BookLanguage, BookPages, BookPublisher, BookTitle,
    BookYear,
};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};

// Wire format kept from the original API: single leading quote, no closing
// quote.
fn missing_book(isbn: &BookIsbn) -> Report<KernelError> {
    Report::new(KernelError::NotFound(format!(
        "There is no book with an isbn '{}",
        isbn.as_ref()
    )))
}

#[async_trait::async_trait]
pub trait GetAllBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookQuery
{
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut con = self.database_connection().acquire().await?;
        let books = self.book_query().find_all(&mut con).await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetAllBookService for T where T: DependOnDatabaseConnection + DependOnBookQuery {}

#[async_trait::async_trait]
pub trait GetBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookQuery
{
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut con = self.database_connection().acquire().await?;
        let isbn = BookIsbn::new(dto.isbn);
        match self.book_query().find_by_isbn(&mut con, &isbn).await? {
            None => Err(missing_book(&isbn)),
            Some(book) => Ok(BookDto::from(book)),
        }
    }
}

impl<T> GetBookService for T where T: DependOnDatabaseConnection + DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut con = self.database_connection().acquire().await?;
        let book = Book::new(
            BookIsbn::new(dto.isbn),
            AmazonUrl::new(dto.amazon_url),
            BookAuthor::new(dto.author),
            BookLanguage::new(dto.language),
            BookPages::new(dto.pages),
            BookPublisher::new(dto.publisher),
            BookTitle::new(dto.title),
            BookYear::new(dto.year),
        );
        let created = self.book_modifier().create(&mut con, &book).await?;
        Ok(BookDto::from(created))
    }
}

impl<T> CreateBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    /// Full replacement of the addressed row. The isbn comes from the request
    /// path and is never changed by this operation.
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut con = self.database_connection().acquire().await?;
        let book = Book::new(
            BookIsbn::new(dto.isbn),
            AmazonUrl::new(dto.amazon_url),
            BookAuthor::new(dto.author),
            BookLanguage::new(dto.language),
            BookPages::new(dto.pages),
            BookPublisher::new(dto.publisher),
            BookTitle::new(dto.title),
            BookYear::new(dto.year),
        );
        match self.book_modifier().update(&mut con, &book).await? {
            None => Err(missing_book(book.isbn())),
            Some(book) => Ok(BookDto::from(book)),
        }
    }
}

impl<T> UpdateBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut con = self.database_connection().acquire().await?;
        let isbn = BookIsbn::new(dto.isbn);
        if self.book_modifier().delete(&mut con, &isbn).await? {
            Ok(())
        } else {
            Err(Report::new(KernelError::NotFound("Not Found".to_string())))
        }
    }
}

impl<T> DeleteBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}
