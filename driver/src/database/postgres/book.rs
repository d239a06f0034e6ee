use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};

use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    AmazonUrl, Book, BookAuthor, BookIsbn, BookLanguage, BookPages, BookPublisher, BookTitle,
    BookYear,
};
use kernel::KernelError;

use super::{ConvertError, PostgresDatabase};

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Connection = PoolConnection<Postgres>;

    async fn find_all(
        &self,
        con: &mut PoolConnection<Postgres>,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con).await
    }

    async fn find_by_isbn(
        &self,
        con: &mut PoolConnection<Postgres>,
        isbn: &BookIsbn,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_isbn(con, isbn).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Connection = PoolConnection<Postgres>;

    async fn create(
        &self,
        con: &mut PoolConnection<Postgres>,
        book: &Book,
    ) -> error_stack::Result<Book, KernelError> {
        PgBookInternal::create(con, book).await
    }

    async fn update(
        &self,
        con: &mut PoolConnection<Postgres>,
        book: &Book,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::update(con, book).await
    }

    async fn delete(
        &self,
        con: &mut PoolConnection<Postgres>,
        isbn: &BookIsbn,
    ) -> error_stack::Result<bool, KernelError> {
        PgBookInternal::delete(con, isbn).await
    }
}

impl DependOnBookQuery for PostgresDatabase {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &PostgresBookRepository {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier for PostgresDatabase {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &PostgresBookRepository {
        &PostgresBookRepository
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    isbn: String,
    amazon_url: String,
    author: String,
    language: String,
    pages: i32,
    publisher: String,
    title: String,
    year: i32,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookIsbn::new(value.isbn),
            AmazonUrl::new(value.amazon_url),
            BookAuthor::new(value.author),
            BookLanguage::new(value.language),
            BookPages::new(value.pages),
            BookPublisher::new(value.publisher),
            BookTitle::new(value.title),
            BookYear::new(value.year),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT isbn, amazon_url, author, language, pages, publisher, title, year
            FROM books
            ORDER BY isbn
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_isbn(
        con: &mut PgConnection,
        isbn: &BookIsbn,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT isbn, amazon_url, author, language, pages, publisher, title, year
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn create(con: &mut PgConnection, book: &Book) -> error_stack::Result<Book, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            INSERT INTO books (isbn, amazon_url, author, language, pages, publisher, title, year)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING isbn, amazon_url, author, language, pages, publisher, title, year
            "#,
        )
        .bind(book.isbn().as_ref())
        .bind(book.amazon_url().as_ref())
        .bind(book.author().as_ref())
        .bind(book.language().as_ref())
        .bind(book.pages().as_ref())
        .bind(book.publisher().as_ref())
        .bind(book.title().as_ref())
        .bind(book.year().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(Book::from(row))
    }

    async fn update(
        con: &mut PgConnection,
        book: &Book,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            UPDATE books
            SET amazon_url = $2, author = $3, language = $4, pages = $5,
                publisher = $6, title = $7, year = $8
            WHERE isbn = $1
            RETURNING isbn, amazon_url, author, language, pages, publisher, title, year
            "#,
        )
        .bind(book.isbn().as_ref())
        .bind(book.amazon_url().as_ref())
        .bind(book.author().as_ref())
        .bind(book.language().as_ref())
        .bind(book.pages().as_ref())
        .bind(book.publisher().as_ref())
        .bind(book.title().as_ref())
        .bind(book.year().as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn delete(
        con: &mut PgConnection,
        isbn: &BookIsbn,
    ) -> error_stack::Result<bool, KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{
        AmazonUrl, Book, BookAuthor, BookIsbn, BookLanguage, BookPages, BookPublisher, BookTitle,
        BookYear,
    };
    use kernel::KernelError;

    use crate::database::postgres::{PostgresBookRepository, PostgresDatabase};

    fn sample(isbn: &BookIsbn, title: &str, pages: i32) -> Book {
        Book::new(
            isbn.clone(),
            AmazonUrl::new("amazon.com"),
            BookAuthor::new("AuthorTest"),
            BookLanguage::new("EnglishTest"),
            BookPages::new(pages),
            BookPublisher::new("PublisherTest"),
            BookTitle::new(title),
            BookYear::new(2000),
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn crud_round_trip() -> Result<(), error_stack::Report<KernelError>> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.acquire().await?;
        let isbn = BookIsbn::new(format!("it-{:08}", rand::random::<u32>() % 100_000_000));

        let book = sample(&isbn, "TitleTest", 100);
        let created = PostgresBookRepository.create(&mut con, &book).await?;
        assert_eq!(created, book);

        let found = PostgresBookRepository.find_by_isbn(&mut con, &isbn).await?;
        assert_eq!(found, Some(book.clone()));

        let duplicate = PostgresBookRepository.create(&mut con, &book).await;
        let report = duplicate.expect_err("duplicate isbn must be rejected");
        assert!(matches!(report.current_context(), KernelError::Conflict));

        let replacement = sample(&isbn, "TestTestTest", 101);
        let updated = PostgresBookRepository
            .update(&mut con, &replacement)
            .await?;
        assert_eq!(updated, Some(replacement.clone()));

        let found = PostgresBookRepository.find_by_isbn(&mut con, &isbn).await?;
        assert_eq!(found, Some(replacement));

        assert!(PostgresBookRepository.delete(&mut con, &isbn).await?);
        assert!(!PostgresBookRepository.delete(&mut con, &isbn).await?);

        let found = PostgresBookRepository.find_by_isbn(&mut con, &isbn).await?;
        assert!(found.is_none());

        Ok(())
    }
}
