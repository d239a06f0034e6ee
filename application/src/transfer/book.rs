use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            isbn,
            amazon_url,
            author,
            language,
            pages,
            publisher,
            title,
            year,
        } = value.into_destruct();
        Self {
            isbn: isbn.into(),
            amazon_url: amazon_url.into(),
            author: author.into(),
            language: language.into(),
            pages: pages.into(),
            publisher: publisher.into(),
            title: title.into(),
            year: year.into(),
        }
    }
}

pub struct GetBookDto {
    pub isbn: String,
}

#[derive(Debug)]
pub struct CreateBookDto {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

#[derive(Debug)]
pub struct UpdateBookDto {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

pub struct DeleteBookDto {
    pub isbn: String,
}
