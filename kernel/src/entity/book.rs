mod amazon_url;
mod author;
mod isbn;
mod language;
mod pages;
mod publisher;
mod title;
mod year;

pub use self::{
    amazon_url::*, author::*, isbn::*, language::*, pages::*, publisher::*, title::*, year::*,
};

use destructure::Destructure;

/// A single catalog entry. The isbn is the identity and never changes after
/// creation; every other field is replaced wholesale on update.
#[derive(Debug, Clone, Eq, PartialEq, Destructure)]
pub struct Book {
    isbn: BookIsbn,
    amazon_url: AmazonUrl,
    author: BookAuthor,
    language: BookLanguage,
    pages: BookPages,
    publisher: BookPublisher,
    title: BookTitle,
    year: BookYear,
}

impl Book {
    pub fn new(
        isbn: BookIsbn,
        amazon_url: AmazonUrl,
        author: BookAuthor,
        language: BookLanguage,
        pages: BookPages,
        publisher: BookPublisher,
        title: BookTitle,
        year: BookYear,
    ) -> Self {
        Self {
            isbn,
            amazon_url,
            author,
            language,
            pages,
            publisher,
            title,
            year,
        }
    }

    pub fn isbn(&self) -> &BookIsbn {
        &self.isbn
    }

    pub fn amazon_url(&self) -> &AmazonUrl {
        &self.amazon_url
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn language(&self) -> &BookLanguage {
        &self.language
    }

    pub fn pages(&self) -> &BookPages {
        &self.pages
    }

    pub fn publisher(&self) -> &BookPublisher {
        &self.publisher
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn year(&self) -> &BookYear {
        &self.year
    }
}
