use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use application::transfer::BookDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct BookBody {
    isbn: String,
    amazon_url: String,
    author: String,
    language: String,
    pages: i32,
    publisher: String,
    title: String,
    year: i32,
}

impl From<BookDto> for BookBody {
    fn from(value: BookDto) -> Self {
        Self {
            isbn: value.isbn,
            amazon_url: value.amazon_url,
            author: value.author,
            language: value.language,
            pages: value.pages,
            publisher: value.publisher,
            title: value.title,
            year: value.year,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    book: BookBody,
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedBookResponse {
    book: BookBody,
}

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookListResponse {
    books: Vec<BookBody>,
}

impl IntoResponse for BookListResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookDeletedResponse {
    message: &'static str,
}

impl IntoResponse for BookDeletedResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = BookListResponse;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        BookListResponse {
            books: input.into_iter().map(BookBody::from).collect(),
        }
    }
}

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse {
            book: input.into(),
        }
    }
}

impl Exhaust<()> for BookPresenter {
    type To = BookDeletedResponse;
    fn emit(&self, _: ()) -> Self::To {
        BookDeletedResponse {
            message: "Book deleted",
        }
    }
}

pub struct CreatedBookPresenter;

impl Exhaust<BookDto> for CreatedBookPresenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        CreatedBookResponse {
            book: input.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use application::transfer::BookDto;
    use serde_json::json;

    use crate::controller::Exhaust;

    use super::{BookPresenter, CreatedBookPresenter};

    fn dto() -> BookDto {
        BookDto {
            isbn: "1234567890".to_string(),
            amazon_url: "amazon.com".to_string(),
            author: "AuthorTest".to_string(),
            language: "EnglishTest".to_string(),
            pages: 100,
            publisher: "PublisherTest".to_string(),
            title: "TitleTest".to_string(),
            year: 2000,
        }
    }

    #[test]
    fn single_book_is_wrapped_in_a_book_key() {
        let response: super::BookResponse = BookPresenter.emit(dto());
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(
            value,
            json!({"book": {
                "isbn": "1234567890",
                "amazon_url": "amazon.com",
                "author": "AuthorTest",
                "language": "EnglishTest",
                "pages": 100,
                "publisher": "PublisherTest",
                "title": "TitleTest",
                "year": 2000,
            }})
        );
    }

    #[test]
    fn created_book_uses_the_same_envelope() {
        let response: super::CreatedBookResponse = CreatedBookPresenter.emit(dto());
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["book"]["title"], "TitleTest");
    }

    #[test]
    fn listing_is_wrapped_in_a_books_key() {
        let response: super::BookListResponse = BookPresenter.emit(vec![dto()]);
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["books"].as_array().unwrap().len(), 1);
        assert_eq!(value["books"][0]["isbn"], "1234567890");
    }

    #[test]
    fn deletion_confirms_with_a_fixed_message() {
        let response: super::BookDeletedResponse = BookPresenter.emit(());
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value, json!({"message": "Book deleted"}));
    }
}
