use error_stack::Report;
use serde_json::Value;

use application::transfer::{CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};
use kernel::KernelError;

use crate::controller::{Intake, TryIntake};
use crate::validation::{as_integer, validate, FieldRule, FieldType};

static CREATE_BOOK_RULES: &[FieldRule] = &[
    FieldRule::required("isbn", FieldType::String),
    FieldRule::required("amazon_url", FieldType::String),
    FieldRule::required("author", FieldType::String),
    FieldRule::required("language", FieldType::String),
    FieldRule::required("pages", FieldType::Integer),
    FieldRule::required("publisher", FieldType::String),
    FieldRule::required("title", FieldType::String),
    FieldRule::required("year", FieldType::Integer).with_minimum(1600),
];

// The isbn is addressed by the path on update and is not part of the body.
static UPDATE_BOOK_RULES: &[FieldRule] = &[
    FieldRule::required("amazon_url", FieldType::String),
    FieldRule::required("author", FieldType::String),
    FieldRule::required("language", FieldType::String),
    FieldRule::required("pages", FieldType::Integer),
    FieldRule::required("publisher", FieldType::String),
    FieldRule::required("title", FieldType::String),
    FieldRule::required("year", FieldType::Integer).with_minimum(1600),
];

/// Create payload, kept as raw JSON until shape validation has run so every
/// violation can be reported at once.
#[derive(Debug)]
pub struct CreateBookRequest(pub Value);

#[derive(Debug)]
pub struct UpdateBookRequest {
    isbn: String,
    body: Value,
}

impl UpdateBookRequest {
    pub fn new(isbn: String, body: Value) -> Self {
        Self { isbn, body }
    }
}

#[derive(Debug)]
pub struct GetBookRequest {
    isbn: String,
}

impl GetBookRequest {
    pub fn new(isbn: String) -> Self {
        Self { isbn }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    isbn: String,
}

impl DeleteBookRequest {
    pub fn new(isbn: String) -> Self {
        Self { isbn }
    }
}

fn reject(messages: Vec<String>) -> Report<KernelError> {
    Report::new(KernelError::Validation(messages))
}

// Field extraction runs only after the rule table has passed, so a miss here
// means the rules and this mapping no longer agree.
fn mapping_drift(name: &str) -> Report<KernelError> {
    Report::new(KernelError::Internal)
        .attach_printable(format!("field {name} missing from a validated payload"))
}

fn text(body: &Value, name: &'static str) -> error_stack::Result<String, KernelError> {
    body.get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| mapping_drift(name))
}

fn integer(body: &Value, name: &'static str) -> error_stack::Result<i32, KernelError> {
    body.get(name)
        .and_then(as_integer)
        .ok_or_else(|| mapping_drift(name))
}

pub struct BookTransformer;

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = Report<KernelError>;

    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        let CreateBookRequest(body) = input;
        let messages = validate(CREATE_BOOK_RULES, &body);
        if !messages.is_empty() {
            return Err(reject(messages));
        }
        Ok(CreateBookDto {
            isbn: text(&body, "isbn")?,
            amazon_url: text(&body, "amazon_url")?,
            author: text(&body, "author")?,
            language: text(&body, "language")?,
            pages: integer(&body, "pages")?,
            publisher: text(&body, "publisher")?,
            title: text(&body, "title")?,
            year: integer(&body, "year")?,
        })
    }
}

impl TryIntake<UpdateBookRequest> for BookTransformer {
    type To = UpdateBookDto;
    type Error = Report<KernelError>;

    fn emit(&self, input: UpdateBookRequest) -> Result<Self::To, Self::Error> {
        let messages = validate(UPDATE_BOOK_RULES, &input.body);
        if !messages.is_empty() {
            return Err(reject(messages));
        }
        let body = input.body;
        Ok(UpdateBookDto {
            isbn: input.isbn,
            amazon_url: text(&body, "amazon_url")?,
            author: text(&body, "author")?,
            language: text(&body, "language")?,
            pages: integer(&body, "pages")?,
            publisher: text(&body, "publisher")?,
            title: text(&body, "title")?,
            year: integer(&body, "year")?,
        })
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { isbn: input.isbn }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { isbn: input.isbn }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use kernel::KernelError;

    use crate::controller::TryIntake;

    use super::{BookTransformer, CreateBookRequest, UpdateBookRequest};

    fn violation_messages(report: &error_stack::Report<KernelError>) -> Vec<String> {
        match report.current_context() {
            KernelError::Validation(messages) => messages.clone(),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn create_maps_a_complete_payload() {
        let dto = BookTransformer
            .emit(CreateBookRequest(json!({
                "isbn": "111111111",
                "amazon_url": "amazon.com",
                "author": "AuthorTest2",
                "language": "EnglishTest2",
                "pages": 100,
                "publisher": "PublisherTest2",
                "title": "TitleTest2",
                "year": 2000,
            })))
            .unwrap();
        assert_eq!(dto.isbn, "111111111");
        assert_eq!(dto.title, "TitleTest2");
        assert_eq!(dto.pages, 100);
    }

    #[test]
    fn create_accepts_integral_float_numbers() {
        let dto = BookTransformer
            .emit(CreateBookRequest(json!({
                "isbn": "111111111",
                "amazon_url": "amazon.com",
                "author": "AuthorTest2",
                "language": "EnglishTest2",
                "pages": 100.0,
                "publisher": "PublisherTest2",
                "title": "TitleTest2",
                "year": 2000.0,
            })))
            .unwrap();
        assert_eq!(dto.pages, 100);
        assert_eq!(dto.year, 2000);
    }

    #[test]
    fn create_rejects_pages_outside_the_column_range() {
        let report = BookTransformer
            .emit(CreateBookRequest(json!({
                "isbn": "111111111",
                "amazon_url": "amazon.com",
                "author": "AuthorTest2",
                "language": "EnglishTest2",
                "pages": 3_000_000_000_i64,
                "publisher": "PublisherTest2",
                "title": "TitleTest2",
                "year": 2000,
            })))
            .unwrap_err();
        assert_eq!(
            violation_messages(&report),
            vec!["instance.pages is not of a type(s) integer"]
        );
    }

    #[test]
    fn create_rejects_a_missing_title() {
        let report = BookTransformer
            .emit(CreateBookRequest(json!({
                "isbn": "111111111",
                "amazon_url": "amazon.com",
                "author": "AuthorTest2",
                "language": "EnglishTest2",
                "pages": 100,
                "publisher": "PublisherTest2",
                "year": 2000,
            })))
            .unwrap_err();
        assert_eq!(
            violation_messages(&report),
            vec!["instance requires property \"title\""]
        );
    }

    #[test]
    fn update_takes_the_isbn_from_the_path() {
        let dto = BookTransformer
            .emit(UpdateBookRequest::new(
                "1234567890".to_string(),
                json!({
                    "amazon_url": "amazon.com",
                    "author": "AuthorTest",
                    "language": "EnglishTest",
                    "pages": 100,
                    "publisher": "PublisherTest",
                    "title": "TestTestTest",
                    "year": 2000,
                }),
            ))
            .unwrap();
        assert_eq!(dto.isbn, "1234567890");
        assert_eq!(dto.title, "TestTestTest");
    }

    #[test]
    fn update_accumulates_every_violation_in_order() {
        let report = BookTransformer
            .emit(UpdateBookRequest::new(
                "1234567890".to_string(),
                json!({
                    "pages": "100",
                    "publisher": "PublisherTest2",
                    "title": "TitleTest2",
                    "year": 2000,
                }),
            ))
            .unwrap_err();
        assert_eq!(
            violation_messages(&report),
            vec![
                "instance requires property \"amazon_url\"",
                "instance requires property \"author\"",
                "instance requires property \"language\"",
                "instance.pages is not of a type(s) integer",
            ]
        );
    }

    #[test]
    fn update_ignores_a_stray_isbn_in_the_body() {
        let dto = BookTransformer
            .emit(UpdateBookRequest::new(
                "1234567890".to_string(),
                json!({
                    "isbn": "999",
                    "amazon_url": "amazon.com",
                    "author": "AuthorTest",
                    "language": "EnglishTest",
                    "pages": 100,
                    "publisher": "PublisherTest",
                    "title": "TitleTest",
                    "year": 2000,
                }),
            ))
            .unwrap();
        assert_eq!(dto.isbn, "1234567890");
    }
}
