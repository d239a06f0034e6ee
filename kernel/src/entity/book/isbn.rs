use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookIsbn(String);

impl BookIsbn {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }
}

impl AsRef<str> for BookIsbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BookIsbn> for String {
    fn from(isbn: BookIsbn) -> Self {
        isbn.0
    }
}
