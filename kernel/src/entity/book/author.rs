#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn new(author: impl Into<String>) -> Self {
        Self(author.into())
    }
}

impl AsRef<str> for BookAuthor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BookAuthor> for String {
    fn from(author: BookAuthor) -> Self {
        author.0
    }
}
