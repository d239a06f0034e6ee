#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookPublisher(String);

impl BookPublisher {
    pub fn new(publisher: impl Into<String>) -> Self {
        Self(publisher.into())
    }
}

impl AsRef<str> for BookPublisher {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BookPublisher> for String {
    fn from(publisher: BookPublisher) -> Self {
        publisher.0
    }
}
