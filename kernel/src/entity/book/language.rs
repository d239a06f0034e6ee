#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookLanguage(String);

impl BookLanguage {
    pub fn new(language: impl Into<String>) -> Self {
        Self(language.into())
    }
}

impl AsRef<str> for BookLanguage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BookLanguage> for String {
    fn from(language: BookLanguage) -> Self {
        language.0
    }
}
