#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AmazonUrl(String);

impl AmazonUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

impl AsRef<str> for AmazonUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<AmazonUrl> for String {
    fn from(url: AmazonUrl) -> Self {
        url.0
    }
}
