use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookYear(i32);

impl BookYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}

impl AsRef<i32> for BookYear {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl From<BookYear> for i32 {
    fn from(year: BookYear) -> Self {
        year.0
    }
}
