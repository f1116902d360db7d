use serde::{Deserialize, Serialize};

use crate::year;

/// One news article as read from a source. Fields are free-form text and are
/// never validated against a schema; `date` is expected to look like
/// "YYYY-MM-DD" but may be anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub category: String,
    pub date: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Publication year parsed from the date field, or 0 when the date is
    /// malformed. This is the sort and search key.
    pub fn year(&self) -> i32 {
        year::extract(&self.date)
    }
}
