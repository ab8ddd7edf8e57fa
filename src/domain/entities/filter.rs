//! Query filter for listing categories.

/// Shapes a category listing. Not persisted.
///
/// Results are always ordered by descending id. The cursor is the id of the
/// last row the caller has seen; the next page starts strictly below it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Maximum number of rows; `0` means unbounded.
    pub num: u64,
    pub cursor: Option<String>,
    pub keyword: Option<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num(mut self, num: u64) -> Self {
        self.num = num;
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// The cursor, with an empty string treated as unset.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|c| !c.is_empty())
    }

    /// The keyword, with an empty string treated as unset.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }

    /// The row cap, or `None` when unbounded.
    pub fn limit(&self) -> Option<i64> {
        (self.num > 0).then(|| i64::try_from(self.num).unwrap_or(i64::MAX))
    }
}
