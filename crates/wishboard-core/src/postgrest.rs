//! PostgREST Query Helpers
//!
//! Builds the query strings the REST gateway sends and reads the row total
//! out of a count response.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Filter values keep `-`, `_`, `.` and `~` readable
const VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Ordered list of query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.into()));
        self
    }

    /// `column=eq.value`
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params
            .push((column.into(), format!("eq.{}", utf8_percent_encode(value, VALUE))));
        self
    }

    pub fn order(mut self, column: &str, descending: bool) -> Self {
        let dir = if descending { "desc" } else { "asc" };
        self.params.push(("order".into(), format!("{column}.{dir}")));
        self
    }

    pub fn on_conflict(mut self, columns: &[&str]) -> Self {
        self.params.push(("on_conflict".into(), columns.join(",")));
        self
    }

    pub fn to_query_string(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let joined = self
            .params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}

/// Total from a `Content-Range` header such as `0-9/42` or `*/0`
pub fn content_range_total(header: &str) -> Option<usize> {
    header.rsplit_once('/')?.1.trim().parse().ok()
}
