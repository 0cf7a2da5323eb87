//! Ordered query-parameter builder.
//!
//! Entries are declared once, in order, and only contribute when they carry
//! a value. Repeated keys are kept as separate pairs so list filters reach
//! the backend as `key=a&key=b`.

/// Ordered list of query pairs, ready for `reqwest::RequestBuilder::query`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` when `value` is present and non-empty.
    pub fn text(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Append `key=transform(value)` when `value` is present and non-zero.
    pub fn number<F>(mut self, key: &'static str, value: Option<u32>, transform: F) -> Self
    where
        F: FnOnce(u32) -> u32,
    {
        if let Some(value) = value.filter(|v| *v != 0) {
            self.pairs.push((key, transform(value).to_string()));
        }
        self
    }

    /// Append one `key=item` pair per element, in order.
    pub fn each<I>(mut self, key: &'static str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.pairs
            .extend(values.into_iter().map(|v| (key, v.to_string())));
        self
    }

    /// All values recorded under `key`, in order.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if no entry contributed a pair.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The recorded pairs.
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}
