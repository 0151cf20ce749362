use std::borrow::Cow;

use url::form_urlencoded;

/// Ordered query string builder. Empty values are dropped so optional
/// parameters never reach the wire.
#[derive(Debug, Default, Clone)]
pub(crate) struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub(crate) fn add_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.add(key, value);
        }
        self
    }

    /// Comma-joined single parameter, e.g. `expand=operations,issuesstatus`.
    pub(crate) fn add_joined<S: AsRef<str>>(&mut self, key: &str, values: &[S]) -> &mut Self {
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        if !joined.is_empty() {
            self.add(key, joined);
        }
        self
    }

    /// One `key=value` pair per element, e.g. `projectKeys=A&projectKeys=B`.
    pub(crate) fn add_each<S: AsRef<str>>(&mut self, key: &str, values: &[S]) -> &mut Self {
        for value in values {
            self.add_opt(key, Some(value.as_ref()));
        }
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Appends `?<encoded>` to `path` when any parameter is set.
    pub(crate) fn append_to(&self, path: String) -> String {
        if self.is_empty() {
            path
        } else {
            format!("{}?{}", path, self.encode())
        }
    }
}

/// Percent-encodes a value interpolated into a path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
