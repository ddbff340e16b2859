//! Ordered query-string parameters.
//!
//! A query string is a list, not a map: keys repeat and order matters when
//! the string is written back out. [`SearchParams`] keeps the pairs exactly as
//! they arrived and encodes them with `application/x-www-form-urlencoded`
//! rules, the same way a browser's `URLSearchParams` does.
//!
//! ```rust
//! use sortlist::SearchParams;
//!
//! let mut params = SearchParams::parse("foo=bar&sortOrder=desc&foo=baz");
//! params.set("sortOrder", "asc");
//! assert_eq!(params.to_string(), "foo=bar&sortOrder=asc&foo=baz");
//! ```

use std::fmt;

use url::form_urlencoded;

/// The value of one query parameter as a page sees it.
///
/// A parameter can be left out, given once, or repeated. Pages receive the
/// three cases as distinct variants instead of probing a loosely typed value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QueryValue {
    #[default]
    Absent,
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    /// Text shown when the value is interpolated into a page.
    ///
    /// Repeated values are concatenated with no separator.
    pub fn text(&self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Single(value) => value.clone(),
            Self::Multiple(values) => values.concat(),
        }
    }
}

/// `None` (a "first value or nothing" read) maps to [`QueryValue::Absent`].
impl From<Option<&str>> for QueryValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Absent, Self::from)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

/// An ordered multiset of `(key, value)` query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string. A leading `?` is ignored; `+` and `%XX`
    /// escapes are decoded.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes()).into_owned().collect()
    }

    pub fn len(&self) -> usize { self.pairs.len() }
    pub fn is_empty(&self) -> bool { self.pairs.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).next()
    }

    /// Every value stored under `key`, in arrival order.
    pub fn get_all<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> {
        self.pairs.iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `key` folded into a [`QueryValue`]: absent, single or repeated.
    pub fn field(&self, key: &str) -> QueryValue {
        let mut values: Vec<String> = self.get_all(key).map(str::to_owned).collect();
        match values.len() {
            0 => QueryValue::Absent,
            1 => QueryValue::Single(values.remove(0)),
            _ => QueryValue::Multiple(values),
        }
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Leaves exactly one `key` behind, holding `value`.
    ///
    /// The first existing occurrence keeps its position and every later one
    /// is dropped. When `key` is missing the pair is appended.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let Some(first) = self.pairs.iter().position(|(k, _)| k == key) else {
            self.pairs.push((key.to_owned(), value));
            return;
        };

        self.pairs[first].1 = value;
        let mut index = 0;
        self.pairs.retain(|(k, _)| {
            let keep = index <= first || k != key;
            index += 1;
            keep
        });
    }
}

impl<K, V> FromIterator<(K, V)> for SearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Serialises without a leading `?`.
impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        f.write_str(&serializer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_repeated_keys_in_order() {
        let params = SearchParams::parse("?foo=bar&x=1&foo=baz");
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("foo"), Some("bar"));
        assert_eq!(params.get_all("foo").collect::<Vec<_>>(), ["bar", "baz"]);
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn parse_decodes_form_escapes() {
        let params = SearchParams::parse("q=hello+world&amp=%26");
        assert_eq!(params.get("q"), Some("hello world"));
        assert_eq!(params.get("amp"), Some("&"));
        assert!(SearchParams::parse("").is_empty());
    }

    #[test]
    fn field_distinguishes_absent_single_and_multiple() {
        let params = SearchParams::parse("a=1&b=2&b=3&c=");
        assert_eq!(params.field("z"), QueryValue::Absent);
        assert_eq!(params.field("a"), QueryValue::Single("1".into()));
        assert_eq!(params.field("b"), QueryValue::Multiple(vec!["2".into(), "3".into()]));
        assert_eq!(params.field("c"), QueryValue::Single(String::new()));
    }

    #[test]
    fn set_appends_when_missing() {
        let mut params = SearchParams::parse("foo=bar&foo=baz");
        params.set("sortOrder", "asc");
        assert_eq!(params.to_string(), "foo=bar&foo=baz&sortOrder=asc");
    }

    #[test]
    fn set_overwrites_first_and_drops_the_rest() {
        let mut params = SearchParams::parse("sortOrder=desc&a=1&sortOrder=x");
        params.set("sortOrder", "asc");
        assert_eq!(params.to_string(), "sortOrder=asc&a=1");
    }

    #[test]
    fn display_encodes_reserved_characters() {
        let mut params = SearchParams::new();
        params.append("q", "a b&c");
        assert_eq!(params.to_string(), "q=a+b%26c");
    }

    #[test]
    fn query_value_text_concatenates_repeats() {
        assert_eq!(QueryValue::Absent.text(), "");
        assert_eq!(QueryValue::from("bar").text(), "bar");
        assert_eq!(QueryValue::from(vec!["bar".to_owned(), "baz".to_owned()]).text(), "barbaz");
        assert_eq!(QueryValue::from(None), QueryValue::Absent);
    }
}
