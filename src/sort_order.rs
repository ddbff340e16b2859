//! Sort direction and its fail-open validation.
//!
//! Query state is untrusted. Anything that is not exactly `asc` or `desc`,
//! including a missing or repeated parameter, resolves to the default
//! [`SortOrder::Asc`] instead of an error, so a bad URL still renders a page.
//!
//! ```rust
//! use sortlist::{QueryValue, SortOrder, validate_sort_order};
//!
//! assert_eq!(validate_sort_order(&QueryValue::from("desc")), SortOrder::Desc);
//! assert_eq!(validate_sort_order(&QueryValue::from("DESC")), SortOrder::Asc);
//! assert_eq!(validate_sort_order(&QueryValue::Absent), SortOrder::Asc);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::search_params::QueryValue;

/// A validated sort direction.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Returns the query-string representation (`"asc"` or `"desc"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc  => "asc",
            Self::Desc => "desc",
        }
    }

    /// Exact, case-sensitive match against the two query-string spellings.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc"  => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _      => None,
        }
    }

    /// Orders `a` relative to `b` in this direction.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Asc  => a.cmp(b),
            Self::Desc => b.cmp(a),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` iff `value` is exactly `"asc"` or `"desc"`. No trimming.
pub fn is_sort_order(value: &str) -> bool {
    SortOrder::parse(value).is_some()
}

/// Resolves raw query input to a [`SortOrder`], defaulting to `Asc`.
///
/// Repeated parameters are rejected whatever they contain.
pub fn validate_sort_order(value: &QueryValue) -> SortOrder {
    match value {
        QueryValue::Absent => SortOrder::default(),
        QueryValue::Single(raw) if raw.is_empty() => SortOrder::default(),
        QueryValue::Multiple(_) => SortOrder::default(),
        QueryValue::Single(raw) if !is_sort_order(raw) => SortOrder::default(),
        QueryValue::Single(raw) => SortOrder::parse(raw).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_only_exact_spellings() {
        assert!(is_sort_order("asc"));
        assert!(is_sort_order("desc"));
        assert!(!is_sort_order(""));
        assert!(!is_sort_order("foobar"));
        assert!(!is_sort_order("ASC"));
        assert!(!is_sort_order(" asc"));
    }

    #[test]
    fn missing_or_empty_defaults_to_asc() {
        assert_eq!(validate_sort_order(&QueryValue::Absent), SortOrder::Asc);
        assert_eq!(validate_sort_order(&QueryValue::from(None)), SortOrder::Asc);
        assert_eq!(validate_sort_order(&QueryValue::from("")), SortOrder::Asc);
    }

    #[test]
    fn repeated_values_default_to_asc() {
        assert_eq!(validate_sort_order(&QueryValue::Multiple(vec![])), SortOrder::Asc);

        let abc = QueryValue::from(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);
        assert_eq!(validate_sort_order(&abc), SortOrder::Asc);

        let desc_twice = QueryValue::from(vec!["desc".to_owned(), "desc".to_owned()]);
        assert_eq!(validate_sort_order(&desc_twice), SortOrder::Asc);
    }

    #[test]
    fn single_values_pass_through_when_recognised() {
        assert_eq!(validate_sort_order(&QueryValue::from("asc")), SortOrder::Asc);
        assert_eq!(validate_sort_order(&QueryValue::from("desc")), SortOrder::Desc);
        assert_eq!(validate_sort_order(&QueryValue::from("foobar")), SortOrder::Asc);
    }

    #[test]
    fn compare_reverses_for_desc() {
        assert_eq!(SortOrder::Asc.compare("apple", "banana"), Ordering::Less);
        assert_eq!(SortOrder::Desc.compare("apple", "banana"), Ordering::Greater);
        assert_eq!(SortOrder::Desc.to_string(), "desc");
    }
}
