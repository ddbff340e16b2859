//! Ordered list rendering.

use std::fmt::Write as _;

use crate::html::{Render, escape};
use crate::sort_order::SortOrder;

/// Sample items shown on the list page.
pub const ITEMS: [&str; 4] = ["apple", "banana", "cherry", "lemon"];

/// Reorders `items` in place. Relative order of equal items is unspecified.
pub fn sort_items<T: AsRef<str>>(items: &mut [T], order: SortOrder) {
    items.sort_unstable_by(|a, b| order.compare(a.as_ref(), b.as_ref()));
}

/// A sorted list of items, rendered as a `<ul>`.
///
/// Each entry is keyed by its own text, so duplicate items share a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct List {
    items: Vec<String>,
}

impl List {
    pub fn new<I>(items: I, order: SortOrder) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut items: Vec<String> = items.into_iter().map(Into::into).collect();
        sort_items(&mut items, order);
        Self { items }
    }

    /// Items in display order.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl Render for List {
    fn render(&self, out: &mut String) {
        out.push_str(r#"<ul class="list-disc">"#);
        for item in &self.items {
            let item = escape(item);
            let _ = write!(out, r#"<li data-key="{item}">{item}</li>"#);
        }
        out.push_str("</ul>");
    }
}
