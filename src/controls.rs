//! Sort controls for the list page.
//!
//! The controls show the active direction and offer two buttons. A click
//! never touches in-memory state: it rewrites the query string and navigates,
//! and the page renders again from the new URL.

use std::fmt::Write as _;

use crate::html::{Render, escape};
use crate::navigation::{Location, Navigator};
use crate::search_params::QueryValue;
use crate::sort_order::{SortOrder, validate_sort_order};

/// Query parameter holding the sort direction.
pub const SORT_ORDER_KEY: &str = "sortOrder";

/// Label and buttons for changing the list's sort order.
#[derive(Debug)]
pub struct ListControls<'a> {
    location: &'a Location,
    sort_order: SortOrder,
}

impl<'a> ListControls<'a> {
    /// Reads the active direction from the first `sortOrder` value of the
    /// current location.
    pub fn new(location: &'a Location) -> Self {
        let raw = QueryValue::from(location.params().get(SORT_ORDER_KEY));
        Self { location, sort_order: validate_sort_order(&raw) }
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Navigates to the current path with `sortOrder` set to `direction`.
    ///
    /// Every other parameter is carried over untouched and in order; any
    /// existing `sortOrder` is overwritten where it stood.
    pub fn handle_sort(&self, direction: SortOrder, navigator: &mut impl Navigator) {
        let mut params = self.location.params().clone();
        params.set(SORT_ORDER_KEY, direction.as_str());
        navigator.push(format!("{}?{params}", self.location.path()));
    }

    /// Endpoint a button posts to. The current query rides along so the
    /// action can rebuild the same location server-side.
    fn action(&self, direction: SortOrder) -> String {
        let params = self.location.params();
        let mut action = format!("{}/sort/{direction}", self.location.path());
        if !params.is_empty() {
            let _ = write!(action, "?{params}");
        }
        action
    }
}

impl Render for ListControls<'_> {
    fn render(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"<div><div class="mb-2">current sort order: {}</div><div class="flex gap-1">"#,
            self.sort_order,
        );
        for (direction, label) in [(SortOrder::Asc, "sort ascending"), (SortOrder::Desc, "sort descending")] {
            let _ = write!(
                out,
                r#"<form method="post" action="{}"><button type="submit" class="bg-blue-700 text-white py-1 px-4 rounded-sm">{label}</button></form>"#,
                escape(&self.action(direction)),
            );
        }
        out.push_str("</div></div>");
    }
}
