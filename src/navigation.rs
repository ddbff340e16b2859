//! Where the user is, and how to send them somewhere else.
//!
//! Components never look the current URL up on their own. The request hands
//! them a [`Location`], and they ask a [`Navigator`] to go elsewhere.

use http::StatusCode;
use tracing::debug;

use crate::response::{IntoResponse, Response};
use crate::search_params::SearchParams;

/// The current path and query parameters of a render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    params: SearchParams,
}

impl Location {
    pub fn new(path: impl Into<String>, params: SearchParams) -> Self {
        Self { path: path.into(), params }
    }

    pub fn path(&self) -> &str { &self.path }
    pub fn params(&self) -> &SearchParams { &self.params }
}

/// Requests a navigation to a new URL. Fire-and-forget: the caller does not
/// wait for the new page.
pub trait Navigator {
    fn push(&mut self, url: String);
}

/// Records every push, oldest first.
impl Navigator for Vec<String> {
    fn push(&mut self, url: String) {
        Vec::push(self, url);
    }
}

/// Turns a navigation request into a `303 See Other` response.
///
/// When pushed more than once, the last target wins.
#[derive(Debug, Default)]
pub struct Redirect {
    target: Option<String>,
}

impl Redirect {
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl Navigator for Redirect {
    fn push(&mut self, url: String) {
        debug!(url = %url, "navigating");
        self.target = Some(url);
    }
}

/// Nothing pushed means nothing to follow: `204 No Content`.
impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        match self.target {
            Some(url) => Response::redirect(&url),
            None => Response::status(StatusCode::NO_CONTENT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_records_in_order() {
        let mut history: Vec<String> = Vec::new();
        Navigator::push(&mut history, "/a".to_owned());
        Navigator::push(&mut history, "/b".to_owned());
        assert_eq!(history, ["/a", "/b"]);
    }

    #[test]
    fn redirect_follows_last_push() {
        let mut redirect = Redirect::default();
        redirect.push("/a".to_owned());
        redirect.push("/b".to_owned());
        assert_eq!(redirect.target(), Some("/b"));

        let res = redirect.into_response();
        assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(res.header("location"), Some("/b"));
    }

    #[test]
    fn redirect_without_push_is_no_content() {
        let res = Redirect::default().into_response();
        assert_eq!(res.status_code(), StatusCode::NO_CONTENT);
    }
}
