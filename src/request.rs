//! Incoming HTTP request type.

use std::collections::HashMap;

use http::{Method, Uri};

use crate::deferred::Deferred;
use crate::navigation::Location;
use crate::search_params::SearchParams;

/// An incoming HTTP request, reduced to what a page render needs.
#[derive(Debug)]
pub struct Request {
    method: Method,
    path: String,
    query: String,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(method: Method, uri: &Uri, params: HashMap<String, String>) -> Self {
        Self {
            method,
            path: uri.path().to_owned(),
            query: uri.query().unwrap_or_default().to_owned(),
            params,
        }
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn path(&self) -> &str { &self.path }

    /// Raw query string, without the leading `?`. Empty when there is none.
    pub fn query(&self) -> &str { &self.query }

    /// Returns a named path parameter.
    ///
    /// For a route `/list/sort/{direction}`, `req.param("direction")` on
    /// `/list/sort/desc` returns `Some("desc")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// The query string parsed on the spot.
    pub fn query_params(&self) -> SearchParams {
        SearchParams::parse(&self.query)
    }

    /// The query string as an awaitable source, the way pages receive it.
    pub fn search_params(&self) -> Deferred<SearchParams> {
        Deferred::ready(self.query_params())
    }

    /// Current path and parameters, handed to components that build
    /// navigation targets.
    pub fn location(&self) -> Location {
        Location::new(self.path.clone(), self.query_params())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str) -> Request {
        Request::new(Method::GET, &uri.parse().unwrap(), HashMap::new())
    }

    #[test]
    fn splits_path_and_query() {
        let req = request("/list?sortOrder=desc&foo=bar");
        assert_eq!(req.path(), "/list");
        assert_eq!(req.query(), "sortOrder=desc&foo=bar");
        assert_eq!(req.query_params().get("foo"), Some("bar"));

        let location = req.location();
        assert_eq!(location.path(), "/list");
        assert_eq!(location.params().get("sortOrder"), Some("desc"));
    }

    #[test]
    fn missing_query_is_empty() {
        let req = request("/list");
        assert_eq!(req.query(), "");
        assert!(req.query_params().is_empty());
        assert_eq!(req.param("direction"), None);
    }

    #[tokio::test]
    async fn search_params_resolve_to_the_query() {
        let req = request("/asyncpage?foo=bar");
        assert_eq!(req.search_params().await.unwrap(), req.query_params());
    }
}
