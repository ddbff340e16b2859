//! Page bodies and the shared document layout.
//!
//! Each page renders to an HTML fragment; [`layout`] wraps a fragment in the
//! document shell and navigation bar.

use std::fmt::Write as _;

use crate::controls::{ListControls, SORT_ORDER_KEY};
use crate::deferred::Deferred;
use crate::error::Error;
use crate::html::{Render, escape};
use crate::list::{ITEMS, List};
use crate::navigation::Location;
use crate::search_params::SearchParams;
use crate::sort_order::validate_sort_order;

const TITLE: &str = "searchParams demo";

const NAV: [(&str, &str); 4] = [
    ("/", "home"),
    ("/asyncpage?foo=bar", "async page"),
    ("/syncpage?foo=bar", "sync page"),
    ("/list", "list"),
];

/// Wraps a page body in the HTML document shell.
pub fn layout(body: &str) -> String {
    let mut out = format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>{TITLE}</title></head><body><nav class="flex gap-4 mb-4">"#
    );
    for (href, label) in NAV {
        let _ = write!(out, r#"<a href="{}">{label}</a>"#, escape(href));
    }
    out.push_str("</nav><main>");
    out.push_str(body);
    out.push_str("</main></body></html>");
    out
}

pub fn home() -> String {
    r#"<h2 class="text-2xl font-bold mb-2">hello world</h2>"#.to_owned()
}

/// Awaits the parameters, yielding while they are pending.
pub async fn async_page(search_params: Deferred<SearchParams>) -> Result<String, Error> {
    let params = search_params.await?;
    Ok(foo_page("async page ?foo=bar", &params))
}

/// Blocks until the parameters arrive. Same output as [`async_page`].
pub fn sync_page(search_params: Deferred<SearchParams>) -> Result<String, Error> {
    let params = search_params.wait()?;
    Ok(foo_page("sync page ?foo=bar", &params))
}

fn foo_page(heading: &str, params: &SearchParams) -> String {
    format!(
        r#"<h2 class="text-2xl font-bold mb-2">{heading}</h2><div>searchParam foo is: {}</div>"#,
        escape(&params.field("foo").text()),
    )
}

/// The sortable list page: heading, controls, then the sample items in the
/// validated order. Any query, however malformed, renders.
pub async fn list_page(
    search_params: Deferred<SearchParams>,
    location: &Location,
) -> Result<String, Error> {
    let params = search_params.await?;
    let sort_order = validate_sort_order(&params.field(SORT_ORDER_KEY));

    let mut out = r#"<h2 class="text-2xl font-bold mb-2">List</h2>"#.to_owned();
    ListControls::new(location).render(&mut out);
    List::new(ITEMS, sort_order).render(&mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(html: &str, items: &[&str]) -> Vec<usize> {
        items.iter()
            .map(|item| html.find(&format!(">{item}</li>")).unwrap())
            .collect()
    }

    async fn render_list(query: &str) -> String {
        let location = Location::new("/list", SearchParams::parse(query));
        list_page(Deferred::ready(location.params().clone()), &location).await.unwrap()
    }

    #[test]
    fn home_says_hello() {
        assert!(home().contains("hello world"));
    }

    #[test]
    fn layout_wraps_body_with_navigation() {
        let html = layout("<p>body</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>searchParams demo</title>"));
        assert!(html.contains(r#"<a href="/list">list</a>"#));
        assert!(html.contains("<main><p>body</p></main>"));
    }

    #[tokio::test]
    async fn async_page_shows_foo() {
        let html = async_page(Deferred::ready(SearchParams::parse("foo=bar"))).await.unwrap();
        assert!(html.contains("async page ?foo=bar"));
        assert!(html.contains("searchParam foo is: bar</div>"));

        let html = async_page(Deferred::ready(SearchParams::new())).await.unwrap();
        assert!(html.contains("searchParam foo is: </div>"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn sync_and_async_pages_agree() {
        for query in ["", "foo=bar", "foo=bar&foo=baz", "foo=%3Cb%3E"] {
            let params = SearchParams::parse(query);

            let (resolver, deferred) = Deferred::channel();
            let producer = tokio::spawn(async move { resolver.resolve(params) });
            let sync = sync_page(deferred).unwrap();
            producer.await.unwrap();

            let awaited = async_page(Deferred::ready(SearchParams::parse(query))).await.unwrap();
            assert_eq!(
                sync.replace("sync page", "page"),
                awaited.replace("async page", "page"),
                "{query}"
            );
        }
    }

    #[tokio::test]
    async fn unresolved_params_fail_the_render() {
        let (resolver, deferred) = Deferred::channel();
        drop(resolver);
        let location = Location::default();
        assert!(matches!(list_page(deferred, &location).await, Err(Error::Unresolved)));
    }

    #[tokio::test]
    async fn list_defaults_to_ascending() {
        let html = render_list("").await;
        assert!(html.contains("<h2 class=\"text-2xl font-bold mb-2\">List</h2>"));
        assert!(html.contains("current sort order: asc"));
        assert!(positions(&html, &["apple", "banana", "cherry", "lemon"]).is_sorted());
    }

    #[tokio::test]
    async fn list_sorts_descending() {
        let html = render_list("sortOrder=desc").await;
        assert!(html.contains("current sort order: desc"));
        assert!(positions(&html, &["lemon", "cherry", "banana", "apple"]).is_sorted());
    }

    #[tokio::test]
    async fn list_fails_open_on_bad_input() {
        for query in ["sortOrder=foobar", "sortOrder=", "sortOrder=desc&sortOrder=desc"] {
            let html = render_list(query).await;
            assert!(positions(&html, &["apple", "banana", "cherry", "lemon"]).is_sorted(), "{query}");
        }
    }
}
