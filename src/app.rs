//! Route table and page handlers.
//!
//! | Method | Path | Page |
//! |---|---|---|
//! | `GET`  | `/` | home |
//! | `GET`  | `/asyncpage` | `foo` read by awaiting the parameters |
//! | `GET`  | `/syncpage` | `foo` read by blocking on the parameters |
//! | `GET`  | `/list` | sortable list |
//! | `POST` | `/list/sort/{direction}` | sort button, redirects back to `/list` |

use crate::controls::ListControls;
use crate::error::Error;
use crate::navigation::{Location, Redirect};
use crate::pages;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::search_params::QueryValue;
use crate::sort_order::validate_sort_order;

/// Path of the list page.
pub const LIST_PATH: &str = "/list";

/// Builds the application router.
pub fn app() -> Router {
    Router::new()
        .get("/", home)
        .get("/asyncpage", async_page)
        .get("/syncpage", sync_page)
        .get(LIST_PATH, list)
        .post("/list/sort/{direction}", sort)
}

async fn home(_req: Request) -> Response {
    Response::html(pages::layout(&pages::home()))
}

async fn async_page(req: Request) -> Result<Response, Error> {
    let body = pages::async_page(req.search_params()).await?;
    Ok(Response::html(pages::layout(&body)))
}

async fn sync_page(req: Request) -> Result<Response, Error> {
    let body = pages::sync_page(req.search_params())?;
    Ok(Response::html(pages::layout(&body)))
}

async fn list(req: Request) -> Result<Response, Error> {
    let location = req.location();
    let body = pages::list_page(req.search_params(), &location).await?;
    Ok(Response::html(pages::layout(&body)))
}

// POST /list/sort/{direction}?<current list query>
//
// An unknown direction falls back to ascending like any other bad input.
async fn sort(req: Request) -> Redirect {
    let direction = validate_sort_order(&QueryValue::from(req.param("direction")));
    let location = Location::new(LIST_PATH, req.query_params());

    let mut redirect = Redirect::default();
    ListControls::new(&location).handle_sort(direction, &mut redirect);
    redirect
}
