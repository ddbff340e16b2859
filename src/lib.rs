//! # sortlist
//!
//! A small server-rendered site whose list page is sorted by a query
//! parameter. `?sortOrder=asc` or `?sortOrder=desc` picks the direction;
//! anything else, including no parameter at all, renders ascending.
//!
//! ## The loop
//!
//! ```text
//! GET /list?sortOrder=desc          read path
//!   → validate_sort_order           fail open to asc
//!   → ListControls + List           render
//!
//! POST /list/sort/asc?sortOrder=desc   write path (button click)
//!   → ListControls::handle_sort     rewrite the query, keep other params
//!   → 303 /list?sortOrder=asc       the browser navigates, read path again
//! ```
//!
//! No state survives a request. The URL is the only place the sort order
//! lives.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use sortlist::{Server, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sortlist::Error> {
//!     Server::bind("127.0.0.1:3000".parse()?).serve(app()).await
//! }
//! ```

mod app;
mod controls;
mod deferred;
mod error;
mod handler;
mod list;
mod navigation;
mod request;
mod response;
mod router;
mod search_params;
mod server;
mod sort_order;

pub mod config;
pub mod html;
pub mod pages;

pub use app::{LIST_PATH, app};
pub use controls::{ListControls, SORT_ORDER_KEY};
pub use deferred::{Deferred, Resolver};
pub use error::Error;
pub use handler::Handler;
pub use list::{ITEMS, List, sort_items};
pub use navigation::{Location, Navigator, Redirect};
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use search_params::{QueryValue, SearchParams};
pub use server::Server;
pub use sort_order::{SortOrder, is_sort_order, validate_sort_order};
