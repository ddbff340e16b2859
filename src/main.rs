//! Serves the sortlist pages.
//!
//! Run with:
//!   RUST_LOG=debug BIND_ADDR=0.0.0.0:3000 cargo run
//!
//! Try:
//!   curl http://localhost:3000/list?sortOrder=desc
//!   curl -i -X POST 'http://localhost:3000/list/sort/asc?foo=bar'

use sortlist::{Server, app, config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), sortlist::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = config::load_settings();
    Server::bind(settings.socket_addr()?).serve(app()).await
}
