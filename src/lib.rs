//! Book and movie catalog GraphQL servers backed by MongoDB.
//!
//! Each catalog is a [`graphql::Catalog`] implementation; the `book-server`
//! and `movie-server` binaries hand theirs to [`server::run`].

pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod models;
pub mod routes;
pub mod server;

use crate::config::Config;
use crate::graphql::{Catalog, CatalogSchema};

/// Application state shared across handlers
pub struct AppState<C: Catalog> {
    pub config: Config,
    pub schema: CatalogSchema<C>,
}
