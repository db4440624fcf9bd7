//! Database repositories
//!
//! Repository pattern for database access, separating data access logic
//! from the GraphQL resolvers.

#[cfg(test)]
pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use crate::db::models::CatalogDocument;
use crate::error::CatalogResult;

pub use mongo::MongoRepository;

/// Storage operations for one catalog collection.
#[async_trait]
pub trait Repository<D: CatalogDocument>: Send + Sync {
    /// Returns every document in natural order.
    async fn find_all(&self) -> CatalogResult<Vec<D>>;

    /// Finds a document by its ObjectId.
    async fn find_by_id(&self, id: ObjectId) -> CatalogResult<Option<D>>;

    /// Finds documents whose title contains `fragment`, ignoring case.
    async fn search_by_title(&self, fragment: &str) -> CatalogResult<Vec<D>>;

    /// Stores a new document and returns it.
    async fn insert(&self, document: D) -> CatalogResult<D>;

    /// Deletes a document, returning it if it existed.
    async fn delete_by_id(&self, id: ObjectId) -> CatalogResult<Option<D>>;
}

/// Repository handle stored in the GraphQL context
pub type SharedRepository<D> = Arc<dyn Repository<D>>;
