//! Database module
//!
//! MongoDB integration using the official driver with:
//! - Client setup and ping-based health check
//! - Document types with serde mappings
//! - Repository pattern for data access

pub mod client;
pub mod models;
pub mod repository;

// Re-export commonly used items
pub use client::{connect, health_check};
pub use models::{BookDocument, CatalogDocument, MovieDocument};
pub use repository::{MongoRepository, Repository, SharedRepository};

#[cfg(test)]
pub use repository::memory::MemoryRepository;
