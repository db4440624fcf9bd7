//! MongoDB document types
//!
//! These types map directly to stored documents and can be converted
//! to the GraphQL types in models/.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// A document stored in one catalog collection
pub trait CatalogDocument:
    Serialize + DeserializeOwned + Clone + Unpin + Send + Sync + 'static
{
    /// Collection the documents live in
    const COLLECTION: &'static str;

    fn id(&self) -> ObjectId;

    fn title(&self) -> &str;
}

/// Parse a public identifier into an ObjectId
pub fn parse_object_id(id: &str) -> CatalogResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| CatalogError::InvalidId(id.to_string()))
}

// ============================================================================
// Book
// ============================================================================

/// Book document in the `books` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl BookDocument {
    /// New book with a fresh id and timestamps
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

impl CatalogDocument for BookDocument {
    const COLLECTION: &'static str = "books";

    fn id(&self) -> ObjectId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

// ============================================================================
// Movie
// ============================================================================

/// Movie document in the `movies` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub director: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl MovieDocument {
    /// New movie with a fresh id and timestamps
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            title: title.into(),
            director: director.into(),
            genre: genre.into(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

impl CatalogDocument for MovieDocument {
    const COLLECTION: &'static str = "movies";

    fn id(&self) -> ObjectId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}
