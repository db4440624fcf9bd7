//! MongoDB-backed repository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};

use crate::db::models::CatalogDocument;
use crate::db::repository::Repository;
use crate::error::CatalogResult;

/// Repository over a single MongoDB collection
#[derive(Clone)]
pub struct MongoRepository<D: CatalogDocument> {
    collection: Collection<D>,
}

impl<D: CatalogDocument> MongoRepository<D> {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<D>(D::COLLECTION),
        }
    }
}

/// Case-insensitive substring filter on `title`
///
/// The fragment is escaped so user input is always matched literally.
pub fn title_filter(fragment: &str) -> Document {
    doc! {
        "title": {
            "$regex": regex::escape(fragment),
            "$options": "i",
        }
    }
}

#[async_trait]
impl<D: CatalogDocument> Repository<D> for MongoRepository<D> {
    async fn find_all(&self) -> CatalogResult<Vec<D>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<D> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_by_id(&self, id: ObjectId) -> CatalogResult<Option<D>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn search_by_title(&self, fragment: &str) -> CatalogResult<Vec<D>> {
        let cursor = self.collection.find(title_filter(fragment)).await?;
        let documents: Vec<D> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn insert(&self, document: D) -> CatalogResult<D> {
        self.collection.insert_one(&document).await?;
        tracing::debug!("Inserted {} into {}", document.id(), D::COLLECTION);
        Ok(document)
    }

    async fn delete_by_id(&self, id: ObjectId) -> CatalogResult<Option<D>> {
        Ok(self
            .collection
            .find_one_and_delete(doc! { "_id": id })
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_filter_is_case_insensitive() {
        let filter = title_filter("dune");
        let title = filter.get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), "dune");
        assert_eq!(title.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_title_filter_escapes_metacharacters() {
        let filter = title_filter("C++ (2nd ed.)");
        let title = filter.get_document("title").unwrap();
        assert_eq!(
            title.get_str("$regex").unwrap(),
            r"C\+\+ \(2nd ed\.\)"
        );
    }
}
