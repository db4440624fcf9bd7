//! In-memory repository used by the resolver and route tests

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::db::models::CatalogDocument;
use crate::db::repository::Repository;
use crate::error::CatalogResult;

/// Vec-backed repository that keeps insertion order
pub struct MemoryRepository<D> {
    documents: RwLock<Vec<D>>,
}

impl<D: CatalogDocument> MemoryRepository<D> {
    pub fn with_documents(documents: Vec<D>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    pub async fn count(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[async_trait]
impl<D: CatalogDocument> Repository<D> for MemoryRepository<D> {
    async fn find_all(&self) -> CatalogResult<Vec<D>> {
        Ok(self.documents.read().await.clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> CatalogResult<Option<D>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| d.id() == id).cloned())
    }

    async fn search_by_title(&self, fragment: &str) -> CatalogResult<Vec<D>> {
        let needle = fragment.to_lowercase();
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|d| d.title().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert(&self, document: D) -> CatalogResult<D> {
        self.documents.write().await.push(document.clone());
        Ok(document)
    }

    async fn delete_by_id(&self, id: ObjectId) -> CatalogResult<Option<D>> {
        let mut documents = self.documents.write().await;
        let position = documents.iter().position(|d| d.id() == id);
        Ok(position.map(|index| documents.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::BookDocument;

    #[tokio::test]
    async fn test_search_ignores_case() {
        let repo = MemoryRepository::with_documents(vec![
            BookDocument::new("The Hobbit", "J.R.R. Tolkien", "Fantasy"),
            BookDocument::new("Dune", "Frank Herbert", "Sci-Fi"),
        ]);

        let found = repo.search_by_title("HOBB").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "The Hobbit");

        let all = repo.search_by_title("").await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_document() {
        let book = BookDocument::new("Dune", "Frank Herbert", "Sci-Fi");
        let repo = MemoryRepository::with_documents(vec![book.clone()]);

        assert_eq!(repo.delete_by_id(book.id).await.unwrap(), Some(book.clone()));
        assert_eq!(repo.delete_by_id(book.id).await.unwrap(), None);
        assert_eq!(repo.count().await, 0);
    }
}
