use async_graphql::{SimpleObject, ID};

use crate::db::BookDocument;

/// Book as exposed over GraphQL
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Book {
    pub id: ID,
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl From<BookDocument> for Book {
    fn from(doc: BookDocument) -> Self {
        Book {
            id: ID(doc.id.to_hex()),
            title: doc.title,
            author: doc.author,
            genre: doc.genre,
        }
    }
}
