use async_graphql::{SimpleObject, ID};

use crate::db::MovieDocument;

/// Movie as exposed over GraphQL
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Movie {
    pub id: ID,
    pub title: String,
    pub director: String,
    pub genre: String,
}

impl From<MovieDocument> for Movie {
    fn from(doc: MovieDocument) -> Self {
        Movie {
            id: ID(doc.id.to_hex()),
            title: doc.title,
            director: doc.director,
            genre: doc.genre,
        }
    }
}
