//! Book catalog: `books`, `book`, `searchBooks`, `addBook`, `deleteBook`

use async_graphql::{Context, Object, Result, ID};

use crate::db::BookDocument;
use crate::graphql::{self as resolve, Catalog};
use crate::models::Book;

/// Book API server
pub struct Books;

impl Catalog for Books {
    type Document = BookDocument;
    type Query = BookQuery;
    type Mutation = BookMutation;

    const ENTITY: &'static str = "Book";
    const DEFAULT_PORT: u16 = 4003;
}

#[derive(Default)]
pub struct BookQuery;

#[Object]
impl BookQuery {
    /// All books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        resolve::list::<BookDocument, Book>(ctx).await
    }

    /// Book by id, null when it does not exist
    async fn book(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Book>> {
        resolve::find::<BookDocument, Book>(ctx, &id).await
    }

    /// Books whose title contains `title`, case-insensitive
    async fn search_books(&self, ctx: &Context<'_>, title: String) -> Result<Vec<Book>> {
        resolve::search::<BookDocument, Book>(ctx, &title).await
    }
}

#[derive(Default)]
pub struct BookMutation;

#[Object]
impl BookMutation {
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        author: String,
        genre: String,
    ) -> Result<Book> {
        let document = BookDocument::new(title, author, genre);
        resolve::insert::<BookDocument, Book>(ctx, document).await
    }

    async fn delete_book(&self, ctx: &Context<'_>, id: ID) -> Result<String> {
        if resolve::remove::<BookDocument>(ctx, &id).await? {
            Ok(format!("Buku dengan ID {} berhasil dihapus", id.as_str()))
        } else {
            Ok("Buku tidak ditemukan".to_string())
        }
    }
}
