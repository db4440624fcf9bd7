//! GraphQL schema and resolvers
//!
//! Each catalog (books, movies) provides its own Query/Mutation roots. The
//! resolver bodies are shared through the generic helpers below, which talk
//! to the repository stored in the schema's context data.

pub mod book;
pub mod movie;

use async_graphql::{Context, EmptySubscription, ObjectType, Schema, ID};

use crate::db::models::parse_object_id;
use crate::db::{CatalogDocument, SharedRepository};
use crate::error::CatalogError;

pub use book::{BookMutation, BookQuery, Books};
pub use movie::{MovieMutation, MovieQuery, Movies};

/// One entity catalog served by its own API server
pub trait Catalog: Send + Sync + 'static {
    type Document: CatalogDocument;
    type Query: ObjectType + Default + 'static;
    type Mutation: ObjectType + Default + 'static;

    /// Entity name used in log lines ("Book", "Movie")
    const ENTITY: &'static str;

    /// Port used when `PORT` is not set
    const DEFAULT_PORT: u16;
}

pub type CatalogSchema<C> =
    Schema<<C as Catalog>::Query, <C as Catalog>::Mutation, EmptySubscription>;

/// Build the schema for a catalog on top of a repository
pub fn build_schema<C: Catalog>(repo: SharedRepository<C::Document>) -> CatalogSchema<C> {
    Schema::build(C::Query::default(), C::Mutation::default(), EmptySubscription)
        .data(repo)
        .finish()
}

fn repository<'a, D: CatalogDocument>(
    ctx: &Context<'a>,
) -> async_graphql::Result<&'a SharedRepository<D>> {
    ctx.data::<SharedRepository<D>>()
}

fn into_graphql_error(err: CatalogError) -> async_graphql::Error {
    if let CatalogError::Database(e) = &err {
        tracing::error!("Database operation failed: {}", e);
    }
    async_graphql::Error::new(err.to_string())
}

pub(crate) async fn list<D, T>(ctx: &Context<'_>) -> async_graphql::Result<Vec<T>>
where
    D: CatalogDocument,
    T: From<D>,
{
    let documents = repository::<D>(ctx)?
        .find_all()
        .await
        .map_err(into_graphql_error)?;
    Ok(documents.into_iter().map(T::from).collect())
}

pub(crate) async fn find<D, T>(ctx: &Context<'_>, id: &ID) -> async_graphql::Result<Option<T>>
where
    D: CatalogDocument,
    T: From<D>,
{
    let id = parse_object_id(id).map_err(into_graphql_error)?;
    let document = repository::<D>(ctx)?
        .find_by_id(id)
        .await
        .map_err(into_graphql_error)?;
    Ok(document.map(T::from))
}

pub(crate) async fn search<D, T>(ctx: &Context<'_>, title: &str) -> async_graphql::Result<Vec<T>>
where
    D: CatalogDocument,
    T: From<D>,
{
    let documents = repository::<D>(ctx)?
        .search_by_title(title)
        .await
        .map_err(into_graphql_error)?;
    Ok(documents.into_iter().map(T::from).collect())
}

pub(crate) async fn insert<D, T>(ctx: &Context<'_>, document: D) -> async_graphql::Result<T>
where
    D: CatalogDocument,
    T: From<D>,
{
    let saved = repository::<D>(ctx)?
        .insert(document)
        .await
        .map_err(into_graphql_error)?;
    tracing::info!("Added {} to {}", saved.id(), D::COLLECTION);
    Ok(T::from(saved))
}

/// Delete by public id; `Ok(false)` when nothing matched
pub(crate) async fn remove<D>(ctx: &Context<'_>, id: &ID) -> async_graphql::Result<bool>
where
    D: CatalogDocument,
{
    let object_id = parse_object_id(id).map_err(into_graphql_error)?;
    let removed = repository::<D>(ctx)?
        .delete_by_id(object_id)
        .await
        .map_err(into_graphql_error)?;
    if removed.is_some() {
        tracing::info!("Deleted {} from {}", object_id, D::COLLECTION);
    }
    Ok(removed.is_some())
}
