//! Movie catalog: `movies`, `movie`, `searchMovies`, `addMovie`, `deleteMovie`

use async_graphql::{Context, Object, Result, ID};

use crate::db::MovieDocument;
use crate::graphql::{self as resolve, Catalog};
use crate::models::Movie;

/// Movie API server
pub struct Movies;

impl Catalog for Movies {
    type Document = MovieDocument;
    type Query = MovieQuery;
    type Mutation = MovieMutation;

    const ENTITY: &'static str = "Movie";
    const DEFAULT_PORT: u16 = 4004;
}

#[derive(Default)]
pub struct MovieQuery;

#[Object]
impl MovieQuery {
    /// All movies
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        resolve::list::<MovieDocument, Movie>(ctx).await
    }

    /// Movie by id, null when it does not exist
    async fn movie(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Movie>> {
        resolve::find::<MovieDocument, Movie>(ctx, &id).await
    }

    /// Movies whose title contains `title`, case-insensitive
    async fn search_movies(&self, ctx: &Context<'_>, title: String) -> Result<Vec<Movie>> {
        resolve::search::<MovieDocument, Movie>(ctx, &title).await
    }
}

#[derive(Default)]
pub struct MovieMutation;

#[Object]
impl MovieMutation {
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        title: String,
        director: String,
        genre: String,
    ) -> Result<Movie> {
        let document = MovieDocument::new(title, director, genre);
        resolve::insert::<MovieDocument, Movie>(ctx, document).await
    }

    async fn delete_movie(&self, ctx: &Context<'_>, id: ID) -> Result<String> {
        if resolve::remove::<MovieDocument>(ctx, &id).await? {
            Ok(format!("Film dengan ID {} berhasil dihapus", id.as_str()))
        } else {
            Ok("Film tidak ditemukan".to_string())
        }
    }
}
