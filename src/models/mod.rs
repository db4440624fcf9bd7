//! Public GraphQL object types

pub mod book;
pub mod movie;

pub use book::Book;
pub use movie::Movie;
