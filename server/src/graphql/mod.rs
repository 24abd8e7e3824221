//! GraphQL schema for packets and sampling records.
//!
//! This module contains the schema split into:
//! - types: output objects, inputs and the mutation envelope
//! - query: read resolvers
//! - mutation: write resolvers
//!
//! Every resolver is a thin adapter over the repositories in
//! [`crate::persistence`]. Queries surface store failures as GraphQL errors
//! with an `extensions.code`; mutations always answer with an envelope.

mod mutation;
mod query;
mod types;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Schema};

use crate::persistence::sqlite::Repositories;
use crate::persistence::PersistenceError;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema with the repositories as context data.
pub fn build_schema(repositories: Repositories) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repositories)
        .finish()
}

/// Render the schema document (SDL) without needing a database.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

fn repositories<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Repositories> {
    ctx.data::<Repositories>()
}

/// Convert a store failure on a read path into a GraphQL error.
fn query_error(err: PersistenceError) -> async_graphql::Error {
    let code = match &err {
        PersistenceError::Decode(_) => "DECODE_ERROR",
        _ => "STORE_ERROR",
    };
    tracing::warn!(error = %err, code, "Query failed");
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}
