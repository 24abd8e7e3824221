//! HTTP routes: the GraphQL endpoint, its GraphiQL page, and a liveness probe.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::graphql::AppSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn router(schema: AppSchema) -> Router {
    Router::new()
        .route(
            GRAPHQL_PATH,
            get(graphiql).post_service(GraphQL::new(schema)),
        )
        .route("/healthz", get(healthz))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn healthz() -> &'static str {
    "ok"
}
