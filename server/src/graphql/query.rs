//! Read resolvers.

use async_graphql::{Context, Object, Result};

use super::types::{Echantionnage, Sachet};
use super::{query_error, repositories};
use crate::persistence::traits::{EchantionnageRepository, SachetRepository};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All sampling records, by ascending number.
    async fn echantionnage(&self, ctx: &Context<'_>) -> Result<Vec<Echantionnage>> {
        tracing::debug!("GraphQL echantionnage");
        let records = repositories(ctx)?
            .echantionnages
            .list_echantionnages()
            .await
            .map_err(query_error)?;
        Ok(records.into_iter().map(Echantionnage::from).collect())
    }

    /// One sampling record, or null if the number is unknown.
    #[graphql(name = "echantionnageID")]
    async fn echantionnage_by_id(
        &self,
        ctx: &Context<'_>,
        echantion_id: i32,
    ) -> Result<Option<Echantionnage>> {
        tracing::debug!(echantion_id, "GraphQL echantionnageID");
        let record = repositories(ctx)?
            .echantionnages
            .load_echantionnage(echantion_id)
            .await
            .map_err(query_error)?;
        Ok(record.map(Echantionnage::from))
    }

    /// All packets, by ascending id.
    async fn sachet(&self, ctx: &Context<'_>) -> Result<Vec<Sachet>> {
        tracing::debug!("GraphQL sachet");
        let records = repositories(ctx)?
            .sachets
            .list_sachets()
            .await
            .map_err(query_error)?;
        Ok(records.into_iter().map(Sachet::from).collect())
    }

    /// One packet, or null if the id is unknown.
    #[graphql(name = "sachetID")]
    async fn sachet_by_id(&self, ctx: &Context<'_>, sachet_id: i32) -> Result<Option<Sachet>> {
        tracing::debug!(sachet_id, "GraphQL sachetID");
        let record = repositories(ctx)?
            .sachets
            .load_sachet(sachet_id)
            .await
            .map_err(query_error)?;
        Ok(record.map(Sachet::from))
    }
}
