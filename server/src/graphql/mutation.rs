//! Write resolvers. Nothing here raises a GraphQL error: store failures and a
//! schema built without repositories are both reported in the payload.

use async_graphql::{Context, Object, OutputType};

use super::repositories;
use super::types::{EchantillonInput, Echantionnage, MutationPayload, Sachet, SachetInput};
use crate::persistence::sqlite::Repositories;
use crate::persistence::traits::{EchantionnageRepository, SachetRepository};
use crate::persistence::PersistenceError;

#[derive(Default)]
pub struct MutationRoot;

/// Resolve the repositories, or the failed payload to answer with instead.
fn mutation_repositories<'a, T: OutputType>(
    operation: &'static str,
    ctx: &Context<'a>,
) -> Result<&'a Repositories, MutationPayload<T>> {
    repositories(ctx).map_err(|err| {
        tracing::error!(operation, error = %err.message, "Repositories missing from schema");
        MutationPayload::failed(err.message)
    })
}

fn into_payload<D, T>(
    operation: &'static str,
    outcome: Result<D, PersistenceError>,
    on_success: impl FnOnce(D) -> MutationPayload<T>,
) -> MutationPayload<T>
where
    T: OutputType,
{
    match outcome {
        Ok(value) => {
            let payload = on_success(value);
            if !payload.success {
                tracing::info!(operation, "Mutation target not found");
            }
            payload
        }
        Err(err) => {
            tracing::warn!(operation, error = %err, "Mutation failed");
            MutationPayload::failed(err.to_string())
        }
    }
}

#[Object]
impl MutationRoot {
    async fn create_echantionnage(
        &self,
        ctx: &Context<'_>,
        echantillon: EchantillonInput,
    ) -> MutationPayload<Echantionnage> {
        const OP: &str = "createEchantionnage";
        tracing::info!(?echantillon, "GraphQL createEchantionnage");
        let repos = match mutation_repositories(OP, ctx) {
            Ok(repos) => repos,
            Err(payload) => return payload,
        };
        let outcome = repos
            .echantionnages
            .create_echantionnage(&echantillon.into())
            .await;
        into_payload(OP, outcome, |record| {
            MutationPayload::created(Echantionnage::from(record))
        })
    }

    /// Replace a sampling record's weights. `data` stays null on success.
    async fn update_echantionnage(
        &self,
        ctx: &Context<'_>,
        echantion_id: i32,
        echantillon: EchantillonInput,
    ) -> MutationPayload<Echantionnage> {
        const OP: &str = "updateEchantionnage";
        tracing::info!(echantion_id, ?echantillon, "GraphQL updateEchantionnage");
        let repos = match mutation_repositories(OP, ctx) {
            Ok(repos) => repos,
            Err(payload) => return payload,
        };
        let outcome = repos
            .echantionnages
            .update_echantionnage(echantion_id, &echantillon.into())
            .await;
        into_payload(OP, outcome, MutationPayload::applied)
    }

    async fn delete_echantionnage(
        &self,
        ctx: &Context<'_>,
        echantion_id: i32,
    ) -> MutationPayload<Echantionnage> {
        const OP: &str = "deleteEchantionnage";
        tracing::info!(echantion_id, "GraphQL deleteEchantionnage");
        let repos = match mutation_repositories(OP, ctx) {
            Ok(repos) => repos,
            Err(payload) => return payload,
        };
        let outcome = repos.echantionnages.delete_echantionnage(echantion_id).await;
        into_payload(OP, outcome, MutationPayload::applied)
    }

    async fn create_sachet(&self, ctx: &Context<'_>, data: SachetInput) -> MutationPayload<Sachet> {
        const OP: &str = "createSachet";
        tracing::info!(?data, "GraphQL createSachet");
        let repos = match mutation_repositories(OP, ctx) {
            Ok(repos) => repos,
            Err(payload) => return payload,
        };
        let outcome = repos.sachets.create_sachet(&data.into()).await;
        into_payload(OP, outcome, |record| {
            MutationPayload::created(Sachet::from(record))
        })
    }

    async fn update_sachet(
        &self,
        ctx: &Context<'_>,
        sachet_id: i32,
        data: SachetInput,
    ) -> MutationPayload<Sachet> {
        const OP: &str = "updateSachet";
        tracing::info!(sachet_id, ?data, "GraphQL updateSachet");
        let repos = match mutation_repositories(OP, ctx) {
            Ok(repos) => repos,
            Err(payload) => return payload,
        };
        let outcome = repos.sachets.update_sachet(sachet_id, &data.into()).await;
        into_payload(OP, outcome, MutationPayload::applied)
    }

    async fn delete_sachet(&self, ctx: &Context<'_>, sachet_id: i32) -> MutationPayload<Sachet> {
        const OP: &str = "deleteSachet";
        tracing::info!(sachet_id, "GraphQL deleteSachet");
        let repos = match mutation_repositories(OP, ctx) {
            Ok(repos) => repos,
            Err(payload) => return payload,
        };
        let outcome = repos.sachets.delete_sachet(sachet_id).await;
        into_payload(OP, outcome, MutationPayload::applied)
    }
}
