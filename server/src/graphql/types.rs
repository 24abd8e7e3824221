//! GraphQL object types and conversions from persistence records.

use async_graphql::{InputObject, OutputType, SimpleObject};
use chrono::{DateTime, Utc};

use crate::persistence::{EchantionnageData, NewEchantionnage, NewSachet, SachetData};

/// Envelope error for an update or delete whose target id is absent.
pub const NOT_FOUND_MESSAGE: &str = "Data doesn't exist in database";

/// A sample packet.
#[derive(SimpleObject, Debug, Clone)]
pub struct Sachet {
    pub id: i32,
    pub poids: i32,
    pub combinaison: Vec<i32>,
    #[graphql(name = "created_at")]
    pub created_at: DateTime<Utc>,
    #[graphql(name = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

/// A sampling test result.
#[derive(SimpleObject, Debug, Clone)]
pub struct Echantionnage {
    pub echantion_number: i32,
    pub poids_generated: i32,
    pub poids_measured: i32,
    #[graphql(name = "created_at")]
    pub created_at: DateTime<Utc>,
    #[graphql(name = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

#[derive(InputObject, Debug, Clone)]
pub struct SachetInput {
    pub poids: i32,
    pub combinaison: Vec<i32>,
}

#[derive(InputObject, Debug, Clone)]
pub struct EchantillonInput {
    pub poids_measured: i32,
    pub poids_generated: i32,
}

/// Uniform result of every mutation.
///
/// `success` is true iff the store call completed and, for update/delete,
/// the target existed. `data` is only set by a successful create.
#[derive(SimpleObject, Debug)]
#[graphql(concrete(name = "SachetPayload", params(Sachet)))]
#[graphql(concrete(name = "EchantionnagePayload", params(Echantionnage)))]
pub struct MutationPayload<T: OutputType> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: OutputType> MutationPayload<T> {
    pub fn created(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Outcome of an update or delete, given whether the target row existed.
    pub fn applied(existed: bool) -> Self {
        if existed {
            Self {
                success: true,
                data: None,
                error: None,
            }
        } else {
            Self::failed(NOT_FOUND_MESSAGE)
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl From<SachetData> for Sachet {
    fn from(data: SachetData) -> Self {
        Self {
            id: data.id,
            poids: data.poids,
            combinaison: data.combinaison,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }
}

impl From<EchantionnageData> for Echantionnage {
    fn from(data: EchantionnageData) -> Self {
        Self {
            echantion_number: data.echantion_number,
            poids_generated: data.poids_generated,
            poids_measured: data.poids_measured,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }
}

impl From<SachetInput> for NewSachet {
    fn from(input: SachetInput) -> Self {
        Self {
            poids: input.poids,
            combinaison: input.combinaison,
        }
    }
}

impl From<EchantillonInput> for NewEchantionnage {
    fn from(input: EchantillonInput) -> Self {
        Self {
            poids_generated: input.poids_generated,
            poids_measured: input.poids_measured,
        }
    }
}
