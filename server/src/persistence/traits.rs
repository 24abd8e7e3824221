//! Async repository trait definitions for the persistence layer.
//!
//! Each trait covers one record kind. Reads hand back an explicit
//! `Option` so callers must branch on absence before touching fields, and
//! update/delete report whether the target row existed.
//!
//! Methods return `impl Future + Send` rather than using `async fn` so that
//! the futures are guaranteed `Send`, which the GraphQL executor and
//! `tokio::spawn` both require.

use super::{EchantionnageData, NewEchantionnage, NewSachet, PersistenceError, SachetData};
use std::future::Future;

/// Repository for packets.
///
/// Implementations own the encoding of `combinaison`: callers always see a
/// decoded `Vec<i32>`.
pub trait SachetRepository: Send + Sync {
    fn create_sachet(
        &self,
        data: &NewSachet,
    ) -> impl Future<Output = Result<SachetData, PersistenceError>> + Send;
    fn load_sachet(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<SachetData>, PersistenceError>> + Send;
    fn list_sachets(
        &self,
    ) -> impl Future<Output = Result<Vec<SachetData>, PersistenceError>> + Send;
    /// Returns `false` when no packet has this id.
    fn update_sachet(
        &self,
        id: i32,
        data: &NewSachet,
    ) -> impl Future<Output = Result<bool, PersistenceError>> + Send;
    /// Returns `false` when no packet has this id.
    fn delete_sachet(&self, id: i32) -> impl Future<Output = Result<bool, PersistenceError>> + Send;
}

/// Repository for sampling records.
pub trait EchantionnageRepository: Send + Sync {
    fn create_echantionnage(
        &self,
        data: &NewEchantionnage,
    ) -> impl Future<Output = Result<EchantionnageData, PersistenceError>> + Send;
    fn load_echantionnage(
        &self,
        echantion_number: i32,
    ) -> impl Future<Output = Result<Option<EchantionnageData>, PersistenceError>> + Send;
    fn list_echantionnages(
        &self,
    ) -> impl Future<Output = Result<Vec<EchantionnageData>, PersistenceError>> + Send;
    fn update_echantionnage(
        &self,
        echantion_number: i32,
        data: &NewEchantionnage,
    ) -> impl Future<Output = Result<bool, PersistenceError>> + Send;
    fn delete_echantionnage(
        &self,
        echantion_number: i32,
    ) -> impl Future<Output = Result<bool, PersistenceError>> + Send;
}
