use super::{Database, SqliteEchantionnageRepository, SqliteSachetRepository};
use crate::persistence::traits::{EchantionnageRepository, SachetRepository};
use crate::persistence::{NewEchantionnage, NewSachet, PersistenceError};

fn sample_sachet(poids: i32) -> NewSachet {
    NewSachet {
        poids,
        combinaison: vec![250, 250, poids],
    }
}

fn sample_echantillon(poids: i32) -> NewEchantionnage {
    NewEchantionnage {
        poids_generated: poids,
        poids_measured: poids - 2,
    }
}

async fn repos() -> (Database, SqliteSachetRepository, SqliteEchantionnageRepository) {
    let db = Database::new_in_memory().await.unwrap();
    let sachets = SqliteSachetRepository::new(db.pool().clone());
    let echantillons = SqliteEchantionnageRepository::new(db.pool().clone());
    (db, sachets, echantillons)
}

#[tokio::test]
async fn tables_are_independent() {
    let (_db, sachets, echantillons) = repos().await;

    let sachet = sachets.create_sachet(&sample_sachet(500)).await.unwrap();
    let echantillon = echantillons
        .create_echantionnage(&sample_echantillon(500))
        .await
        .unwrap();

    assert!(echantillons
        .delete_echantionnage(echantillon.echantion_number)
        .await
        .unwrap());
    assert_eq!(sachets.list_sachets().await.unwrap(), vec![sachet.clone()]);

    assert!(sachets.delete_sachet(sachet.id).await.unwrap());
    assert!(echantillons.list_echantionnages().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let (_db, sachets, _) = repos().await;

    let first = sachets.create_sachet(&sample_sachet(1)).await.unwrap();
    sachets.delete_sachet(first.id).await.unwrap();
    let second = sachets.create_sachet(&sample_sachet(2)).await.unwrap();

    assert!(second.id > first.id);
    assert_eq!(sachets.load_sachet(first.id).await.unwrap(), None);
}

#[tokio::test]
async fn list_is_stable_without_writes() {
    let (_db, sachets, _) = repos().await;
    for poids in [30, 10, 20] {
        sachets.create_sachet(&sample_sachet(poids)).await.unwrap();
    }

    let first: Vec<i32> = sachets.list_sachets().await.unwrap().iter().map(|s| s.id).collect();
    let second: Vec<i32> = sachets.list_sachets().await.unwrap().iter().map(|s| s.id).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[tokio::test]
async fn closed_pool_surfaces_database_error() {
    let (db, sachets, echantillons) = repos().await;
    db.pool().close().await;

    assert!(matches!(
        sachets.create_sachet(&sample_sachet(1)).await,
        Err(PersistenceError::Database(_))
    ));
    assert!(matches!(
        echantillons.list_echantionnages().await,
        Err(PersistenceError::Database(_))
    ));
}
