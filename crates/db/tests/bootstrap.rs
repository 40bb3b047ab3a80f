//! Schema and seed bootstrap against a real database.

#![cfg(feature = "postgres-tests")]

use sqlx::PgPool;
use tracklist_db::pg_store::PgStore;
use tracklist_db::seed::seed_catalog;

async fn live_count(pool: &PgPool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!(
        "SELECT COUNT(*) FROM {table} WHERE deleted_at IS NULL"
    ))
    .fetch_one(pool)
    .await
    .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
    n
}

#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    tracklist_db::health_check(&pool).await.unwrap();

    for table in ["albums", "tracks", "artists"] {
        assert_eq!(live_count(&pool, table).await, 0, "{table} should start empty");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_is_idempotent(pool: PgPool) {
    let store = PgStore::new(pool.clone());

    assert!(seed_catalog(&store).await.unwrap());
    assert_eq!(live_count(&pool, "albums").await, 3);
    assert_eq!(live_count(&pool, "tracks").await, 9);
    assert_eq!(live_count(&pool, "artists").await, 3);

    assert!(!seed_catalog(&store).await.unwrap());
    assert_eq!(live_count(&pool, "albums").await, 3);
    assert_eq!(live_count(&pool, "tracks").await, 9);
    assert_eq!(live_count(&pool, "artists").await, 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seeded_tracks_belong_to_first_album(pool: PgPool) {
    let store = PgStore::new(pool.clone());
    seed_catalog(&store).await.unwrap();

    let (on_first,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM tracks
         WHERE album_id = (SELECT MIN(id) FROM albums)",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(on_first, 9);
}

/// Every table must carry the timestamp and soft-delete columns as timestamptz.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    for table in ["albums", "tracks", "artists"] {
        for col in ["created_at", "updated_at", "deleted_at"] {
            let result: Option<(String,)> = sqlx::query_as(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = $1
                   AND column_name = $2",
            )
            .bind(table)
            .bind(col)
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz, got {data_type}"
            );
        }
    }
}
