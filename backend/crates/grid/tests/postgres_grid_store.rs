//! PostgreSQL grid store tests
//!
//! Run with a database available:
//! `DATABASE_URL=postgres://... cargo test -p grid -- --ignored`

use grid::PgGridRepository;
use grid::domain::entities::NewGrid;
use grid::domain::repository::GridRepository;
use grid::domain::value_objects::{GridData, GridTitle};
use kernel::id::{GridId, UserId};
use serde_json::{Value, json};
use sqlx::PgPool;

async fn insert_user(pool: &PgPool, email: &str) -> UserId {
    let user_id = UserId::new();
    sqlx::query("INSERT INTO users (user_id, email, password_hash) VALUES ($1, $2, $3)")
        .bind(user_id.as_uuid())
        .bind(email)
        .bind("$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g")
        .execute(pool)
        .await
        .unwrap();
    user_id
}

fn new_grid(title: &str, data: Value) -> NewGrid {
    NewGrid::new(
        GridTitle::new(title.to_string(), None).unwrap(),
        GridData::new(Some(data)).unwrap(),
    )
}

async fn owned_count(pool: &PgPool, owner: &UserId) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM grids WHERE user_id = $1")
        .bind(owner.as_uuid())
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../../database/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn replace_twice_keeps_latest(pool: PgPool) {
    let repo = PgGridRepository::new(pool.clone());
    let alice = insert_user(&pool, "alice@x.com").await;

    let first = repo
        .replace_for_owner(&alice, &new_grid("My Grid", json!({"heroes": [1, 2, 3]})))
        .await
        .unwrap();
    let second = repo
        .replace_for_owner(&alice, &new_grid("V2", json!({"heroes": [4]})))
        .await
        .unwrap();

    assert_eq!(owned_count(&pool, &alice).await, 1);
    let listed = repo.list_by_owner(&alice).await.unwrap();
    assert_eq!(listed, vec![second.clone()]);
    assert!(
        repo.find_by_id_and_owner(&first.id, &alice)
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test(migrations = "../../../database/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn concurrent_replace_leaves_one_grid(pool: PgPool) {
    let repo = PgGridRepository::new(pool.clone());
    let alice = insert_user(&pool, "alice@x.com").await;

    let a = new_grid("A", json!({"n": 1}));
    let b = new_grid("B", json!({"n": 2}));
    let (ra, rb) = tokio::join!(
        repo.replace_for_owner(&alice, &a),
        repo.replace_for_owner(&alice, &b),
    );
    ra.unwrap();
    rb.unwrap();

    assert_eq!(owned_count(&pool, &alice).await, 1);
}

#[sqlx::test(migrations = "../../../database/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn failed_insert_rolls_back_delete(pool: PgPool) {
    let repo = PgGridRepository::new(pool.clone());
    let alice = insert_user(&pool, "alice@x.com").await;

    let kept = repo
        .replace_for_owner(&alice, &new_grid("Keep", json!({"heroes": [7]})))
        .await
        .unwrap();

    // jsonb rejects the \u0000 escape, so the INSERT fails after the DELETE
    let unstorable = new_grid("Broken", json!({"name": "nul\u{0}byte"}));
    assert!(repo.replace_for_owner(&alice, &unstorable).await.is_err());

    assert_eq!(repo.list_by_owner(&alice).await.unwrap(), vec![kept]);
}

#[sqlx::test(migrations = "../../../database/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn replace_for_unknown_user_fails(pool: PgPool) {
    let repo = PgGridRepository::new(pool);
    let result = repo
        .replace_for_owner(&UserId::new(), &new_grid("Ghost", json!({})))
        .await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "../../../database/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn find_by_id_is_scoped_to_owner(pool: PgPool) {
    let repo = PgGridRepository::new(pool.clone());
    let alice = insert_user(&pool, "alice@x.com").await;
    let bob = insert_user(&pool, "bob@x.com").await;

    let grid = repo
        .replace_for_owner(&alice, &new_grid("Mine", json!([1])))
        .await
        .unwrap();

    let found = repo.find_by_id_and_owner(&grid.id, &alice).await.unwrap();
    assert_eq!(found, Some(grid.clone()));
    assert!(
        repo.find_by_id_and_owner(&grid.id, &bob)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        repo.find_by_id_and_owner(&GridId::new(), &alice)
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test(migrations = "../../../database/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn default_grid_is_oldest_unowned(pool: PgPool) {
    let repo = PgGridRepository::new(pool.clone());
    assert!(repo.find_default().await.unwrap().is_none());

    sqlx::query(
        "INSERT INTO grids (grid_id, user_id, title, data, created_at) \
         VALUES ($1, NULL, 'Newer', '{}', now()), \
                ($2, NULL, 'Default', '{\"heroes\": []}', now() - interval '1 day')",
    )
    .bind(GridId::new().as_uuid())
    .bind(GridId::new().as_uuid())
    .execute(&pool)
    .await
    .unwrap();

    let default = repo.find_default().await.unwrap().unwrap();
    assert_eq!(default.title, "Default");
    assert_eq!(default.owner, None);
    assert_eq!(default.data, json!({"heroes": []}));
}

#[sqlx::test(migrations = "../../../database/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn data_round_trips(pool: PgPool) {
    let repo = PgGridRepository::new(pool.clone());
    let alice = insert_user(&pool, "alice@x.com").await;
    let data = json!({
        "version": 3,
        "categories": [{"name": "Carry", "x": 0.5, "hero_ids": [1, 2, 3]}],
        "nested": {"deep": [null, true, "s"]}
    });

    let grid = repo
        .replace_for_owner(&alice, &new_grid("Round trip", data.clone()))
        .await
        .unwrap();
    let fetched = repo
        .find_by_id_and_owner(&grid.id, &alice)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched.data, data);
}

#[sqlx::test(migrations = "../../../database/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn numbers_keep_exact_precision(pool: PgPool) {
    let repo = PgGridRepository::new(pool.clone());
    let alice = insert_user(&pool, "alice@x.com").await;
    let data: Value = serde_json::from_str(
        r#"{"id":123456789012345678901234567890,"x":0.12345678901234567890123}"#,
    )
    .unwrap();

    let grid = repo
        .replace_for_owner(&alice, &new_grid("Precise", data.clone()))
        .await
        .unwrap();
    let fetched = repo
        .find_by_id_and_owner(&grid.id, &alice)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched.data, data);
    assert_eq!(
        fetched.data.to_string(),
        r#"{"id":123456789012345678901234567890,"x":0.12345678901234567890123}"#
    );
}

#[sqlx::test(migrations = "../../../database/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn whitespace_title_and_null_data_are_stored(pool: PgPool) {
    let repo = PgGridRepository::new(pool.clone());
    let alice = insert_user(&pool, "alice@x.com").await;

    let grid = repo
        .replace_for_owner(&alice, &new_grid("   ", Value::Null))
        .await
        .unwrap();
    let fetched = repo.list_by_owner(&alice).await.unwrap();

    assert_eq!(fetched, vec![grid]);
    assert_eq!(fetched[0].title, "   ");
    assert_eq!(fetched[0].data, Value::Null);
}
