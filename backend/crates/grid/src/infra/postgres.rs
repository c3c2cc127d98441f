//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{GridId, UserId};
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entities::{Grid, NewGrid};
use crate::domain::repository::GridRepository;
use crate::error::{GridError, GridResult};

/// PostgreSQL-backed grid repository
#[derive(Clone)]
pub struct PgGridRepository {
    pool: PgPool,
}

impl PgGridRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl GridRepository for PgGridRepository {
    async fn find_default(&self) -> GridResult<Option<Grid>> {
        let row = sqlx::query_as::<_, GridRow>(
            r#"
            SELECT
                grid_id,
                user_id,
                title,
                data,
                created_at
            FROM grids
            WHERE user_id IS NULL
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GridRow::into_grid))
    }

    async fn replace_for_owner(&self, owner: &UserId, grid: &NewGrid) -> GridResult<Grid> {
        // Dropping `tx` on any early return rolls back
        let mut tx = self.pool.begin().await?;

        // Row lock on the owner serialises concurrent replaces for one user:
        // the second transaction waits here, then its DELETE sees the
        // first one's committed grid.
        let owner_exists = sqlx::query_scalar::<_, i32>(
            "SELECT 1 FROM users WHERE user_id = $1 FOR UPDATE",
        )
        .bind(owner.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        if owner_exists.is_none() {
            return Err(GridError::Internal(format!(
                "grid owner {owner} does not exist"
            )));
        }

        let replaced = sqlx::query("DELETE FROM grids WHERE user_id = $1")
            .bind(owner.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let row = sqlx::query_as::<_, GridRow>(
            r#"
            INSERT INTO grids (
                grid_id,
                user_id,
                title,
                data
            ) VALUES ($1, $2, $3, $4)
            RETURNING
                grid_id,
                user_id,
                title,
                data,
                created_at
            "#,
        )
        .bind(GridId::new().as_uuid())
        .bind(owner.as_uuid())
        .bind(grid.title.as_str())
        .bind(Json(grid.data.as_value()))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            user_id = %owner,
            grid_id = %row.grid_id,
            replaced,
            "Grid row swapped"
        );

        Ok(row.into_grid())
    }

    async fn list_by_owner(&self, owner: &UserId) -> GridResult<Vec<Grid>> {
        let rows = sqlx::query_as::<_, GridRow>(
            r#"
            SELECT
                grid_id,
                user_id,
                title,
                data,
                created_at
            FROM grids
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(GridRow::into_grid).collect())
    }

    async fn find_by_id_and_owner(
        &self,
        grid_id: &GridId,
        owner: &UserId,
    ) -> GridResult<Option<Grid>> {
        let row = sqlx::query_as::<_, GridRow>(
            r#"
            SELECT
                grid_id,
                user_id,
                title,
                data,
                created_at
            FROM grids
            WHERE grid_id = $1 AND user_id = $2
            "#,
        )
        .bind(grid_id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GridRow::into_grid))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct GridRow {
    grid_id: Uuid,
    user_id: Option<Uuid>,
    title: String,
    data: Json<Value>,
    created_at: DateTime<Utc>,
}

impl GridRow {
    fn into_grid(self) -> Grid {
        Grid {
            id: GridId::from_uuid(self.grid_id),
            owner: self.user_id.map(UserId::from_uuid),
            title: self.title,
            data: self.data.0,
            created_at: self.created_at,
        }
    }
}
