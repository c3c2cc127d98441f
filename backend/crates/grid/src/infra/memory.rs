//! In-memory repository for tests
//!
//! Same contract as `PgGridRepository`. Replacement happens under one lock,
//! so it is atomic with respect to concurrent callers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use kernel::id::{GridId, UserId};
use serde_json::Value;

use crate::domain::entities::{Grid, NewGrid};
use crate::domain::repository::GridRepository;
use crate::error::{GridError, GridResult};

/// In-memory grid repository
#[derive(Clone, Default)]
pub struct InMemoryGridRepository {
    grids: Arc<Mutex<Vec<Grid>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryGridRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the unowned default grid
    pub fn seed_default(&self, title: &str, data: Value) -> Grid {
        let grid = Grid {
            id: GridId::new(),
            owner: None,
            title: title.to_string(),
            data,
            created_at: Utc::now(),
        };
        self.lock().push(grid.clone());
        grid
    }

    /// Store a grid as-is, bypassing the one-per-owner replacement
    pub fn insert_raw(&self, grid: Grid) {
        self.lock().push(grid);
    }

    /// Simulate a storage outage
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of grids owned by `owner`
    pub fn count_for(&self, owner: &UserId) -> usize {
        self.lock().iter().filter(|g| g.is_owned_by(owner)).count()
    }

    fn check_available(&self) -> GridResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(GridError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Grid>> {
        self.grids.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl GridRepository for InMemoryGridRepository {
    async fn find_default(&self) -> GridResult<Option<Grid>> {
        self.check_available()?;
        Ok(self
            .lock()
            .iter()
            .filter(|g| g.is_default())
            .min_by_key(|g| g.created_at)
            .cloned())
    }

    async fn replace_for_owner(&self, owner: &UserId, grid: &NewGrid) -> GridResult<Grid> {
        self.check_available()?;
        let stored = Grid {
            id: GridId::new(),
            owner: Some(*owner),
            title: grid.title.as_str().to_string(),
            data: grid.data.as_value().clone(),
            created_at: Utc::now(),
        };

        let mut grids = self.lock();
        grids.retain(|g| !g.is_owned_by(owner));
        grids.push(stored.clone());
        Ok(stored)
    }

    async fn list_by_owner(&self, owner: &UserId) -> GridResult<Vec<Grid>> {
        self.check_available()?;
        let mut owned: Vec<Grid> = self
            .lock()
            .iter()
            .filter(|g| g.is_owned_by(owner))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn find_by_id_and_owner(
        &self,
        grid_id: &GridId,
        owner: &UserId,
    ) -> GridResult<Option<Grid>> {
        self.check_available()?;
        Ok(self
            .lock()
            .iter()
            .find(|g| g.id == *grid_id && g.is_owned_by(owner))
            .cloned())
    }
}
