//! Domain Entities
//!
//! Core business entities for the grid domain.

use chrono::{DateTime, Utc};
use kernel::id::{GridId, UserId};
use serde_json::Value;

use crate::domain::value_objects::{GridData, GridTitle};

/// Grid entity - a stored hero grid layout
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub id: GridId,
    /// `None` for the system default grid
    pub owner: Option<UserId>,
    pub title: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

impl Grid {
    /// Whether this is the system default grid
    pub fn is_default(&self) -> bool {
        self.owner.is_none()
    }

    /// Whether `user_id` owns this grid
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner.as_ref() == Some(user_id)
    }
}

/// Validated content for a grid about to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewGrid {
    pub title: GridTitle,
    pub data: GridData,
}

impl NewGrid {
    pub fn new(title: GridTitle, data: GridData) -> Self {
        Self { title, data }
    }
}
