//! API DTOs (Data Transfer Objects)

use chrono::SecondsFormat;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::entities::Grid;

/// Create (replace) grid request
///
/// An absent `title` reads as empty and an absent `data` as `None`; both
/// are rejected by the use case. `"data": null` is a present value.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateGridRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "present")]
    pub data: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Grid as returned by every grid endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GridResponse {
    pub id: Uuid,
    /// Omitted for the default grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub title: String,
    pub data: Value,
    /// RFC 3339, UTC, second precision (`2024-01-02T03:04:05Z`)
    pub created_at: String,
}

impl From<Grid> for GridResponse {
    fn from(grid: Grid) -> Self {
        Self {
            id: grid.id.into_uuid(),
            user_id: grid.owner.map(|owner| owner.into_uuid()),
            title: grid.title,
            data: grid.data,
            created_at: grid.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
