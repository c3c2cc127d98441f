//! Application Configuration
//!
//! Configuration for the grid application layer.

/// Grid application configuration
#[derive(Debug, Clone, Default)]
pub struct GridConfig {
    /// Optional title length limit in characters; unbounded when `None`
    pub max_title_len: Option<usize>,
}
