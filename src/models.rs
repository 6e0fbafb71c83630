//! Frontend Models

use serde::{Deserialize, Serialize};

/// A single task in the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique for the task's lifetime; never reused, never mutated
    pub id: u32,
    /// Free-form text; empty content is allowed
    pub content: String,
}
