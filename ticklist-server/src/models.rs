//! Entity and request models for ticklist

use serde::{Deserialize, Serialize};

// ============================================================================
// Todos
// ============================================================================

/// A to-do record, the sole persisted entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    /// The only mutable field; flipped by the update route
    pub complete: bool,
}

/// Payload of the add form (`POST /add`)
///
/// A missing or empty `title` field is accepted as the empty string; the
/// application performs no validation on it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoForm {
    #[serde(default)]
    pub title: String,
}

// ============================================================================
// Health Check
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub database: DatabaseHealth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub connected: bool,
    pub path: String,
    pub size_bytes: Option<u64>,
}
