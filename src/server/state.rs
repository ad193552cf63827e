//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Directory containing pack and card artwork.
    pub artwork_dir: PathBuf,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `artwork_dir` - Directory served under `/images`
    pub fn new(db: DatabaseConnection, artwork_dir: PathBuf) -> Self {
        Self { db, artwork_dir }
    }
}
