//! Assignment service entry point.
//! SQLite-backed storage for daily assignments plus the block operations the
//! planning grid requests.

use rusqlite::Connection;

pub mod block;
pub mod crud;
pub mod queries;
mod shared;

/// Service for managing assignments stored in SQLite.
pub struct AssignmentService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> AssignmentService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}
