// Database service module
// SQLite database connection and schema management

mod connection;
pub mod migrations;
pub mod schema;
pub mod seed;

pub use connection::Database;
