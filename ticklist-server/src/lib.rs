//! ticklist-server: a single-table to-do list over HTTP
//!
//! Server-rendered CRUD for to-do records: a home page listing every record,
//! an add form, and toggle/delete links. State lives entirely in a local
//! SQLite file; the web layer holds nothing between requests.

pub mod db;
pub mod error;
pub mod models;
pub mod render;
pub mod routes;
pub mod server;

pub use db::Database;
pub use error::{ServerError, ServerResult};
pub use models::Todo;
pub use server::{default_db_path, run_server, ServerConfig};
