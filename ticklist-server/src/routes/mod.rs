//! Route handlers for ticklist
//!
//! Organized by resource type:
//! - todos: the four CRUD routes (home page, add, toggle, delete)
//! - health: health check endpoint

pub mod health;
pub mod todos;

pub use health::*;
pub use todos::*;
