//! SQLite persistence for the tarefas service
//!
//! This crate provides the SQLite implementation of the `TaskRepository`
//! trait: a pooled connection handle created once at startup, embedded
//! schema migrations, and the six task statements with their phase-keyed
//! error mapping.
//!
//! # Usage
//!
//! ```rust,no_run
//! use tarefas_database::{SqliteTaskRepository, TaskRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // In-memory database for testing
//!     let repo = SqliteTaskRepository::connect(":memory:", 1).await?;
//!     repo.migrate().await?;
//!
//!     let tasks = repo.list().await?;
//!     assert!(tasks.is_empty());
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::SqliteTaskRepository;

// Re-export commonly used types from tarefas-core for convenience
pub use tarefas_core::{
    error::{Result, TaskError},
    models::{NewTask, Task},
    repository::TaskRepository,
};
