//! Core library for the tarefas task service.
//!
//! This crate provides the domain model, error taxonomy, and repository
//! interface shared by the storage and HTTP crates. It has no knowledge of
//! SQL or HTTP; those live behind the [`repository::TaskRepository`] seam
//! and the status-code mapping on [`error::TaskError`].
//!
//! # Example
//!
//! ```rust
//! use tarefas_core::{NewTask, TaskError};
//!
//! let payload = NewTask::new("Buy milk", "2%", "open");
//! assert_eq!(payload.title, "Buy milk");
//!
//! let err = TaskError::NotFound;
//! assert_eq!(err.status_code(), 404);
//! ```

pub mod error;
pub mod models;
pub mod repository;

// Re-export commonly used types at the crate root for convenience
pub use error::{ErrorBody, Result, TaskError};
pub use models::{NewTask, Task};
pub use repository::TaskRepository;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
