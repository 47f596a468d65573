//! Test doubles for the tarefas service.
//!
//! Provides an in-memory `TaskRepository` with error injection and call
//! tracking, so handler-level tests can exercise every response branch
//! without a real store.

mod repository;

pub use repository::MockTaskRepository;
