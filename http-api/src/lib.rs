//! HTTP surface of the tarefas service.
//!
//! Exposes the six task operations under `/v1/tarefas/` behind a shared
//! Basic-Auth credential. The router, the auth gate, and the CORS policy
//! live here; persistence stays behind the `TaskRepository` trait so the
//! handlers are generic over the store.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod request_logger;
pub mod server;

pub use auth::{CredentialValidator, StaticCredentials};
pub use error::ApiError;
pub use handlers::AppState;
pub use server::ApiServer;
