//! Router assembly and listener for the task API.

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{
    auth::{basic_auth, CredentialValidator},
    handlers::{self, AppState},
    request_logger::request_logging_middleware,
};
use tarefas_core::repository::TaskRepository;

/// HTTP front of the task service: routes, auth gate, CORS policy.
pub struct ApiServer<R> {
    state: AppState<R>,
    validator: Arc<dyn CredentialValidator>,
    allow_origin: HeaderValue,
}

impl<R: TaskRepository + 'static> ApiServer<R> {
    /// Assemble a server over the given store and credential check.
    pub fn new(repository: Arc<R>, validator: Arc<dyn CredentialValidator>) -> Self {
        Self {
            state: AppState { repository },
            validator,
            allow_origin: HeaderValue::from_static("http://localhost:3000"),
        }
    }

    /// Override the browser origin accepted by the CORS layer.
    pub fn with_allowed_origin(
        mut self,
        origin: &str,
    ) -> Result<Self, axum::http::header::InvalidHeaderValue> {
        self.allow_origin = origin.parse()?;
        Ok(self)
    }

    /// Bind `addr` and serve until the listener is shut down.
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.into_router();

        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| format!("Invalid address '{addr}': {e}"))?;

        info!("Starting task API on {}", socket_addr);

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Build the router; exposed so tests can drive it without a listener.
    pub fn into_router(self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(self.allow_origin.clone())
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
            .expose_headers([header::CONTENT_LENGTH])
            .allow_credentials(true)
            .max_age(Duration::from_secs(12 * 60 * 60));

        Router::new()
            .route(
                "/v1/tarefas/",
                get(handlers::list_tasks::<R>).post(handlers::create_task::<R>),
            )
            .route("/v1/tarefas/busca", get(handlers::search_tasks::<R>))
            .route(
                "/v1/tarefas/:id",
                get(handlers::get_task::<R>)
                    .put(handlers::update_task::<R>)
                    .delete(handlers::delete_task::<R>),
            )
            .layer(middleware::from_fn_with_state(
                Arc::clone(&self.validator),
                basic_auth,
            ))
            .layer(middleware::from_fn(request_logging_middleware))
            // CORS outermost so preflight requests are answered before the
            // auth gate sees them
            .layer(cors)
            .with_state(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentials;
    use tarefas_mocks::MockTaskRepository;

    #[test]
    fn test_server_creation_and_router_build() {
        let repo = Arc::new(MockTaskRepository::new());
        let credentials = Arc::new(StaticCredentials::new("admin", "secret"));

        let server = ApiServer::new(repo, credentials)
            .with_allowed_origin("http://localhost:5173")
            .unwrap();
        let _router = server.into_router();
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let repo = Arc::new(MockTaskRepository::new());
        let credentials = Arc::new(StaticCredentials::new("admin", "secret"));

        let result = ApiServer::new(repo, credentials).with_allowed_origin("bad\norigin");
        assert!(result.is_err());
    }
}
