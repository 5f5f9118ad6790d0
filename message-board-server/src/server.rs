use crate::context::ApplicationContext;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

mod rest_api;

pub async fn run_server(application_context: ApplicationContext) -> std::io::Result<()> {
	let listener = TcpListener::bind(application_context.configuration.address).await?;
	info!("Listening on {}", listener.local_addr()?);

	axum::serve(listener, create_router(application_context))
		.with_graceful_shutdown(shutdown_signal())
		.await
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	rest_api::rest_api()
		.layer(cors_layer())
		.with_state(application_context)
}

/// Cross-origin requests are allowed from anywhere, without credentials.
fn cors_layer() -> CorsLayer {
	CorsLayer::new()
		.allow_origin(Any)
		.allow_methods(Any)
		.allow_headers(Any)
}

async fn shutdown_signal() {
	if let Err(error) = tokio::signal::ctrl_c().await {
		error!("Failed to listen for Ctrl-C, shutdown has to be forced: {error}");
		std::future::pending::<()>().await;
	}
	info!("Shutting down.");
}
