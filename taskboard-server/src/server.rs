use crate::api::api_router;
use crate::state::AppState;
/// HTTP server: binds the listener and serves on a background tokio task.
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub async fn spawn_server(
    state: AppState,
    bind_address: &str,
    port: u16,
) -> Result<u16, Box<dyn std::error::Error>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app: Router = api_router().layer(cors).with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind_address, port)).await?;
    let actual_port = listener.local_addr()?.port();

    log::info!(
        "HTTP server listening on http://{}:{}",
        bind_address,
        actual_port
    );

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            log::error!("HTTP server exited with error: {}", e);
        }
    });

    Ok(actual_port)
}
