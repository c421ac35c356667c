//! Taskboard server: config loading, store init, user seeding, HTTP server.

pub mod api;
pub mod auth;
mod config;
mod server;
pub mod state;
pub mod store;

use std::sync::Arc;

use crate::state::AppState;
use crate::store::memory::MemoryStore;
use crate::store::TaskStore;

/// Boot the server: load config, seed the user directory, serve until
/// interrupted.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);

    let store = Arc::new(MemoryStore::new());
    for seed in &config.seed_users {
        match store.create_user(&seed.name, &seed.email, &seed.roles) {
            Ok(user) => log::info!("Seeded user: {} -> {}", user.email, user.id),
            Err(e) => log::warn!("Failed to seed user {}: {}", seed.email, e),
        }
    }

    let state = AppState::new(store);
    server::spawn_server(state, &config.bind_address, config.port).await?;

    tokio::signal::ctrl_c().await?;
    log::info!("[taskboard.shutdown] Interrupt received, exiting");
    Ok(())
}
