//! Notes web app: a single JSON file of notes behind a small HTML UI.
//!
//! Default: http://0.0.0.0:3000/

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod error;
mod notes;
mod views;

use config::Config;
use notes::{JsonFileStore, NoteRepository};

pub struct AppState {
    /// Backing store, loaded and saved in full on every request
    pub store: Arc<dyn NoteRepository>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!("Notes backend v{}", controllers::health::VERSION);
    log::info!("Using notes file: {}", config.notes_file.display());

    let store: Arc<dyn NoteRepository> = Arc::new(JsonFileStore::new(&config.notes_file));

    // Touch the store once so a missing file is created before the first request
    match store.load() {
        Ok(notes) => log::info!("[NOTES] Loaded {} notes", notes.len()),
        Err(e) => log::error!("[NOTES] Notes file is unreadable, requests will fail: {}", e),
    }

    let server_store = Arc::clone(&store);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&server_store),
            }))
            .wrap(Logger::default())
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run();

    log::info!(
        "Server running at http://{}:{}",
        config.bind_address,
        config.port
    );

    let server_handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop)
            .await
            .is_err()
        {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
