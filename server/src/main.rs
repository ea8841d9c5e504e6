//! Course management server entry point

use shared::{Component, logging};
use tokio::signal;

use cms_server::{AppState, Args, CourseServer, Database, ServerConfig, ServerResult};

#[tokio::main]
async fn main() -> ServerResult<()> {
    let args = Args::load();

    // Initialize component identity before any logging
    Component::init_server();

    let config = ServerConfig::from_args(args)?;
    logging::init_tracing_with_level(Some(&config.log_level));
    logging::log_startup(
        Component::current(),
        &format!("course server on {} (database: {})", config.bind_address, config.database.display()),
    );

    let db = Database::open(&config.database)?;
    let state = AppState::from_database(db);
    let server = CourseServer::new(config, state);

    // Set up graceful shutdown
    let shutdown_sender = server.get_shutdown_sender();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown(Component::current(), "Received Ctrl+C signal");
                let _ = shutdown_sender.send(()).await;
            }
            Err(err) => {
                logging::log_error(Component::current(), "Signal handling", &err);
            }
        }
    });

    server.run().await
}
