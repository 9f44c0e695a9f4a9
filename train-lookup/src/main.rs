use std::process::ExitCode;

use tracing::{error, info};

use train_lookup::config::{AppConfig, ConfigError};
use train_lookup::logging;
use train_lookup::upstream::{LookupError, TrainApiClient};
use train_lookup::web::{AppState, create_router};

/// Errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("train API client: {0}")]
    Client(#[from] LookupError),

    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;

    let client = TrainApiClient::new(config.api)?;
    info!(base_url = client.base_url(), "train API client ready");

    let state = AppState::new(client);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;
    info!("Train Info server listening on http://{addr}");
    info!("  GET  /               - Search form");
    info!("  POST /submit         - Look up a train (form field `number`)");
    info!("  GET  /train/:number  - Look up a train by URL");

    axum::serve(listener, app).await?;
    Ok(())
}
