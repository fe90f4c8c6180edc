//! `recap serve`: run the web gateway until Ctrl-C.

use std::net::IpAddr;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{Error, GatewayError};
use crate::posts::create_post_source;
use crate::service::ReviewService;
use crate::web::{GatewayState, start_server};

pub async fn run_serve_command(
    config: &Config,
    host: Option<IpAddr>,
    port: Option<u16>,
) -> Result<(), Error> {
    let mut gateway = config.gateway.clone();
    if let Some(host) = host {
        gateway.host = host;
    }
    if let Some(port) = port {
        gateway.port = port;
    }

    let reviewer =
        ReviewService::new(create_post_source(&config.source)).with_timeout(config.source.timeout);
    let state = Arc::new(GatewayState::new(reviewer));

    let addr = start_server(gateway.addr(), state.clone()).await?;
    println!("Listening on http://{addr}");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| GatewayError::StartupFailed {
            reason: format!("Failed to install Ctrl-C handler: {e}"),
        })?;

    tracing::info!("Received Ctrl-C");
    state.shutdown().await;
    Ok(())
}
