use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::app::create_app;
use crate::configs::Settings;

pub mod app;
pub mod configs;
pub mod errors;
pub mod gpio;
pub mod handles;
pub mod middlewares;
pub mod services;

pub async fn run(settings: &Arc<Settings>) -> anyhow::Result<()> {
    // Relays are forced off here, before the listener accepts anything
    let controller = gpio::simulated_controller(&settings.relay)?;

    let app = create_app(settings, controller);

    let ip_addr = settings.server.host.parse::<IpAddr>()?;

    let address = SocketAddr::from((ip_addr, settings.server.port));

    let listener = TcpListener::bind(&address).await?;

    tracing::info!("listening on {:?}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
