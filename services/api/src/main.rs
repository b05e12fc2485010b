use api::router::create_router;
use api::state::AppState;
use std::net::SocketAddr;
use tokio::net::TcpListener;

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting FIX Security Platform query API");

    // Initialize application state, seeded with the demo fixtures
    let state = AppState::with_fixtures();

    // Create router
    let app = create_router(state);

    // Bind and serve
    let port = match std::env::var("PORT") {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT value {:?}: {}", raw, e))?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
