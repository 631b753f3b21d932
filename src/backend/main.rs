/**
 * Request Errors Server Entry Point
 *
 * Serves the demo routes behind the request id and error logging
 * middleware. Attached errors show up in the log output, one line each.
 */

use request_errors::backend::server::{create_app, init_tracing, load_config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    init_tracing();

    let config = load_config()?;
    let app = create_app(&config)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
