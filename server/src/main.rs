//! SSR host for the PrepMentor client.

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

mod error;
mod routes;

use error::ServerError;

/// Port used when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

fn port_from(raw: Option<String>) -> Result<u16, ServerError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.trim().parse().map_err(|_| ServerError::InvalidPort(value)),
    }
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port = port_from(std::env::var("PORT").ok())?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(%port, "prepmentor listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
