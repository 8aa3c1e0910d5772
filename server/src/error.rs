//! Startup failures of the SSR host.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `PORT` is set but is not a port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `[package.metadata.leptos]` is missing or malformed.
    #[error("leptos configuration: {0}")]
    Config(String),

    #[error("failed to bind: {0}")]
    Bind(std::io::Error),

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
