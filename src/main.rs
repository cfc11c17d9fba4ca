// This project was developed with assistance from GitHub Copilot
// Fake identity provider for JWKS client testing
//
// Publishes a JSON Web Key Set containing only non-expired RSA keys and issues
// RS256 JWTs. `POST /auth?expired` returns a token signed by a key that has
// already dropped out of the JWKS, to exercise client-side key rotation handling.

use clap::Parser;
use jwks_demo::{config::Config, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::parse();

    if let Err(e) = server::start_server(config).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
