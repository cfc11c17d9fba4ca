// This project was developed with assistance from GitHub Copilot
// Command-line / environment configuration

use clap::Parser;

/// Server configuration. Every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "jwks-demo", version, about = "Fake identity provider serving a JWKS and signed JWTs")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "JWKS_DEMO_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "JWKS_DEMO_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}
