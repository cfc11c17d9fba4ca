// This project was developed with assistance from GitHub Copilot
// Library module for JWKS server

pub mod config;
pub mod endpoints;
pub mod error;
pub mod jwks;
pub mod key_management;
pub mod server;
pub mod token;
pub mod types;

pub use error::{Error, Result};
pub use key_management::{KeyMaterial, KeyStore};
