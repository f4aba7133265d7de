//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the remote records API.
    pub api_base_url: String,
    pub templates_dir: String,
    /// Secret used to sign flash message cookies; at least 64 bytes.
    pub secret: String,
}
