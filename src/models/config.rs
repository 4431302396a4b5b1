use serde::Deserialize;

/// Configuration options for the SmartFit server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Directory holding the persisted wardrobe document.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            data_dir: default_data_dir(),
        }
    }
}
