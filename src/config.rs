use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub school_name: String,
    /// TOML roster seed; the built-in activities are used when unset.
    pub seed: Option<PathBuf>,
}

#[cfg(test)]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            school_name: "Mergington High School".to_string(),
            seed: None,
        }
    }
}
