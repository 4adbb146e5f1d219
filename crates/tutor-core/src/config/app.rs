//! HTTP listener and CORS settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// `[server]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests running longer than this are aborted with 408.
    pub request_timeout_seconds: u64,
    /// Time allowed for closing the database after the listener stops.
    pub shutdown_grace_seconds: u64,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_seconds: 30,
            shutdown_grace_seconds: 10,
            cors: CorsConfig::default(),
        }
    }
}

/// `[server.cors]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API; `"*"` allows any.
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    /// Preflight cache lifetime in seconds.
    pub max_age_seconds: u64,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: ["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_age_seconds: 3600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_section_keeps_defaults() {
        let server: ServerConfig =
            serde_json::from_str(r#"{"port": 9000, "cors": {"max_age_seconds": 60}}"#)
                .expect("valid server section");
        assert_eq!(server.bind_address(), "0.0.0.0:9000");
        assert_eq!(server.request_timeout(), Duration::from_secs(30));
        assert!(server.cors.allows_any_origin());
        assert_eq!(server.cors.max_age_seconds, 60);
        assert_eq!(server.cors.allowed_methods.len(), 6);
    }
}
