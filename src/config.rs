//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Agent store configuration
    pub store: StoreConfig,
    /// Simulation configuration
    pub simulation: SimulationConfig,
    /// Model and tool option catalogs
    pub catalog: CatalogConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Agent store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub db_path: String,
}

/// Simulation configuration
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Artificial per-agent work delay (in milliseconds)
    pub delay_ms: u64,
}

/// Model and tool choices offered to the presentation layer.
///
/// Closed lists served as-is; submitted records are never validated against
/// them, so catalog changes cannot invalidate stored data.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Model identifiers offered when creating an agent
    pub models: Vec<String>,
    /// Tool names offered when creating an agent
    pub tools: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            models: vec![
                "gemini-1.5-pro".to_string(),
                "gpt-4o".to_string(),
                "claude-3-opus".to_string(),
            ],
            tools: vec![
                "Search".to_string(),
                "Calculator".to_string(),
                "Image Generation".to_string(),
            ],
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let catalog_defaults = CatalogConfig::default();

        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            store: StoreConfig {
                db_path: env::var("DATABASE_PATH").unwrap_or_else(|_| {
                    // Default to ~/.agent-roster or current directory
                    if let Some(home) = env::var_os("HOME") {
                        format!("{}/.agent-roster/agents.db", home.to_string_lossy())
                    } else {
                        ".agent-roster/agents.db".to_string()
                    }
                }),
            },
            simulation: SimulationConfig {
                delay_ms: env::var("SIMULATION_DELAY_MS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(1000),
            },
            catalog: CatalogConfig {
                models: env::var("MODEL_OPTIONS")
                    .ok()
                    .map(|raw| parse_list(&raw))
                    .unwrap_or(catalog_defaults.models),
                tools: env::var("TOOL_OPTIONS")
                    .ok()
                    .map(|raw| parse_list(&raw))
                    .unwrap_or(catalog_defaults.tools),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Split a comma-separated environment value into trimmed, non-empty entries
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
