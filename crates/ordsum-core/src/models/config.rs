//! Configuration structures for the ordsum pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the ordsum pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdsumConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Pack-quantity enrichment configuration.
    pub enrichment: EnrichmentConfig,

    /// Upload server configuration.
    pub server: ServerConfig,
}

impl Default for OrdsumConfig {
    fn default() -> Self {
        Self {
            pdf: PdfConfig::default(),
            enrichment: EnrichmentConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum extracted-text length to consider the document readable.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 1 }
    }
}

/// Pack-quantity enrichment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Run enrichment without a per-invocation flag.
    pub enabled: bool,

    /// Search URL prefix; the URL-encoded item name is appended.
    pub search_url: String,

    /// Bounded wait applied to each external step, in seconds.
    pub request_timeout_secs: u64,

    /// User agent presented to the retail site.
    pub user_agent: String,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            search_url: "https://www.amazon.com/s?k=".to_string(),
            request_timeout_secs: 10,
            user_agent: "Mozilla/5.0 (compatible; ordsum/0.1)".to_string(),
        }
    }
}

/// Upload server configuration.
///
/// Passed explicitly to the request handlers; there is no process-wide
/// mutable application state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,

    /// Directory where uploads are spooled while a request is processed.
    pub upload_dir: PathBuf,

    /// Accepted upload file extensions (no leading dot).
    pub allowed_extensions: Vec<String>,

    /// Run enrichment for every uploaded document.
    pub enrich: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            upload_dir: PathBuf::from("uploads"),
            allowed_extensions: vec!["pdf".to_string()],
            enrich: false,
        }
    }
}

impl OrdsumConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
