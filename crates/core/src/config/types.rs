use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    /// Live order source. When absent the service runs on the synthetic dataset.
    #[serde(default)]
    pub sheets: Option<SheetsConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    5000
}

/// Cross-origin configuration for browser dashboards.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Google Sheets order source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SheetsConfig {
    /// Spreadsheet ID (the long token in the sheet URL)
    #[serde(default = "default_spreadsheet_id")]
    pub spreadsheet_id: String,
    /// Sheet name or A1 range holding the order rows
    #[serde(default = "default_region")]
    pub region: String,
    /// API key for publicly readable sheets
    #[serde(default)]
    pub api_key: Option<String>,
    /// OAuth bearer token for private sheets
    #[serde(default)]
    pub access_token: Option<String>,
    /// Base URL (default: https://sheets.googleapis.com/v4)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: default_spreadsheet_id(),
            region: default_region(),
            api_key: None,
            access_token: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl SheetsConfig {
    /// Whether any credential material is present.
    pub fn has_credentials(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
            || self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

fn default_spreadsheet_id() -> String {
    "1dYeok-Dy_7a03AhPDLV2NNmGbRNoCD3q0zaAHPwxxCE".to_string()
}

fn default_region() -> String {
    "Orders".to_string()
}

fn default_base_url() -> String {
    "https://sheets.googleapis.com/v4".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheets: Option<SanitizedSheetsConfig>,
}

/// Sanitized sheets config (credentials hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedSheetsConfig {
    pub spreadsheet_id: String,
    pub region: String,
    pub base_url: String,
    pub api_key_configured: bool,
    pub access_token_configured: bool,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            cors: config.cors.clone(),
            sheets: config.sheets.as_ref().map(|s| SanitizedSheetsConfig {
                spreadsheet_id: s.spreadsheet_id.clone(),
                region: s.region.clone(),
                base_url: s.base_url.clone(),
                api_key_configured: s.api_key.as_deref().is_some_and(|k| !k.is_empty()),
                access_token_configured: s
                    .access_token
                    .as_deref()
                    .is_some_and(|t| !t.is_empty()),
                timeout_secs: s.timeout_secs,
            }),
        }
    }
}
