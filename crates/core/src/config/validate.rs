use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Sheets section (if present) names a spreadsheet and region and has a usable timeout
///
/// Missing sheet credentials are not an error: the service then runs in
/// degraded mode on the synthetic dataset.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if let Some(sheets) = &config.sheets {
        if sheets.spreadsheet_id.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "sheets.spreadsheet_id cannot be empty".to_string(),
            ));
        }
        if sheets.region.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "sheets.region cannot be empty".to_string(),
            ));
        }
        if sheets.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "sheets.timeout_secs cannot be 0".to_string(),
            ));
        }
    }

    Ok(())
}
