use std::fs;
use std::path::Path;

use crate::solver::SearchConfig;

fn validate_config(config: &SearchConfig) -> Result<(), String> {
    if config.depth == 0 {
        return Err("Search depth must be at least 1".to_string());
    }
    Ok(())
}

/// Parse a `SearchConfig` from JSON text. Omitted weights fall back to
/// the standard corner/edge/danger/interior values.
pub fn parse_config(data: &str) -> Result<SearchConfig, String> {
    let config: SearchConfig =
        serde_json::from_str(data).map_err(|e| format!("Failed to parse JSON: {e}"))?;
    validate_config(&config)?;
    Ok(config)
}

/// Load a `SearchConfig` from a JSON file (runtime).
pub fn load_config_from_json<P: AsRef<Path>>(path: P) -> Result<SearchConfig, String> {
    let data = fs::read_to_string(path.as_ref()).map_err(|e| format!("Failed to read JSON: {e}"))?;
    parse_config(&data)
}
