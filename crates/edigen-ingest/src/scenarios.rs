//! Scenario loading from the scraper's JSON export.

use std::path::Path;

use edigen_model::Scenario;
use tracing::debug;

use crate::error::IngestError;

/// Literal date-prefix tokens the partner portal prepends to keys.
const KEY_PREFIXES: [&str; 3] = ["POYYMMDD", "YYMMDD", "YY"];

/// Strips the portal's literal date prefix from a scenario key.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    let key = key.trim();
    for prefix in KEY_PREFIXES {
        if let Some(rest) = key.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    key.to_string()
}

/// Parses the scenario set, normalizing every key (including
/// consolidation references).
pub fn load_scenarios_str(text: &str) -> Result<Vec<Scenario>, IngestError> {
    let mut scenarios: Vec<Scenario> = serde_json::from_str(text)?;
    for scenario in &mut scenarios {
        scenario.key = normalize_key(&scenario.key);
        if let Some(partner) = scenario.consolidated_with.take() {
            scenario.consolidated_with = Some(normalize_key(&partner));
        }
    }
    debug!(count = scenarios.len(), "loaded scenarios");
    Ok(scenarios)
}

/// Reads and parses the scenario file at `path`.
pub fn load_scenarios_path(path: &Path) -> Result<Vec<Scenario>, IngestError> {
    let text = std::fs::read_to_string(path)?;
    load_scenarios_str(&text)
}
