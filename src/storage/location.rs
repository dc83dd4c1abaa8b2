//! Store file location resolution.

use std::path::{Path, PathBuf};

/// Environment variable overriding the store file path.
pub const STORE_ENV: &str = "DECISION_COPILOT_STORE";

/// Resolve the store file path.
///
/// Precedence: explicit override, then [`STORE_ENV`], then
/// `~/.decision-copilot/decisions.json`, then a temp-dir fallback for
/// environments without a home directory.
pub fn resolve(override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }

    if let Ok(custom) = std::env::var(STORE_ENV) {
        return PathBuf::from(custom);
    }

    match dirs::home_dir() {
        Some(home) => home.join(".decision-copilot").join("decisions.json"),
        None => std::env::temp_dir()
            .join("decision-copilot")
            .join("decisions.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let path = Path::new("/tmp/records.json");
        assert_eq!(resolve(Some(path)), path);
    }

    #[test]
    fn default_location_is_a_json_file() {
        let path = resolve(None);
        assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
    }
}
