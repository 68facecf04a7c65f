use std::path::Path;
use crate::errors::EchoError;
use super::types::EchoConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "echoreport.yaml";

/// Loads the explicit config file, or the default one if present, or falls
/// back to built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<EchoConfig, EchoError> {
    match explicit {
        Some(path) => parse_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                parse_config(default_path)
            } else {
                debug!("No config file, using defaults");
                Ok(EchoConfig::default())
            }
        }
    }
}

pub fn parse_config(path: &Path) -> Result<EchoConfig, EchoError> {
    if !path.exists() {
        return Err(EchoError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > 1_048_576 {
        return Err(EchoError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = std::fs::read_to_string(path)?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
    if yaml.is_null() {
        return Ok(EchoConfig::default());
    }

    // JSON Schema validation
    validate_schema(&yaml)?;

    let config: EchoConfig = serde_yaml::from_value(yaml)?;

    validate_values(&config)?;

    debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), EchoError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| EchoError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| EchoError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        // Typed parsing below is what rejects a config.
        for e in errors {
            let msg = format!("{} at {}", e, e.instance_path);
            warn!(validation_error = %msg, "Config schema warning");
        }
    }

    Ok(())
}

fn validate_values(config: &EchoConfig) -> Result<(), EchoError> {
    if let Some(db) = &config.database {
        if db.path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(EchoError::Config("database.path must not be empty".into()));
        }
        if db.schema.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(EchoError::Config("database.schema must not be empty".into()));
        }
    }

    if config.target_scans() == 0 {
        return Err(EchoError::Config("training.target_scans must be at least 1".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("echoreport.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "database:\n  path: ./reports.db\ntraining:\n  target_scans: 50\n");
        let config = parse_config(&path).unwrap();
        assert_eq!(config.target_scans(), 50);
    }

    #[test]
    fn test_parse_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = parse_config(&dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(EchoError::Config(_))));
    }

    #[test]
    fn test_parse_empty_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");
        let config = parse_config(&path).unwrap();
        assert_eq!(config.target_scans(), 75);
    }

    #[test]
    fn test_zero_target_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "training:\n  target_scans: 0\n");
        assert!(matches!(parse_config(&path), Err(EchoError::Config(_))));
    }

    #[test]
    fn test_empty_database_path_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "database:\n  path: \"\"\n");
        assert!(matches!(parse_config(&path), Err(EchoError::Config(_))));
    }

    #[test]
    fn test_wrong_type_is_yaml_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "training:\n  target_scans: lots\n");
        assert!(matches!(parse_config(&path), Err(EchoError::Yaml(_))));
    }

    #[test]
    fn test_misspelled_section_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "trainig:\n  target_scans: 40\n");
        assert!(matches!(parse_config(&path), Err(EchoError::Yaml(_))));
    }

    #[test]
    fn test_misspelled_key_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "training:\n  target_scan: 40\n");
        assert!(matches!(parse_config(&path), Err(EchoError::Yaml(_))));

        let path = write_config(&dir, "database:\n  paht: ./reports.db\n");
        assert!(matches!(parse_config(&path), Err(EchoError::Yaml(_))));
    }

    #[test]
    fn test_load_config_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "training:\n  target_scans: 20\n");
        assert_eq!(load_config(Some(path.as_path())).unwrap().target_scans(), 20);
    }
}
