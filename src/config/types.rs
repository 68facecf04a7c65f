use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "./data/echo_reports.db";

/// Level 1 accreditation asks for 75 logged scans.
pub const DEFAULT_TARGET_SCANS: u64 = 75;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EchoConfig {
    pub database: Option<DatabaseConfig>,
    pub training: Option<TrainingConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub path: Option<String>,
    /// Schema definition file applied at startup. The bundled schema is
    /// used when unset.
    pub schema: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TrainingConfig {
    pub target_scans: Option<u64>,
}

impl EchoConfig {
    pub fn database_path(&self) -> PathBuf {
        self.database
            .as_ref()
            .and_then(|d| d.path.as_deref())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH))
    }

    pub fn schema_path(&self) -> Option<PathBuf> {
        self.database.as_ref()?.schema.as_deref().map(PathBuf::from)
    }

    pub fn target_scans(&self) -> u64 {
        self.training
            .as_ref()
            .and_then(|t| t.target_scans)
            .unwrap_or(DEFAULT_TARGET_SCANS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_config_defaults() {
        let config = EchoConfig::default();
        assert_eq!(config.database_path(), PathBuf::from(DEFAULT_DATABASE_PATH));
        assert!(config.schema_path().is_none());
        assert_eq!(config.target_scans(), 75);
    }

    #[test]
    fn test_echo_config_overrides() {
        let config: EchoConfig = serde_yaml::from_str(
            "database:\n  path: /srv/echo/reports.db\n  schema: /srv/echo/schema.sql\ntraining:\n  target_scans: 100\n",
        )
        .unwrap();
        assert_eq!(config.database_path(), PathBuf::from("/srv/echo/reports.db"));
        assert_eq!(config.schema_path(), Some(PathBuf::from("/srv/echo/schema.sql")));
        assert_eq!(config.target_scans(), 100);
    }

    #[test]
    fn test_partial_sections() {
        let config: EchoConfig = serde_yaml::from_str("database: {}\n").unwrap();
        assert_eq!(config.database_path(), PathBuf::from(DEFAULT_DATABASE_PATH));
        assert_eq!(config.target_scans(), DEFAULT_TARGET_SCANS);
    }
}
