use std::path::{Path, PathBuf};
use tracing::debug;
use crate::config::{load_config, EchoConfig};
use crate::db::ReportStore;
use crate::errors::EchoError;
use super::commands::Cli;

/// Settings shared by every subcommand, resolved from flags and config.
pub struct AppContext {
    pub config: EchoConfig,
    pub db_path: PathBuf,
    pub quiet: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self, EchoError> {
        let config = load_config(cli.config.as_deref().map(Path::new))?;
        let db_path = cli
            .db
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| config.database_path());
        Ok(Self { config, db_path, quiet: cli.quiet })
    }

    /// Opens the store, applying the configured schema file or the bundled one.
    pub fn open_store(&self) -> Result<ReportStore, EchoError> {
        match self.config.schema_path() {
            Some(schema) => {
                debug!(schema = %schema.display(), "Applying schema file");
                ReportStore::open(&self.db_path, schema)
            }
            None => ReportStore::open_bundled(&self.db_path),
        }
    }

    pub fn target(&self, flag: Option<u64>) -> u64 {
        flag.unwrap_or_else(|| self.config.target_scans())
    }
}
