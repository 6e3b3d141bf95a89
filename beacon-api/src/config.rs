use std::env;
use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use beacon_core::QueryConfig;
use beacon_core::errors::SqlError;
use beacon_core::sql::TableId;

use crate::consts::{API_VERSION, API_VERSION_ENV, DATASET_ENV, PROJECT_ENV, TABLE_ENV};
use crate::info::BeaconInfo;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing or invalid file extension in beacon config file. It must be `toml` or `json`")]
    InvalidFileType,
    #[error("The cloud project id must be specified (set GOOGLE_CLOUD_PROJECT)")]
    MissingProjectId,
    #[error("The variant table must be specified (set GOOGLE_BIGQUERY_TABLE or VARIANTS_DATASET)")]
    MissingTableId,
    #[error(transparent)]
    InvalidTableId(#[from] SqlError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, PartialEq)]
pub enum ConfigFileType {
    Toml,
    Json,
}

impl ConfigFileType {
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => Ok(ConfigFileType::Toml),
            Some("json") => Ok(ConfigFileType::Json),
            _ => Err(ConfigError::InvalidFileType),
        }
    }
}

///
/// On-disk deployment configuration. Every field is optional; gaps are filled from the
/// environment by [`BeaconConfigBuilder`].
///
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub beacon: BeaconInfo,
    pub project_id: Option<String>,
    pub table_id: Option<String>,
    pub query: Option<QueryConfig>,
}

impl TryFrom<&Path> for ConfigFile {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file_type = ConfigFileType::from_path(path)?;
        let content = read_to_string(path)?;
        let config = match file_type {
            ConfigFileType::Toml => toml::from_str(&content)?,
            ConfigFileType::Json => serde_json::from_str(&content)?,
        };
        Ok(config)
    }
}

/// A complete, checked deployment configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BeaconConfig {
    pub beacon: BeaconInfo,
    pub project_id: String,
    pub table: TableId,
    pub query: QueryConfig,
}

impl BeaconConfig {
    pub fn builder() -> BeaconConfigBuilder {
        BeaconConfigBuilder::new()
    }
}

/// Builder for [`BeaconConfig`].
///
/// Explicit values win over the config file, which wins over environment variables.
#[derive(Default)]
pub struct BeaconConfigBuilder {
    file: Option<PathBuf>,
    project_id: Option<String>,
    table_id: Option<String>,
    query: Option<QueryConfig>,
}

impl BeaconConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a `.toml` or `.json` config file in [`BeaconConfigBuilder::finish`].
    pub fn with_file(mut self, path: PathBuf) -> Self {
        self.file = Some(path);
        self
    }

    pub fn with_project_id(mut self, project_id: String) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn with_table_id(mut self, table_id: String) -> Self {
        self.table_id = Some(table_id);
        self
    }

    pub fn with_query_config(mut self, query: QueryConfig) -> Self {
        self.query = Some(query);
        self
    }

    /// Consumes the builder, reading defaults from the process environment.
    pub fn finish(self) -> ConfigResult<BeaconConfig> {
        self.finish_with(|key| env::var(key).ok())
    }

    /// Like [`BeaconConfigBuilder::finish`], with `lookup` standing in for the environment.
    pub fn finish_with<F>(self, lookup: F) -> ConfigResult<BeaconConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match &self.file {
            Some(path) => ConfigFile::try_from(path.as_path())?,
            None => ConfigFile::default(),
        };
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let project_id = self
            .project_id
            .or(file.project_id)
            .filter(|id| !id.is_empty())
            .or_else(|| lookup(PROJECT_ENV))
            .ok_or(ConfigError::MissingProjectId)?;

        let mut beacon = file.beacon;
        let table_id = self
            .table_id
            .or(file.table_id)
            .filter(|id| !id.is_empty())
            .or_else(|| Some(beacon.dataset.clone()).filter(|id| !id.is_empty()))
            .or_else(|| lookup(TABLE_ENV))
            .or_else(|| lookup(DATASET_ENV))
            .ok_or(ConfigError::MissingTableId)?;
        let table = TableId::parse(&table_id)?;

        if beacon.api_version.is_empty() {
            beacon.api_version = lookup(API_VERSION_ENV).unwrap_or_else(|| API_VERSION.to_string());
        }
        beacon.dataset = table.to_string();

        let query = self.query.or(file.query).unwrap_or_default();
        log::debug!(
            "beacon config: project {}, table {}, mode {:?}",
            project_id,
            table,
            query
        );

        Ok(BeaconConfig {
            beacon,
            project_id,
            table,
            query,
        })
    }
}
