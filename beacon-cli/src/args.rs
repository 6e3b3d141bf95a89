//! Arguments shared by the subcommands that take an allele query.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

use beacon_api::consts::{DATASET_ENV, PROJECT_ENV};
use beacon_api::{BeaconAlleleRequest, BeaconConfig};
use beacon_core::QueryConfig;

/// Project used when neither flags, config file nor environment name one.
pub const LOCAL_PROJECT_ID: &str = "local";

/// Table id used when neither flags, config file nor environment name one.
pub const LOCAL_TABLE_ID: &str = "local.variants";

/// (flag, request field, help)
const QUERY_FIELDS: &[(&str, &str, &str)] = &[
    ("reference-name", "referenceName", "Chromosome / contig name"),
    ("reference-bases", "referenceBases", "Reference allele (A, C, G, T or N)"),
    ("alternate-bases", "alternateBases", "Alternate allele (A, C, G, T or N)"),
    ("start", "start", "Exact 0-based start position"),
    ("end", "end", "Exact end position"),
    ("start-min", "startMin", "Minimum start position"),
    ("start-max", "startMax", "Maximum start position"),
    ("end-min", "endMin", "Minimum end position"),
    ("end-max", "endMax", "Maximum end position"),
    ("coordinate", "coordinate", "Legacy single position (start <= coordinate < end)"),
];

pub fn with_config_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("config")
            .long("config")
            .short('c')
            .help("Beacon config file (.toml or .json)"),
    )
    .arg(
        Arg::new("project-id")
            .long("project-id")
            .help("Cloud project id (defaults to GOOGLE_CLOUD_PROJECT)"),
    )
    .arg(
        Arg::new("table-id")
            .long("table-id")
            .help("Variant table id, project.dataset.table (defaults to GOOGLE_BIGQUERY_TABLE)"),
    )
    .arg(
        Arg::new("mode")
            .long("mode")
            .short('m')
            .help("Query rules: legacy, allele, strict or coordinates-only"),
    )
}

pub fn with_query_args(cmd: Command) -> Command {
    let cmd = cmd.arg(
        Arg::new("json")
            .long("json")
            .short('j')
            .conflicts_with_all(QUERY_FIELDS.iter().map(|(flag, _, _)| *flag))
            .help("The request as a JSON body"),
    );
    QUERY_FIELDS.iter().fold(cmd, |cmd, (flag, _, help)| {
        cmd.arg(Arg::new(*flag).long(*flag).allow_hyphen_values(true).help(*help))
    })
}

///
/// Build the request from either `--json` or the individual field flags.
///
pub fn request_from_matches(matches: &ArgMatches) -> Result<BeaconAlleleRequest> {
    if let Some(body) = matches.get_one::<String>("json") {
        return Ok(BeaconAlleleRequest::from_json(body)?);
    }

    let pairs = QUERY_FIELDS.iter().filter_map(|(flag, field, _)| {
        matches
            .get_one::<String>(flag)
            .map(|value| (*field, value.as_str()))
    });
    Ok(BeaconAlleleRequest::from_form(pairs)?)
}

///
/// Resolve the deployment config from flags, the config file and the environment,
/// falling back to a local project and table.
///
pub fn config_from_matches(matches: &ArgMatches) -> Result<BeaconConfig> {
    config_from_matches_with(matches, |key| env::var(key).ok())
}

///
/// Like [`config_from_matches`], with `lookup` standing in for the environment.
///
/// The local table only stands in for the last variable the builder consults, so
/// `GOOGLE_BIGQUERY_TABLE` and `VARIANTS_DATASET` are both still honoured.
///
pub fn config_from_matches_with<F>(matches: &ArgMatches, lookup: F) -> Result<BeaconConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = BeaconConfig::builder();

    if let Some(path) = matches.get_one::<String>("config") {
        builder = builder.with_file(PathBuf::from(path));
    }
    if let Some(project_id) = matches.get_one::<String>("project-id") {
        builder = builder.with_project_id(project_id.clone());
    }
    if let Some(table_id) = matches.get_one::<String>("table-id") {
        builder = builder.with_table_id(table_id.clone());
    }
    if let Some(mode) = matches.get_one::<String>("mode") {
        let query = mode.parse::<QueryConfig>().map_err(|e| anyhow::anyhow!(e))?;
        builder = builder.with_query_config(query);
    }

    builder
        .finish_with(|key| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .or_else(|| match key {
                    PROJECT_ENV => Some(LOCAL_PROJECT_ID.to_string()),
                    DATASET_ENV => Some(LOCAL_TABLE_ID.to_string()),
                    _ => None,
                })
        })
        .context("Failed to resolve the beacon configuration")
}
