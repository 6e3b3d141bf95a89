use anyhow::Result;
use clap::ArgMatches;

use crate::args::config_from_matches;

pub fn run_info(matches: &ArgMatches) -> Result<()> {
    let config = config_from_matches(matches)?;
    println!("{}", serde_json::to_string_pretty(&config.beacon)?);
    Ok(())
}
