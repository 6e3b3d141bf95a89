use clap::{Arg, Command};

use crate::args::{with_config_args, with_query_args};

pub const QUERY_CMD: &str = "query";

pub fn create_query_cli() -> Command {
    let cmd = Command::new(QUERY_CMD)
        .author("Databio")
        .about("Ask whether an allele exists in a local variant table")
        .arg_required_else_help(true)
        .arg(
            Arg::new("table")
                .long("table")
                .short('t')
                .required(true)
                .help("Variant table: TSV of reference_name, start, end, reference_bases, alternate_bases (.gz ok)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(["json", "xml"])
                .default_value("json")
                .help("Response format"),
        );
    with_query_args(with_config_args(cmd))
}
