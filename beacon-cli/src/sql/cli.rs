use clap::Command;

use crate::args::{with_config_args, with_query_args};

pub const SQL_CMD: &str = "sql";

pub fn create_sql_cli() -> Command {
    let cmd = Command::new(SQL_CMD)
        .author("Databio")
        .about("Print the parameterized warehouse query for an allele request")
        .arg_required_else_help(true);
    with_query_args(with_config_args(cmd))
}
