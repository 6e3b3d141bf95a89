use clap::Command;

use crate::args::with_config_args;

pub const INFO_CMD: &str = "info";

pub fn create_info_cli() -> Command {
    with_config_args(
        Command::new(INFO_CMD)
            .author("Databio")
            .about("Print what the beacon says about itself"),
    )
}
