//! CLI parse tests.

use super::{apply_overrides, load_config, select_ids, Cli, CliCommand};
use clap::{CommandFactory, Parser};
use sbu_core::config::SbuConfig;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}


#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}
