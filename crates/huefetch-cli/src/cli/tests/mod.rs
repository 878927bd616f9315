//! CLI parse tests.

use super::{Cli, SAVE_MODE};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

mod mode;
