//! Tests for the positional mode argument.

use super::{parse, SAVE_MODE};
use clap::Parser;

#[test]
fn cli_parse_no_args_does_not_save() {
    let cli = parse(&["huefetch"]);
    assert!(cli.mode.is_none());
    assert!(!cli.save_images());
}

#[test]
fn cli_parse_save_mode() {
    let cli = parse(&["huefetch", SAVE_MODE]);
    assert_eq!(cli.mode.as_deref(), Some("save"));
    assert!(cli.save_images());
}

#[test]
fn cli_parse_other_mode_does_not_save() {
    assert!(!parse(&["huefetch", "SAVE"]).save_images());
    assert!(!parse(&["huefetch", "nosave"]).save_images());
}

#[test]
fn cli_rejects_second_positional() {
    assert!(super::Cli::try_parse_from(["huefetch", "save", "extra"]).is_err());
}
