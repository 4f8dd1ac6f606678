// CLASSIFICATION: COMMUNITY
// Filename: opt_config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::fs;

use choco_opt::opt::config::{Cli, Config, ConfigError, CONFIG_ENV};
use choco_opt::opt::{open_input, open_output, OptMain};
use choco_opt::output::Target;
use choco_opt::pass_framework::PassFilter;
use clap::Parser;
use serial_test::serial;
use tempfile::tempdir;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("choco-opt").chain(args.iter().copied())).unwrap()
}

#[test]
#[serial]
fn config_file_supplies_pipeline() {
    let dir = tempdir().unwrap();
    let cfg_path = dir.path().join("opt.toml");
    fs::write(&cfg_path, "passes = [\"fold-constants\", \"dead-code\"]\ntarget = \"json\"\n").unwrap();

    let cfg = Config::from_cli(&cli(&["--config", cfg_path.to_str().unwrap()])).unwrap();
    assert_eq!(cfg.passes, vec!["fold-constants", "dead-code"]);
    assert_eq!(cfg.target, Target::Json);
}

#[test]
#[serial]
fn env_var_names_default_config() {
    let dir = tempdir().unwrap();
    let cfg_path = dir.path().join("env.toml");
    fs::write(&cfg_path, "verify_each = true\nfrontend = \"toy\"\n").unwrap();

    std::env::set_var(CONFIG_ENV, &cfg_path);
    let cfg = Config::from_cli(&cli(&[]));
    std::env::remove_var(CONFIG_ENV);

    let cfg = cfg.unwrap();
    assert!(cfg.verify_each);
    assert_eq!(cfg.frontend_tag(), "toy");
}

#[test]
#[serial]
fn missing_config_file_is_reported() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = Config::from_cli(&cli(&["--config", missing.to_str().unwrap()])).unwrap_err();
    assert!(matches!(err, ConfigError::Read { ref path, .. } if *path == missing));
}

#[test]
#[serial]
fn files_in_files_out() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("prog.txt");
    let output = dir.path().join("prog.ir");
    fs::write(&input, "5\n").unwrap();

    let cfg = Config::from_cli(&cli(&[
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-p",
        "double-literal",
    ]))
    .unwrap();
    let opt = OptMain::new(false).unwrap();
    let reader = open_input(cfg.input.as_deref()).unwrap();
    let writer = open_output(cfg.output.as_deref()).unwrap();
    opt.run(&cfg, reader, writer).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "module {\n  toy.lit {value = 10}\n}\n"
    );
}

#[test]
fn listing_respects_filter() {
    let opt = OptMain::new(false).unwrap();
    let all = opt.list_passes(PassFilter::All);
    let integrated = opt.list_passes(PassFilter::Integrated);
    assert_eq!(all.lines().count(), opt.passes().len());
    assert!(integrated.lines().all(|l| l.contains("[integrated]")));
    assert!(integrated.contains("double-literal"));
}
