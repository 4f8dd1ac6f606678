// CLASSIFICATION: COMMUNITY
// Filename: opt_scenario.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! End-to-end runs through the driver: parse, transform, output.

use std::io;

use choco_opt::frontend::{toy, FrontendError};
use choco_opt::ir::{parse_module, DialectError, Module};
use choco_opt::opt::{config::Config, OptMain};
use choco_opt::output::Target;
use choco_opt::{optimize_source, OptError};

fn run(cfg: &Config, input: &str) -> Result<String, OptError> {
    let opt = OptMain::new(cfg.allow_unregistered_dialect)?;
    let mut out = Vec::new();
    opt.run(cfg, input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn doubling_a_single_literal() {
    let text = optimize_source("txt", "5", &["double-literal"], Target::Ir).unwrap();
    assert!(text.contains("toy.lit {value = 10}"), "{text}");
    let module = parse_module(&text).unwrap();
    assert_eq!(module, Module::new().with_op(toy::lit(10)));
}

#[test]
fn empty_pipeline_round_trips_ir() {
    let src = "module @m {\n  toy.add {loc = \"a.toy:1\"} (\n    toy.lit {value = 1}\n    toy.lit {value = 2}\n  )\n}\n";
    let cfg = Config {
        frontend: Some("ir".into()),
        ..Config::default()
    };
    assert_eq!(run(&cfg, src).unwrap(), src);
}

#[test]
fn passes_run_in_requested_order() {
    let src = "module {\n  toy.add (\n    toy.lit {value = 2}\n    toy.lit {value = 3}\n  )\n}\n";
    let fold_then_double =
        optimize_source("ir", src, &["fold-constants", "double-literal"], Target::Ir).unwrap();
    assert!(fold_then_double.contains("toy.lit {value = 10}"));
    let double_then_fold =
        optimize_source("ir", src, &["double-literal", "fold-constants"], Target::Ir).unwrap();
    assert!(double_then_fold.contains("toy.lit {value = 10}"));

    let doubled_twice =
        optimize_source("txt", "3", &["double-literal", "double-literal"], Target::Ir).unwrap();
    assert!(doubled_twice.contains("toy.lit {value = 12}"));
}

#[test]
fn selector_runs_every_integrated_pass() {
    let src = "module {\n  toy.nop\n  toy.mul (\n    toy.lit {value = 4}\n    toy.lit {value = 5}\n  )\n}\n";
    let cfg = Config {
        frontend: Some("ir".into()),
        passes: vec!["all-integrated".into()],
        ..Config::default()
    };
    // double-literal, fold-constants, dead-code
    assert_eq!(run(&cfg, src).unwrap(), "module {\n  toy.lit {value = 80}\n}\n");
}

#[test]
fn unregistered_dialect_is_rejected_unless_allowed() {
    let src = "module {\n  alien.widget\n}\n";
    let mut cfg = Config {
        frontend: Some("ir".into()),
        ..Config::default()
    };
    let err = run(&cfg, src).unwrap_err();
    assert!(matches!(
        err,
        OptError::Frontend(FrontendError::Dialect(DialectError::UnknownDialectNode { ref kind }))
            if kind == "alien.widget"
    ));

    cfg.allow_unregistered_dialect = true;
    assert_eq!(run(&cfg, src).unwrap(), src);
}

#[test]
fn unknown_frontend_fails_without_reading() {
    let cfg = Config {
        frontend: Some("cobol".into()),
        ..Config::default()
    };
    let opt = OptMain::new(false).unwrap();
    let err = opt.run(&cfg, io::repeat(b'x'), io::sink()).unwrap_err();
    assert!(matches!(err, OptError::Frontend(FrontendError::UnknownFrontend(ref t)) if t == "cobol"));
}

#[test]
fn syntax_errors_carry_position() {
    let cfg = Config {
        frontend: Some("toy".into()),
        ..Config::default()
    };
    let err = run(&cfg, "1 2\n  3 x4\n").unwrap_err();
    match err {
        OptError::Frontend(FrontendError::Syntax(e)) => {
            assert_eq!((e.line, e.column), (2, 5));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failing_pass_is_reported_with_position_and_no_output() {
    let cfg = Config {
        frontend: Some("txt".into()),
        passes: vec!["nop".into(), "double-literal".into()],
        ..Config::default()
    };
    let opt = OptMain::new(false).unwrap();
    let mut out = Vec::new();
    let err = opt
        .run(&cfg, i64::MAX.to_string().as_bytes(), &mut out)
        .unwrap_err();
    match err {
        OptError::Pipeline(e) => assert_eq!(e.failing_pass(), Some(("double-literal", 1))),
        other => panic!("unexpected error: {other}"),
    }
    assert!(out.is_empty());
}

#[test]
fn json_target_parses_back() {
    let text = optimize_source("txt", "7 8", &[], Target::Json).unwrap();
    let module: Module = serde_json::from_str(&text).unwrap();
    assert_eq!(module, Module::new().with_op(toy::lit(7)).with_op(toy::lit(8)));
}

#[test]
fn split_input_processes_chunks_independently() {
    let cfg = Config {
        frontend: Some("toy".into()),
        passes: vec!["double-literal".into()],
        split_input_file: true,
        ..Config::default()
    };
    let out = run(&cfg, "1\n// -----\n2\n").unwrap();
    assert_eq!(
        out,
        "module {\n  toy.lit {value = 2}\n}\n// -----\nmodule {\n  toy.lit {value = 4}\n}\n"
    );

    let err = run(&cfg, "1\n// -----\nbad\n").unwrap_err();
    match err {
        OptError::Frontend(FrontendError::Syntax(e)) => assert_eq!((e.line, e.column), (3, 1)),
        other => panic!("unexpected error: {other}"),
    }
}
