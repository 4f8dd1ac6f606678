// CLASSIFICATION: COMMUNITY
// Filename: pass_pipeline.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Registry, pipeline builder and executor working together.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use choco_opt::frontend::toy;
use choco_opt::ir::{Context, DialectError, Module, Operation};
use choco_opt::pass_framework::{
    Pass, PassError, PassFilter, PassManager, PassRegistry, PassRegistryBuilder, Pipeline,
    PipelineError, Provenance, RegistryError,
};
use choco_opt::passes::{integrated_passes, native_passes, standard_registry};

/// Appends its label to a shared log; fails when asked to.
struct Recorder {
    label: &'static str,
    fail: bool,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl Pass for Recorder {
    fn label(&self) -> &str {
        self.label
    }

    fn run(&self, _ctx: &Context, _module: &mut Module) -> Result<(), PassError> {
        self.log.lock().unwrap().push(self.label);
        if self.fail {
            Err(PassError::failed("recorded failure"))
        } else {
            Ok(())
        }
    }
}

fn recorders(log: &Arc<Mutex<Vec<&'static str>>>) -> PassRegistry {
    let recorder = |label, fail| Recorder {
        label,
        fail,
        log: Arc::clone(log),
    };
    PassRegistryBuilder::new()
        .native(recorder("p1", false))
        .integrated(recorder("p2", true))
        .integrated(recorder("p3", false))
        .build()
        .unwrap()
}

#[test]
fn standard_listing_is_stable() {
    let first: Vec<_> = standard_registry()
        .unwrap()
        .names(PassFilter::All)
        .map(str::to_owned)
        .collect();
    for _ in 0..3 {
        let again: Vec<_> = standard_registry()
            .unwrap()
            .names(PassFilter::All)
            .map(str::to_owned)
            .collect();
        assert_eq!(first, again);
    }
    let reg = standard_registry().unwrap();
    let native: Vec<_> = reg.names(PassFilter::Native).collect();
    let integrated: Vec<_> = reg.names(PassFilter::Integrated).collect();
    assert_eq!(native.len() + integrated.len(), reg.len());
    assert_eq!(
        reg.lookup("double-literal").map(|p| p.provenance()),
        Some(Provenance::Integrated)
    );
}

#[test]
fn registering_a_list_twice_is_a_duplicate() {
    let err = PassRegistry::build(native_passes(), native_passes()).unwrap_err();
    assert_eq!(err, RegistryError::DuplicatePassName("nop".into()));
    assert!(PassRegistry::build(native_passes(), integrated_passes()).is_ok());
}

#[test]
fn pipeline_build_is_all_or_nothing() {
    let reg = standard_registry().unwrap();
    let err = Pipeline::build(&reg, ["nop", "bogus", "verify"]).unwrap_err();
    assert_eq!(err, PipelineError::UnknownPass("bogus".into()));

    // Requested names are matched exactly, not normalised.
    assert!(Pipeline::build(&reg, ["double_literal"]).is_err());

    let pipeline = Pipeline::parse(&reg, "verify,all-native").unwrap();
    assert_eq!(
        pipeline.names().collect::<Vec<_>>(),
        vec!["verify", "nop", "strip-location", "verify"]
    );
}

#[test]
fn execution_stops_at_first_failure() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let reg = recorders(&log);
    let pipeline = Pipeline::build(&reg, ["p1", "p2", "p3"]).unwrap();
    let mut module = Module::new();
    let err = pipeline.apply(&Context::new(), &mut module).unwrap_err();
    assert_eq!(err.failing_pass(), Some(("p2", 1)));
    assert!(err.to_string().contains("recorded failure"));
    assert_eq!(*log.lock().unwrap(), vec!["p1", "p2"]);
}

#[test]
fn empty_pipeline_is_identity() {
    let before = Module::named("m").with_op(toy::lit(1));
    let mut module = before.clone();
    Pipeline::empty().apply(&Context::new(), &mut module).unwrap();
    assert_eq!(module, before);
}

/// Introduces an operation from an unknown dialect.
struct Corrupt;

impl Pass for Corrupt {
    fn run(&self, _ctx: &Context, module: &mut Module) -> Result<(), PassError> {
        module.push(Operation::new("ghost.op"));
        Ok(())
    }
}

#[test]
fn verify_each_catches_invalid_modules() {
    let reg = PassRegistryBuilder::new().integrated(Corrupt).build().unwrap();
    let mut ctx = Context::new();
    ctx.register_dialect(toy::dialect()).unwrap();

    let pipeline = Pipeline::build(&reg, ["corrupt"]).unwrap();
    let mut module = Module::new();
    PassManager::new(pipeline.clone())
        .run(&ctx, &mut module)
        .unwrap();

    let mut module = Module::new();
    let err = PassManager::new(pipeline)
        .verify_each(true)
        .run(&ctx, &mut module)
        .unwrap_err();
    assert_eq!(
        err,
        PipelineError::InvalidModuleAfterPass {
            name: "corrupt".into(),
            index: 0,
            source: DialectError::UnknownDialectNode {
                kind: "ghost.op".into()
            },
        }
    );
}

#[test]
fn hook_sees_every_completed_pass() {
    let reg = standard_registry().unwrap();
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let manager = PassManager::new(Pipeline::parse(&reg, "nop,double-literal").unwrap())
        .after_each(move |index, _name, _module| {
            counter.fetch_add(1, Ordering::SeqCst);
            assert!(index < 2);
        });
    let mut module = Module::new().with_op(toy::lit(2));
    manager.run(&Context::new(), &mut module).unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(module, Module::new().with_op(toy::lit(4)));
}
