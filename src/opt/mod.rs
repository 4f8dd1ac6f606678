// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! The choco-opt driver: wires the toy dialect, the frontend registry and
//! the pass registry together and runs parse -> passes -> output.

pub mod config;
pub mod logging;

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::{OptError, OptResult};
use crate::frontend::{toy, FrontendError, FrontendRegistry};
use crate::ir::{print_module, Context, Module};
use crate::output::{render, write_output, OutputError, Target};
use crate::pass_framework::{PassFilter, PassManager, PassRegistry, Pipeline};
use crate::passes::standard_registry;

use self::config::Config;

/// Line separating independent chunks under `--split-input-file`.
pub const SPLIT_MARKER: &str = "// -----";

/// Registries and context shared by every run.
#[derive(Debug)]
pub struct OptMain {
    ctx: Context,
    frontends: FrontendRegistry,
    passes: PassRegistry,
}

impl OptMain {
    /// Driver with the toy dialect, the default frontends and the standard
    /// pass set.
    pub fn new(allow_unregistered: bool) -> OptResult<Self> {
        let mut ctx = Context::new().allow_unregistered(allow_unregistered);
        ctx.register_dialect(toy::dialect())?;
        Ok(Self::with_parts(
            ctx,
            FrontendRegistry::with_defaults(),
            standard_registry()?,
        ))
    }

    pub fn with_parts(ctx: Context, frontends: FrontendRegistry, passes: PassRegistry) -> Self {
        Self {
            ctx,
            frontends,
            passes,
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn frontends(&self) -> &FrontendRegistry {
        &self.frontends
    }

    pub fn frontends_mut(&mut self) -> &mut FrontendRegistry {
        &mut self.frontends
    }

    pub fn passes(&self) -> &PassRegistry {
        &self.passes
    }

    /// One line per pass: name, provenance, description.
    pub fn list_passes(&self, filter: PassFilter) -> String {
        let width = self
            .passes
            .names(filter)
            .map(str::len)
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for entry in self.passes.entries(filter) {
            let _ = writeln!(
                out,
                "{:<width$}  [{}]  {}",
                entry.name(),
                entry.provenance(),
                entry.description()
            );
        }
        out
    }

    pub fn build_pipeline<I, S>(&self, names: I) -> OptResult<Pipeline>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Pipeline::build(&self.passes, names)?)
    }

    /// Parse `input` with the frontend registered for `tag`.
    pub fn parse_input<R: Read>(&self, tag: &str, input: R) -> OptResult<Module> {
        Ok(self.frontends.parse(&self.ctx, tag, input)?)
    }

    /// Run `manager` over `module` and render the result.
    pub fn transform(
        &self,
        manager: &PassManager,
        mut module: Module,
        target: Target,
    ) -> OptResult<String> {
        manager.run(&self.ctx, &mut module)?;
        Ok(render(&module, target)?)
    }

    /// Parse, transform and render `input` for `cfg`. The frontend and the
    /// pipeline are resolved before any input is read. Nothing is returned
    /// unless every chunk succeeds.
    pub fn process<R: Read>(&self, cfg: &Config, mut input: R) -> OptResult<String> {
        let tag = cfg.frontend_tag();
        self.frontends.resolve(&tag)?;
        let pipeline = self.build_pipeline(&cfg.passes)?;
        info!(
            "pipeline: [{}]",
            pipeline.names().collect::<Vec<_>>().join(", ")
        );
        let mut manager = PassManager::new(pipeline).verify_each(cfg.verify_each);
        if cfg.print_between_passes {
            manager = manager.after_each(print_after_pass);
        }

        if !cfg.split_input_file {
            let module = self.parse_input(&tag, input)?;
            return self.transform(&manager, module, cfg.target);
        }
        let mut source = String::new();
        input.read_to_string(&mut source).map_err(OptError::Input)?;
        let mut outputs = Vec::new();
        for (i, (line_offset, chunk)) in split_input(&source).into_iter().enumerate() {
            debug!("processing chunk {i}");
            let module = self
                .frontends
                .parse_str(&self.ctx, &tag, chunk)
                .map_err(|err| match err {
                    FrontendError::Syntax(mut e) => {
                        e.line += line_offset;
                        FrontendError::Syntax(e)
                    }
                    other => other,
                })?;
            outputs.push(self.transform(&manager, module, cfg.target)?);
        }
        let separator = format!("{SPLIT_MARKER}\n");
        Ok(outputs.join(separator.as_str()))
    }

    /// [`process`](Self::process), then write the result to `output`.
    /// `output` is untouched when processing fails.
    pub fn run<R: Read, W: Write>(&self, cfg: &Config, input: R, output: W) -> OptResult<()> {
        let rendered = self.process(cfg, input)?;
        write_output(&rendered, output)?;
        Ok(())
    }
}

fn print_after_pass(index: usize, name: &str, module: &Module) {
    eprint!(
        "// -----// IR after {name} (#{index}) //----- //\n{}",
        print_module(module)
    );
}

/// Split `source` on lines consisting solely of the split marker. Each
/// chunk comes with the number of source lines preceding it.
pub fn split_input(source: &str) -> Vec<(usize, &str)> {
    let mut chunks = Vec::new();
    let (mut start, mut offset) = (0, 0);
    let (mut start_line, mut line_no) = (0, 0);
    for line in source.split_inclusive('\n') {
        line_no += 1;
        if line.trim() == SPLIT_MARKER {
            chunks.push((start_line, &source[start..offset]));
            start = offset + line.len();
            start_line = line_no;
        }
        offset += line.len();
    }
    chunks.push((start_line, &source[start..]));
    chunks
}

/// File reader, or stdin for `None`.
pub fn open_input(path: Option<&Path>) -> OptResult<Box<dyn Read>> {
    match path {
        Some(p) => {
            let file = File::open(p).map_err(OptError::Input)?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin())),
    }
}

/// Buffered file writer, or stdout for `None`.
pub fn open_output(path: Option<&Path>) -> OptResult<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file = File::create(p).map_err(OutputError::Write)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
