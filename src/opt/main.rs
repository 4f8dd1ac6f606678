// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::any::Any;
use std::io::Write;

use choco_opt::opt::{
    config::{Cli, Config},
    logging, open_input, open_output, OptMain,
};
use choco_opt::output::{write_output, OutputError};
use clap::Parser;

/// Entry point for the choco-opt binary.
pub fn main_entry() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.trace);
    let cfg = Config::from_cli(&cli)?;
    let opt = OptMain::new(cfg.allow_unregistered_dialect)?;

    if let Some(filter) = cfg.list_passes {
        let mut out = open_output(cfg.output.as_deref())?;
        out.write_all(opt.list_passes(filter).as_bytes())
            .and_then(|_| out.flush())
            .map_err(OutputError::Write)?;
        return Ok(());
    }

    let input = open_input(cfg.input.as_deref())?;
    let rendered = opt.process(&cfg, input)?;
    // The output file is only created once there is something to put in it.
    let output = open_output(cfg.output.as_deref())?;
    write_output(&rendered, output)?;
    Ok(())
}

/// Text carried by a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

fn main() {
    std::panic::set_hook(Box::new(|info| log::debug!("{info}")));
    let message = match std::panic::catch_unwind(main_entry) {
        Ok(Ok(())) => return,
        Ok(Err(e)) => e.to_string(),
        Err(payload) => format!("internal error: {}", panic_message(payload.as_ref())),
    };
    eprintln!("choco-opt: {message}");
    std::process::exit(1);
}
