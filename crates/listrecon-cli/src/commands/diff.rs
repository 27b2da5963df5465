//! Two-generation diff command

use super::{read_json, to_json};
use clap::Args;
use listrecon_core::schema::OP_DIFF;
use listrecon_core::{log_op_end, log_op_error, log_op_start};
use listrecon_core::{EditSet, ExError, Generation, ModelIdentity, ReconEngine};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// JSON file holding the previous generation
    #[arg(long)]
    pub old: PathBuf,

    /// JSON file holding the current generation
    #[arg(long)]
    pub new: PathBuf,

    #[arg(long)]
    pub pretty: bool,

    /// Print edit counts instead of the full edit-set
    #[arg(long)]
    pub summary: bool,
}

pub fn execute(args: DiffArgs) -> Result<(), ExError> {
    let started = Instant::now();
    log_op_start!(OP_DIFF, old = %args.old.display(), new = %args.new.display());

    match run(&args) {
        Ok(rendered) => {
            println!("{}", rendered);
            log_op_end!(OP_DIFF, duration_ms = started.elapsed().as_millis() as u64);
            Ok(())
        }
        Err(err) => {
            log_op_error!(
                OP_DIFF,
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn run(args: &DiffArgs) -> Result<String, ExError> {
    let old: Generation<ModelIdentity> = read_json(&args.old, OP_DIFF)?;
    let new: Generation<ModelIdentity> = read_json(&args.new, OP_DIFF)?;

    let edits = reconcile(&old, &new);
    if args.summary {
        to_json(&edits.summary(), args.pretty, OP_DIFF)
    } else {
        to_json(&edits, args.pretty, OP_DIFF)
    }
}

/// Edit-set taking `old` to `new` from a fresh engine
fn reconcile(old: &[Vec<ModelIdentity>], new: &[Vec<ModelIdentity>]) -> EditSet {
    let mut engine = ReconEngine::new();
    engine.update(old);
    engine.update(new)
}
