//! Generation replay command
//!
//! Reads a JSON array of generations and feeds them, in order, through a
//! single engine. With `--verify` every edit-set is also applied to a mirror
//! of the previous generation and must reproduce the next one.

use super::{read_json, to_json};
use clap::Args;
use listrecon_core::apply::verify_edit_set;
use listrecon_core::schema::OP_REPLAY;
use listrecon_core::{log_op_end, log_op_error, log_op_start};
use listrecon_core::{EditCounts, EditSet, ExError, Generation, ModelIdentity, ReconEngine};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON file holding an array of generations
    pub file: PathBuf,

    /// Apply every edit-set to a mirror and fail on divergence
    #[arg(long)]
    pub verify: bool,

    /// Print edit counts instead of full edit-sets
    #[arg(long)]
    pub summary: bool,

    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Serialize)]
struct ReplayStep {
    generation: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    edits: Option<EditSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    counts: Option<EditCounts>,
}

pub fn execute(args: ReplayArgs) -> Result<(), ExError> {
    let started = Instant::now();
    log_op_start!(OP_REPLAY, file = %args.file.display(), verify = args.verify);

    match run(&args) {
        Ok(rendered) => {
            println!("{}", rendered);
            log_op_end!(OP_REPLAY, duration_ms = started.elapsed().as_millis() as u64);
            Ok(())
        }
        Err(err) => {
            log_op_error!(
                OP_REPLAY,
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn run(args: &ReplayArgs) -> Result<String, ExError> {
    let generations: Vec<Generation<ModelIdentity>> = read_json(&args.file, OP_REPLAY)?;
    let steps = replay(&generations, args.verify)?;

    let steps: Vec<ReplayStep> = steps
        .into_iter()
        .enumerate()
        .map(|(generation, edits)| {
            if args.summary {
                ReplayStep {
                    generation,
                    edits: None,
                    counts: Some(edits.summary()),
                }
            } else {
                ReplayStep {
                    generation,
                    edits: Some(edits),
                    counts: None,
                }
            }
        })
        .collect();
    to_json(&steps, args.pretty, OP_REPLAY)
}

/// One edit-set per generation, the first taken against an empty generation
fn replay(generations: &[Generation<ModelIdentity>], verify: bool) -> Result<Vec<EditSet>, ExError> {
    let mut engine = ReconEngine::new();
    let mut previous: &[Vec<ModelIdentity>] = &[];
    let mut steps = Vec::with_capacity(generations.len());

    for (index, generation) in generations.iter().enumerate() {
        let edits = engine.update(generation);
        if verify {
            verify_edit_set(previous, generation, &edits).map_err(|err| {
                let ex_err = ExError::from(err);
                let message = format!("generation {}: {}", index, ex_err.message());
                ex_err.with_op(OP_REPLAY).with_message(message)
            })?;
        }
        tracing::debug!(generation = index, empty = edits.is_empty(), "replayed generation");
        steps.push(edits);
        previous = generation.as_slice();
    }
    Ok(steps)
}
