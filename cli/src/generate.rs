use std::{
    fs::File,
    io::{self, BufWriter, Write},
    ops::ControlFlow,
    path::Path,
};

use anyhow::{Context, Result};
use prince_core::{PrinceEngine, PrinceError};
use serde::{Deserialize, Serialize};

use crate::{common, Generate};

/// The entire persisted resume state: the last completed global keyspace position.
#[derive(Serialize, Deserialize)]
struct ResumeState {
    total_ks_pos: u128,
}

fn load_cursor(path: &Path) -> Result<u128> {
    let file = File::open(path)
        .map_err(PrinceError::from)
        .with_context(|| format!("unable to open resume-state file {}", path.display()))?;
    let state: ResumeState = bincode::deserialize_from(file)
        .map_err(PrinceError::from)
        .with_context(|| format!("unable to decode resume-state file {}", path.display()))?;
    Ok(state.total_ks_pos)
}

fn save_cursor(path: &Path, total_ks_pos: u128) -> Result<()> {
    let file = File::create(path)
        .map_err(PrinceError::from)
        .with_context(|| format!("unable to create resume-state file {}", path.display()))?;
    bincode::serialize_into(file, &ResumeState { total_ks_pos })
        .map_err(PrinceError::from)
        .with_context(|| format!("unable to write resume-state file {}", path.display()))
}

pub fn generate(args: Generate) -> Result<()> {
    let skip = match &args.resume_from {
        Some(path) => load_cursor(path)?,
        None => args.skip,
    };

    tracing::info!(dictionary = %args.common.dictionary.display(), "loading dictionary");
    let store = common::load_store(&args.common.dictionary)?;
    let config = common::build_config(&args.common, skip, args.limit)?;

    let mut engine = PrinceEngine::setup(store, config).context("failed to build chain set")?;
    tracing::info!(total_ks_cnt = %engine.total_ks_cnt(), "generation starting");

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .map_err(PrinceError::from)
                .with_context(|| format!("unable to create output file {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut write_err: Option<io::Error> = None;
    let control_flow = engine.run(&mut |candidate: &[u8]| -> ControlFlow<()> {
        if let Err(err) = out.write_all(candidate).and_then(|_| out.write_all(b"\n")) {
            write_err = Some(err);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    });

    out.flush().context("failed to flush output")?;

    if let Some(path) = &args.save_state {
        save_cursor(path, engine.total_ks_pos())?;
    }

    if let Some(err) = write_err {
        return Err(PrinceError::from(err)).context("failed to write a candidate");
    }

    tracing::info!(
        total_ks_pos = %engine.total_ks_pos(),
        stopped_early = matches!(control_flow, ControlFlow::Break(())),
        "generation finished"
    );

    Ok(())
}
