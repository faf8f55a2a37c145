use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};
use prince_core::{ElementStore, PrinceConfig, PrinceConfigBuilder, PrinceError};

use crate::PrinceArgs;

/// Reads a dictionary file into an [`ElementStore`], one element per line.
///
/// Trailing `\r`/`\n` are trimmed at this boundary; no comment-line filtering is performed.
pub fn load_store(path: &Path) -> Result<ElementStore> {
    let file = File::open(path)
        .map_err(PrinceError::from)
        .with_context(|| format!("unable to open dictionary file {}", path.display()))?;

    let mut store = ElementStore::new();
    for line in BufReader::new(file).lines() {
        let line = line
            .map_err(PrinceError::from)
            .with_context(|| format!("unable to read {}", path.display()))?;
        store.insert(line.trim_end_matches(['\r', '\n']).as_bytes());
    }

    Ok(store)
}

/// Builds a [`PrinceConfig`] from the shared CLI arguments, with `skip`/`limit` supplied by the
/// caller (the `keyspace` subcommand never slices, so it always passes `0, 0`).
pub fn build_config(common: &PrinceArgs, skip: u128, limit: u128) -> Result<PrinceConfig> {
    PrinceConfigBuilder::new()
        .pw_min(common.pw_min)
        .pw_max(common.pw_max)
        .elem_cnt_min(common.elem_cnt_min)
        .elem_cnt_max(common.elem_cnt_max)
        .wl_dist_len(common.wl_dist_len)
        .skip(skip)
        .limit(limit)
        .build()
        .context("invalid configuration")
}
