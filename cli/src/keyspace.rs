use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, Table};
use prince_core::PrinceEngine;

use crate::{common, Keyspace};

pub fn keyspace(args: Keyspace) -> Result<()> {
    tracing::info!(dictionary = %args.common.dictionary.display(), "loading dictionary");
    let store = common::load_store(&args.common.dictionary)?;
    let config = common::build_config(&args.common, 0, 0)?;

    let engine = PrinceEngine::setup(store, config).context("failed to build chain set")?;

    // printed as a plain u128, never rounded through a float: this is the whole point of the
    // subcommand.
    println!("{}", engine.total_ks_cnt());

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Length", "Keyspace"]);

    for (len, ks_cnt) in engine.length_breakdown() {
        table.add_row(vec![Cell::new(len), Cell::new(ks_cnt)]);
    }

    println!("{table}");

    Ok(())
}
