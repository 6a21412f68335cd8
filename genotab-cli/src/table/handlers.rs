use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use genotab_express::trait_gene_assignments;
use genotab_sim::{build_trait_table, write_table_to_path};

use super::cli;

pub fn run_table(matches: &ArgMatches) -> Result<()> {
    let default_out = cli::DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let assignments = trait_gene_assignments();
    let table = build_trait_table(&assignments)?;

    write_table_to_path(&table, Path::new(output))
        .with_context(|| format!("There was an error writing the trait table to: {output}"))?;

    Ok(())
}
