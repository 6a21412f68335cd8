mod table;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "genotab";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Offline generators for the genome trait lookup tables consumed by the rendering layer.")
        .subcommand_required(true)
        .subcommand(table::cli::create_table_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // TRAIT TABLE
        //
        Some((table::cli::TABLE_CMD, matches)) => {
            table::handlers::run_table(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
