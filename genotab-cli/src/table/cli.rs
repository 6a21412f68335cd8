use clap::{Command, arg};

pub const TABLE_CMD: &str = "table";
pub const DEFAULT_OUT: &str = "output.json";

pub fn create_table_cli() -> Command {
    Command::new(TABLE_CMD)
        .about("Exhaustively simulate every declared locus and write the per-bit trait statistics table.")
        .arg(
            arg!(--output <output>)
                .help("Path for the JSON artifact")
                .required(false),
        )
}
