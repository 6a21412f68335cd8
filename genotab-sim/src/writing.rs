//! Artifact serialization.
//!
//! The trait table ships as one JSON document: a top-level array with one
//! element per genome bit in reading order, `null` for uncovered slots.
//! Trait names pass through literally, markup characters included.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use genotab_core::models::DnaBitSpec;

use crate::errors::SimulationError;

/// Serialize the flattened table as JSON, with a trailing newline.
pub fn write_table<W: Write>(
    table: &[Option<DnaBitSpec>],
    writer: &mut W,
) -> Result<(), SimulationError> {
    serde_json::to_writer(&mut *writer, table)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Write the table artifact to `path`, replacing any previous file.
pub fn write_table_to_path(
    table: &[Option<DnaBitSpec>],
    path: &Path,
) -> Result<(), SimulationError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_table(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}
