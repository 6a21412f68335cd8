//! Assembly of the flattened trait table.
//!
//! The table has one slot per genome bit, in reading order: chromosome 1
//! first, chromosome 0 second, each locus most-significant bit first.
//! Slots no locus covers stay empty and serialize as `null`.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use genotab_core::consts::{CHROMOSOME_BITS, CHROMOSOME_COUNT, GENOME_BITS, MAX_LOCUS_BITS};
use genotab_core::models::{DnaBitSpec, Locus, LocusAssignment, Phenotype};

use crate::errors::SimulationError;
use crate::simulator::simulate_locus;

fn validate_assignments(assignments: &[LocusAssignment]) -> Result<(), SimulationError> {
    for assignment in assignments {
        let locus = assignment.locus;
        if locus.len == 0 || locus.len > MAX_LOCUS_BITS {
            return Err(SimulationError::InvalidLocusWidth(locus));
        }
        if locus.chromosome >= CHROMOSOME_COUNT || locus.start + locus.len > CHROMOSOME_BITS {
            return Err(SimulationError::LocusOutOfBounds(locus));
        }
    }

    for (n, a) in assignments.iter().enumerate() {
        for b in &assignments[n + 1..] {
            let (a_begin, a_end) = a.locus.table_span();
            let (b_begin, b_end) = b.locus.table_span();
            if a_begin < b_end && b_begin < a_end {
                return Err(SimulationError::OverlappingLoci(a.locus, b.locus));
            }
        }
    }

    Ok(())
}

///
/// Simulate every declared locus and scatter the per-bit records into the
/// flattened table.
///
/// The whole configuration is validated up front; nothing is simulated
/// for a bad configuration. Locus simulations are independent (each gets
/// its own scratch [`Phenotype`]) and run in parallel.
///
pub fn build_trait_table(
    assignments: &[LocusAssignment],
) -> Result<Vec<Option<DnaBitSpec>>, SimulationError> {
    validate_assignments(assignments)?;

    let pb = ProgressBar::new(assignments.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} loci")
            .unwrap()
            .progress_chars("##-"),
    );

    let results: Vec<(Locus, Vec<DnaBitSpec>)> = assignments
        .par_iter()
        .map(|assignment| {
            let mut scratch = Phenotype::default();
            let slot = (assignment.slot)(&mut scratch);
            let specs = simulate_locus(&assignment.locus, assignment.expressor.as_ref(), slot)?;
            pb.inc(1);
            Ok((assignment.locus, specs))
        })
        .collect::<Result<_, SimulationError>>()?;
    pb.finish_and_clear();

    let mut table: Vec<Option<DnaBitSpec>> = vec![None; GENOME_BITS];
    for (locus, specs) in results {
        let (begin, _end) = locus.table_span();
        // reading order: the most significant locus bit fills the first slot
        for (offset, spec) in specs.into_iter().rev().enumerate() {
            table[begin + offset] = Some(spec);
        }
    }

    Ok(table)
}
