//! Exhaustive per-locus allele simulation.
//!
//! Every allele of a locus is resolved twice: once from a blank slot, so
//! recessive expressions show too, and once from a slot pre-seeded with
//! [`DOMINANCE_PROBE`], which only dominant expressions can replace. A
//! probe surviving the second pass counts the allele as recessive.

use genotab_core::consts::{DOMINANCE_PROBE, MAX_LOCUS_BITS};
use genotab_core::models::{DnaBitSpec, GeneExpressor, Locus};

use crate::errors::SimulationError;

///
/// Run the exhaustive simulation for one locus.
///
/// Enumerates all `2^len` alleles in ascending order and tallies the
/// expressed trait name per bit offset, split by that bit's value. Returns
/// one [`DnaBitSpec`] per bit offset, least significant first, with the
/// chance maps already merged for the output contract.
///
/// `slot` is the phenotype field the expressor writes. It is reset before
/// every resolution, so its incoming contents do not matter.
///
pub fn simulate_locus(
    locus: &Locus,
    expressor: &dyn GeneExpressor,
    slot: &mut String,
) -> Result<Vec<DnaBitSpec>, SimulationError> {
    if locus.len == 0 || locus.len > MAX_LOCUS_BITS {
        return Err(SimulationError::InvalidLocusWidth(*locus));
    }

    let mut specs: Vec<DnaBitSpec> = (0..locus.len).map(DnaBitSpec::new).collect();

    for allele in 0..locus.allele_count() {
        slot.clear();
        expressor.express(allele, slot);
        for (i, spec) in specs.iter_mut().enumerate() {
            spec.tally(allele & (1 << i) != 0, slot);
        }

        slot.clear();
        slot.push_str(DOMINANCE_PROBE);
        expressor.express(allele, slot);
        for (i, spec) in specs.iter_mut().enumerate() {
            spec.tally_dominant(allele & (1 << i) != 0, slot);
        }
    }

    for spec in &mut specs {
        spec.merge_chance_maps();
    }

    Ok(specs)
}
