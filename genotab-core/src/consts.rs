//! Genome layout constants shared across the workspace.

/// Width of a single chromosome, in bits.
pub const CHROMOSOME_BITS: u32 = 128;

/// Number of chromosomes in a genome.
pub const CHROMOSOME_COUNT: u32 = 2;

/// Total width of a genome: two concatenated chromosomes.
pub const GENOME_BITS: usize = (CHROMOSOME_BITS * CHROMOSOME_COUNT) as usize;

/// Upper bound on locus width. Alleles are enumerated in a `u32`, so a
/// wider locus would overflow the enumeration counter.
pub const MAX_LOCUS_BITS: u32 = 31;

/// Placeholder seeded into a trait slot before the dominance pass.
/// Trait vocabularies must never contain this value.
pub const DOMINANCE_PROBE: &str = "X";
