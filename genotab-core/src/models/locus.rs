use std::fmt::{self, Display};

use crate::consts::{CHROMOSOME_BITS, GENOME_BITS};

///
/// Locus struct, a contiguous span of bits on one chromosome governing a
/// single trait family.
///
/// Bit offset 0 is the least significant bit of the span. The flattened
/// output table is laid out in reading order instead: chromosome 1 first,
/// then chromosome 0, and each locus written most-significant bit first.
/// [`Locus::table_span`] performs that remapping.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct Locus {
    pub chromosome: u32,
    pub start: u32,
    pub len: u32,
}

impl Locus {
    pub fn new(chromosome: u32, start: u32, len: u32) -> Self {
        Locus {
            chromosome,
            start,
            len,
        }
    }

    ///
    /// Number of distinct alleles of this locus.
    ///
    pub fn allele_count(&self) -> u32 {
        1 << self.len
    }

    ///
    /// Slot range `[begin, end)` this locus occupies in the flattened
    /// table of [`GENOME_BITS`] slots.
    ///
    /// Chromosome 1 fills the low table indices and chromosome 0 the high
    /// ones. Within the range, locus bit `len - 1` lands at `begin` and
    /// bit 0 at `end - 1`. The arithmetic assumes a validated locus:
    /// `chromosome < 2` and `start + len <= 128`.
    ///
    pub fn table_span(&self) -> (usize, usize) {
        let chrom_offset = CHROMOSOME_BITS * self.chromosome;
        let begin = GENOME_BITS - (chrom_offset + CHROMOSOME_BITS - self.start) as usize;
        let end =
            GENOME_BITS - (chrom_offset + CHROMOSOME_BITS - (self.start + self.len)) as usize;
        (begin, end)
    }
}

impl Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chr{}:{}-{}",
            self.chromosome,
            self.start,
            self.start + self.len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(Locus::new(0, 20, 12), 148, 160)]
    #[case(Locus::new(0, 32, 12), 160, 172)]
    #[case(Locus::new(0, 60, 12), 188, 200)]
    #[case(Locus::new(1, 0, 8), 0, 8)]
    #[case(Locus::new(1, 8, 8), 8, 16)]
    #[case(Locus::new(1, 26, 8), 26, 34)]
    fn test_table_span(#[case] locus: Locus, #[case] begin: usize, #[case] end: usize) {
        assert_eq!(locus.table_span(), (begin, end));
    }

    #[rstest]
    fn test_allele_count() {
        assert_eq!(Locus::new(0, 0, 1).allele_count(), 2);
        assert_eq!(Locus::new(0, 20, 12).allele_count(), 4096);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Locus::new(0, 20, 12).to_string(), "chr0:20-32");
    }
}
