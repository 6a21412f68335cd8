use crate::models::locus::Locus;
use crate::models::phenotype::Phenotype;

/// Locates the single [`Phenotype`] field a locus writes.
pub type SlotAccessor = fn(&mut Phenotype) -> &mut String;

///
/// A gene expressor resolves one allele of a locus to a trait name.
///
/// Implementations either overwrite `slot` with a trait name (dominant
/// expression) or leave it untouched when the allele carries no dominant
/// pattern. The same allele must always produce the same slot mutation.
///
pub trait GeneExpressor: Send + Sync {
    fn express(&self, allele: u32, slot: &mut String);
}

// Closures work as expressors in tests and one-off tools.
impl<F> GeneExpressor for F
where
    F: Fn(u32, &mut String) + Send + Sync,
{
    fn express(&self, allele: u32, slot: &mut String) {
        self(allele, slot)
    }
}

///
/// Pairs a locus with the expressor that resolves it and the accessor for
/// the phenotype field that expressor writes.
///
/// The set of assignments is immutable configuration, built once and
/// handed to the table assembler.
///
pub struct LocusAssignment {
    pub locus: Locus,
    pub expressor: Box<dyn GeneExpressor>,
    pub slot: SlotAccessor,
}

impl LocusAssignment {
    pub fn new(locus: Locus, expressor: Box<dyn GeneExpressor>, slot: SlotAccessor) -> Self {
        LocusAssignment {
            locus,
            expressor,
            slot,
        }
    }
}
