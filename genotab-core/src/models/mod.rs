pub mod assignment;
pub mod bit_spec;
pub mod locus;
pub mod phenotype;

// re-export for cleaner imports
pub use self::assignment::{GeneExpressor, LocusAssignment, SlotAccessor};
pub use self::bit_spec::DnaBitSpec;
pub use self::locus::Locus;
pub use self::phenotype::Phenotype;
