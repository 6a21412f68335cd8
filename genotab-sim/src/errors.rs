use thiserror::Error;

use genotab_core::models::Locus;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Locus {0} has invalid width: must be between 1 and 31 bits")]
    InvalidLocusWidth(Locus),

    #[error("Locus {0} does not fit its chromosome")]
    LocusOutOfBounds(Locus),

    #[error("Loci {0} and {1} overlap in the flattened table")]
    OverlappingLoci(Locus, Locus),

    #[error("Error serializing trait table: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
