//! The declared gene map: which locus drives which trait family.

use genotab_core::models::{Locus, LocusAssignment};

use crate::families;

///
/// Immutable list of the declared locus assignments.
///
/// Loci are disjoint in the flattened table by construction; the table
/// assembler re-checks this before simulating anything.
///
pub fn trait_gene_assignments() -> Vec<LocusAssignment> {
    vec![
        LocusAssignment::new(
            Locus::new(0, 20, 12),
            Box::new(families::eyes_expressor()),
            |phenotype| &mut phenotype.eye_type,
        ),
        LocusAssignment::new(
            Locus::new(0, 32, 12),
            Box::new(families::hair_expressor()),
            |phenotype| &mut phenotype.hair_type,
        ),
        LocusAssignment::new(
            Locus::new(0, 60, 12),
            Box::new(families::mouth_expressor()),
            |phenotype| &mut phenotype.mouth,
        ),
        LocusAssignment::new(
            Locus::new(1, 0, 8),
            Box::new(families::neck_expressor()),
            |phenotype| &mut phenotype.neck,
        ),
        LocusAssignment::new(
            Locus::new(1, 8, 8),
            Box::new(families::shirt_expressor()),
            |phenotype| &mut phenotype.shirt_type,
        ),
        LocusAssignment::new(
            Locus::new(1, 26, 8),
            Box::new(families::glasses_expressor()),
            |phenotype| &mut phenotype.glasses_type,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use genotab_core::consts::{CHROMOSOME_BITS, CHROMOSOME_COUNT};
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_declared_loci_fit_their_chromosomes() {
        for assignment in trait_gene_assignments() {
            let locus = assignment.locus;
            assert!(locus.chromosome < CHROMOSOME_COUNT, "{locus}");
            assert!(locus.start + locus.len <= CHROMOSOME_BITS, "{locus}");
        }
    }

    #[rstest]
    fn test_declared_loci_are_disjoint_in_the_table() {
        let assignments = trait_gene_assignments();
        assert_eq!(assignments.len(), 6);

        for (n, a) in assignments.iter().enumerate() {
            for b in &assignments[n + 1..] {
                let (a_begin, a_end) = a.locus.table_span();
                let (b_begin, b_end) = b.locus.table_span();
                assert!(
                    a_end <= b_begin || b_end <= a_begin,
                    "{} overlaps {}",
                    a.locus,
                    b.locus
                );
            }
        }
    }

    #[rstest]
    fn test_each_assignment_touches_its_own_field() {
        use genotab_core::models::Phenotype;

        let mut scratch = Phenotype::default();
        for (n, assignment) in trait_gene_assignments().iter().enumerate() {
            let slot = (assignment.slot)(&mut scratch);
            *slot = n.to_string();
        }

        assert_eq!(scratch.eye_type, "0");
        assert_eq!(scratch.hair_type, "1");
        assert_eq!(scratch.mouth, "2");
        assert_eq!(scratch.neck, "3");
        assert_eq!(scratch.shirt_type, "4");
        assert_eq!(scratch.glasses_type, "5");
    }
}
