//! Rule sets for the six trait families.
//!
//! Masks select the high bits of each allele, so the rarer looks sit behind
//! the more specific patterns at the top of each cascade. The 12-bit
//! families (eyes, hair, mouth) and the 8-bit families (neck, shirt,
//! glasses) each end in a recessive fallback. No name here may equal
//! [`genotab_core::consts::DOMINANCE_PROBE`].

use crate::rules::{ExpressionRule, RuleExpressor};

const EYES_RULES: [ExpressionRule; 5] = [
    ExpressionRule {
        mask: 0xFC0,
        value: 0xFC0,
        name: "laser",
    },
    ExpressionRule {
        mask: 0xE00,
        value: 0xE00,
        name: "glowing",
    },
    ExpressionRule {
        mask: 0xE00,
        value: 0xC00,
        name: "sleepy",
    },
    ExpressionRule {
        mask: 0xC00,
        value: 0x800,
        name: "wink",
    },
    ExpressionRule {
        mask: 0xC00,
        value: 0x400,
        name: "wide",
    },
];

const HAIR_RULES: [ExpressionRule; 4] = [
    ExpressionRule {
        mask: 0xF00,
        value: 0xF00,
        name: "mohawk",
    },
    ExpressionRule {
        mask: 0xE00,
        value: 0xE00,
        name: "slick",
    },
    ExpressionRule {
        mask: 0xE00,
        value: 0xC00,
        name: "spiky",
    },
    ExpressionRule {
        mask: 0x800,
        value: 0x800,
        name: "wavy",
    },
];

const MOUTH_RULES: [ExpressionRule; 4] = [
    ExpressionRule {
        mask: 0xFF0,
        value: 0xAA0,
        name: "grin",
    },
    ExpressionRule {
        mask: 0xC00,
        value: 0xC00,
        name: "frown",
    },
    ExpressionRule {
        mask: 0xC00,
        value: 0x800,
        name: "smirk",
    },
    ExpressionRule {
        mask: 0xC00,
        value: 0x400,
        name: "open",
    },
];

const NECK_RULES: [ExpressionRule; 4] = [
    ExpressionRule {
        mask: 0xF0,
        value: 0xF0,
        name: "bowtie",
    },
    ExpressionRule {
        mask: 0xC0,
        value: 0xC0,
        name: "collar",
    },
    ExpressionRule {
        mask: 0xC0,
        value: 0x80,
        name: "scarf",
    },
    ExpressionRule {
        mask: 0xC0,
        value: 0x40,
        name: "chain",
    },
];

const SHIRT_RULES: [ExpressionRule; 3] = [
    ExpressionRule {
        mask: 0xE0,
        value: 0xE0,
        name: "suit",
    },
    ExpressionRule {
        mask: 0xE0,
        value: 0xC0,
        name: "hoodie",
    },
    ExpressionRule {
        mask: 0x80,
        value: 0x80,
        name: "striped",
    },
];

const GLASSES_RULES: [ExpressionRule; 3] = [
    ExpressionRule {
        mask: 0xF8,
        value: 0xF8,
        name: "monocle",
    },
    ExpressionRule {
        mask: 0xC0,
        value: 0xC0,
        name: "shades",
    },
    ExpressionRule {
        mask: 0xC0,
        value: 0x80,
        name: "round",
    },
];

pub fn eyes_expressor() -> RuleExpressor {
    RuleExpressor::new(&EYES_RULES, "plain")
}

pub fn hair_expressor() -> RuleExpressor {
    RuleExpressor::new(&HAIR_RULES, "short")
}

pub fn mouth_expressor() -> RuleExpressor {
    RuleExpressor::new(&MOUTH_RULES, "flat")
}

pub fn neck_expressor() -> RuleExpressor {
    RuleExpressor::new(&NECK_RULES, "bare")
}

pub fn shirt_expressor() -> RuleExpressor {
    RuleExpressor::new(&SHIRT_RULES, "tee")
}

pub fn glasses_expressor() -> RuleExpressor {
    RuleExpressor::new(&GLASSES_RULES, "none")
}

#[cfg(test)]
mod tests {
    use super::*;

    use genotab_core::consts::DOMINANCE_PROBE;
    use genotab_core::models::GeneExpressor;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn express(expressor: &RuleExpressor, allele: u32) -> String {
        let mut slot = String::new();
        expressor.express(allele, &mut slot);
        slot
    }

    #[rstest]
    #[case(eyes_expressor())]
    #[case(hair_expressor())]
    #[case(mouth_expressor())]
    #[case(neck_expressor())]
    #[case(shirt_expressor())]
    #[case(glasses_expressor())]
    fn test_vocabulary_never_collides_with_probe(#[case] expressor: RuleExpressor) {
        assert!(!expressor.vocabulary().contains(&DOMINANCE_PROBE));
    }

    #[rstest]
    fn test_eyes_cascade() {
        let eyes = eyes_expressor();
        assert_eq!(express(&eyes, 0xFC0), "laser");
        assert_eq!(express(&eyes, 0xE10), "glowing");
        assert_eq!(express(&eyes, 0xC05), "sleepy");
        assert_eq!(express(&eyes, 0x880), "wink");
        assert_eq!(express(&eyes, 0x47F), "wide");
        assert_eq!(express(&eyes, 0x000), "plain");
        assert_eq!(express(&eyes, 0x3FF), "plain");
    }

    #[rstest]
    fn test_eight_bit_cascades() {
        assert_eq!(express(&neck_expressor(), 0xF3), "bowtie");
        assert_eq!(express(&neck_expressor(), 0xD0), "collar");
        assert_eq!(express(&neck_expressor(), 0x9F), "scarf");
        assert_eq!(express(&neck_expressor(), 0x40), "chain");
        assert_eq!(express(&neck_expressor(), 0x3F), "bare");

        assert_eq!(express(&shirt_expressor(), 0xE0), "suit");
        assert_eq!(express(&shirt_expressor(), 0xC1), "hoodie");
        assert_eq!(express(&shirt_expressor(), 0xA0), "striped");
        assert_eq!(express(&shirt_expressor(), 0x7F), "tee");

        assert_eq!(express(&glasses_expressor(), 0xFF), "monocle");
        assert_eq!(express(&glasses_expressor(), 0xC7), "shades");
        assert_eq!(express(&glasses_expressor(), 0x80), "round");
        assert_eq!(express(&glasses_expressor(), 0x00), "none");
    }

    #[rstest]
    fn test_recessive_alleles_leave_seeded_slot() {
        let mut slot = String::from(DOMINANCE_PROBE);
        eyes_expressor().express(0x123, &mut slot);
        assert_eq!(slot, DOMINANCE_PROBE);
    }
}
