use genotab_core::models::GeneExpressor;

///
/// One dominant expression pattern: an allele expresses `name` when
/// `allele & mask == value`.
///
#[derive(Debug, Clone, Copy)]
pub struct ExpressionRule {
    pub mask: u32,
    pub value: u32,
    pub name: &'static str,
}

impl ExpressionRule {
    pub fn matches(&self, allele: u32) -> bool {
        allele & self.mask == self.value
    }
}

///
/// Ordered dominance cascade for one trait family.
///
/// The first matching rule wins and overwrites the slot unconditionally.
/// When no rule matches, the recessive fallback is written only into an
/// empty slot; anything already there survives, which is how the
/// simulator's pre-seeded pass tells dominant from recessive alleles.
///
pub struct RuleExpressor {
    rules: &'static [ExpressionRule],
    recessive: &'static str,
}

impl RuleExpressor {
    pub fn new(rules: &'static [ExpressionRule], recessive: &'static str) -> Self {
        RuleExpressor { rules, recessive }
    }

    /// Every trait name this expressor can produce, sorted and deduplicated.
    pub fn vocabulary(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.rules.iter().map(|r| r.name).collect();
        names.push(self.recessive);
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl GeneExpressor for RuleExpressor {
    fn express(&self, allele: u32, slot: &mut String) {
        for rule in self.rules {
            if rule.matches(allele) {
                slot.clear();
                slot.push_str(rule.name);
                return;
            }
        }
        if slot.is_empty() {
            slot.push_str(self.recessive);
        }
    }
}
