use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

///
/// Per-bit tally of trait outcomes, one record per bit offset of a locus.
///
/// `bit_index` is the offset within the locus (0 = least significant), not
/// the absolute genome position. The four maps count how often each trait
/// name came out with this bit clear or set: `chances0`/`chances1` for the
/// blank-slot pass, `chances0_dom`/`chances1_dom` for the dominance pass.
///
/// The serialized field names are the wire contract of the consuming
/// renderer. Maps are ordered so the artifact is byte-stable across runs.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaBitSpec {
    #[serde(rename = "geneIndex")]
    pub bit_index: u32,
    #[serde(rename = "c0")]
    pub chances0: BTreeMap<String, u32>,
    #[serde(rename = "c1")]
    pub chances1: BTreeMap<String, u32>,
    #[serde(rename = "c0dom")]
    pub chances0_dom: BTreeMap<String, u32>,
    #[serde(rename = "c1dom")]
    pub chances1_dom: BTreeMap<String, u32>,
}

impl DnaBitSpec {
    pub fn new(bit_index: u32) -> Self {
        DnaBitSpec {
            bit_index,
            ..Default::default()
        }
    }

    /// Count one blank-slot outcome for this bit.
    pub fn tally(&mut self, bit_set: bool, outcome: &str) {
        let bucket = if bit_set {
            &mut self.chances1
        } else {
            &mut self.chances0
        };
        *bucket.entry(outcome.to_owned()).or_insert(0) += 1;
    }

    /// Count one dominance-pass outcome for this bit.
    pub fn tally_dominant(&mut self, bit_set: bool, outcome: &str) {
        let bucket = if bit_set {
            &mut self.chances1_dom
        } else {
            &mut self.chances0_dom
        };
        *bucket.entry(outcome.to_owned()).or_insert(0) += 1;
    }

    ///
    /// Copy every entry of `chances0` into the other three maps.
    ///
    /// Entries present only in `chances1` or the dominance maps (probe
    /// tallies included) keep their counted values. The consuming renderer
    /// expects the maps flattened exactly this way.
    ///
    pub fn merge_chance_maps(&mut self) {
        let baseline: Vec<(String, u32)> = self
            .chances0
            .iter()
            .map(|(name, &count)| (name.clone(), count))
            .collect();
        for (name, count) in baseline {
            self.chances1.insert(name.clone(), count);
            self.chances0_dom.insert(name.clone(), count);
            self.chances1_dom.insert(name, count);
        }
    }
}
