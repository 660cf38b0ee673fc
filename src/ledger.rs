use super::*;
use std::collections::BTreeMap;

/// Append-only history of section outcomes.
///
/// A section is never edited in place. A corrected outcome is pushed as a
/// new revision and readers always see the latest one.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Ledger(BTreeMap<SectionId, Vec<Outcome>>);

impl Ledger {
    /// Appends `outcome` as the newest revision of `section`.
    /// Returns false if it matches the current revision, which is then kept.
    pub fn push(&mut self, section: SectionId, outcome: Outcome) -> bool {
        let revisions = self.0.entry(section).or_default();
        match revisions.last() {
            Some(latest) if *latest == outcome => false,
            _ => {
                revisions.push(outcome);
                true
            }
        }
    }
    /// Latest revision of `section`.
    pub fn get(&self, section: SectionId) -> Option<&Outcome> {
        self.0.get(&section).and_then(|revisions| revisions.last())
    }
    /// Number of revisions recorded for `section`.
    pub fn revisions(&self, section: SectionId) -> usize {
        self.0.get(&section).map_or(0, |revisions| revisions.len())
    }
}
