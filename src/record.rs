use super::*;
use std::collections::BTreeMap;

/// Recorded actions of a hand, keyed by section then player.
///
/// A section that holds at least one non-idle action is considered played.
/// Players missing from a section are idle in it.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<SectionId, BTreeMap<PlayerId, Action>>);

impl From<BTreeMap<SectionId, BTreeMap<PlayerId, Action>>> for Record {
    fn from(map: BTreeMap<SectionId, BTreeMap<PlayerId, Action>>) -> Self {
        Self(map)
    }
}

impl Record {
    /// The action `player` recorded in `section`.
    pub fn action(&self, section: SectionId, player: PlayerId) -> Action {
        self.0
            .get(&section)
            .and_then(|actions| actions.get(&player))
            .copied()
            .unwrap_or_default()
    }
    pub fn set(&mut self, section: SectionId, player: PlayerId, action: Action) {
        self.0.entry(section).or_default().insert(player, action);
    }
    /// Builder form of [`Record::set`].
    pub fn with(mut self, section: SectionId, player: PlayerId, action: Action) -> Self {
        self.set(section, player, action);
        self
    }
    /// True if anything other than idleness was recorded in `section`.
    pub fn has(&self, section: SectionId) -> bool {
        self.0
            .get(&section)
            .is_some_and(|actions| actions.values().any(|a| !a.is_idle()))
    }
    /// Reclassifies a short-stacked call, bet or raise as all-in.
    pub fn upgrade(&mut self, section: SectionId, player: PlayerId) {
        self.set(section, player, Action::AllIn);
    }
    /// Sections holding any recorded action, in playing order.
    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.0.keys().copied().filter(|s| self.has(*s))
    }
    /// Actions recorded for one player, in playing order.
    pub fn history(&self, player: PlayerId) -> impl Iterator<Item = (SectionId, Action)> + '_ {
        self.0
            .iter()
            .filter_map(move |(s, actions)| actions.get(&player).map(|a| (*s, *a)))
    }
}
