use super::*;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Permanent record of one played section.
///
/// Every seated player appears in the three stack maps, including players
/// who had already folded or were already all-in; they simply carry their
/// stack through with nothing spent.
///
/// # Fields
///
/// - `entry`: Stack entering the section
/// - `spent`: Chips moved in the section
/// - `exit`: Stack leaving the section, always `entry - spent`
/// - `order`: Players who were dealt into the section, in acting order
/// - `aggressor`: Last player to raise the amount to call
/// - `forced`: Players reclassified as all-in for lack of chips
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Outcome {
    pub entry: BTreeMap<PlayerId, Chips>,
    pub spent: BTreeMap<PlayerId, Chips>,
    pub exit: BTreeMap<PlayerId, Chips>,
    pub order: Vec<PlayerId>,
    pub aggressor: Option<PlayerId>,
    pub forced: BTreeSet<PlayerId>,
}

impl Outcome {
    pub fn entry(&self, player: PlayerId) -> Option<Chips> {
        self.entry.get(&player).copied()
    }
    pub fn spent(&self, player: PlayerId) -> Chips {
        self.spent.get(&player).copied().unwrap_or(0)
    }
    pub fn exit(&self, player: PlayerId) -> Option<Chips> {
        self.exit.get(&player).copied()
    }
    /// Chips moved by everyone in the section.
    pub fn total(&self) -> Chips {
        self.spent.values().sum()
    }
    /// Records a player's pass through the section.
    pub fn put(&mut self, player: PlayerId, entry: Chips, spent: Chips) {
        self.entry.insert(player, entry);
        self.spent.insert(player, spent);
        self.exit.insert(player, entry - spent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_is_entry_minus_spent() {
        let mut outcome = Outcome::default();
        outcome.put(1, 10_000, 2_500);
        outcome.put(2, 800, 800);
        assert_eq!(outcome.exit(1), Some(7_500));
        assert_eq!(outcome.exit(2), Some(0));
        assert_eq!(outcome.total(), 3_300);
        assert_eq!(outcome.spent(3), 0);
        assert_eq!(outcome.entry(3), None);
    }
}
