use super::*;

/// Chips in the pot that no longer belong to anyone contesting it.
///
/// The whole amount goes to the main pot and never to a side pot.
///
/// # Fields
///
/// - `ante`: Every posted ante, folded or not
/// - `folded_blinds`: Blinds posted by players who later folded
/// - `folded_bets`: Everything else folded players put in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct DeadMoney {
    pub ante: Chips,
    pub folded_blinds: Chips,
    pub folded_bets: Chips,
}

impl DeadMoney {
    pub fn total(&self) -> Chips {
        self.ante + self.folded_blinds + self.folded_bets
    }
}

impl From<&[Contribution]> for DeadMoney {
    fn from(contributions: &[Contribution]) -> Self {
        let ante = contributions.iter().map(|c| c.posting.ante).sum();
        let folded_blinds = contributions
            .iter()
            .filter(|c| c.folded)
            .map(|c| c.posting.blinds())
            .sum();
        let folded_bets = contributions
            .iter()
            .filter(|c| c.folded)
            .map(|c| (c.total - c.posting.total()).max(0))
            .sum();
        Self {
            ante,
            folded_blinds,
            folded_bets,
        }
    }
}

impl std::fmt::Display for DeadMoney {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} (ante {}, folded blinds {}, folded bets {})",
            Unit::format(self.total()),
            Unit::format(self.ante),
            Unit::format(self.folded_blinds),
            Unit::format(self.folded_bets),
        )
    }
}
