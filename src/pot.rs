use super::*;

/// One pot of the settlement: the main pot at index 0, side pots after it
/// in ascending cap order.
///
/// # Fields
///
/// - `amount`: Chips in the pot, dead money and carried chips included
/// - `cap`: The per-player contribution level that defines the pot
/// - `eligible`: Players who can win it
/// - `excluded`: Active players who fell short of the cap, and why
/// - `share`: Percentage of the grand total
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Pot {
    pub amount: Chips,
    pub cap: Chips,
    pub eligible: Vec<PlayerId>,
    pub excluded: Vec<Exclusion>,
    pub share: f64,
}

/// An active player left out of a pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Exclusion {
    pub player: PlayerId,
    pub reason: Reason,
}

/// Why a player cannot win a pot, with their contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reason {
    /// All-in below the cap.
    AllIn(Chips),
    /// Still has chips but has not put in enough.
    Short(Chips),
}

impl Pot {
    pub fn is_eligible(&self, player: PlayerId) -> bool {
        self.eligible.contains(&player)
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::AllIn(chips) => write!(f, "all-in for {}", Unit::format(*chips)),
            Self::Short(chips) => write!(f, "only {} in", Unit::format(*chips)),
        }
    }
}
