use super::*;
use std::collections::BTreeMap;

/// What one player has put in over a [`Scope`], and where they stand.
///
/// Derived from the ledger on demand, never stored.
///
/// # Fields
///
/// - `total`: Chips counted toward pots: section contributions plus live
///   blinds, plus the ante too once the player has folded
/// - `sections`: Chips per gathered section
/// - `posting`: Forced bets, when the scope includes them
/// - `folded`: Out of the hand by the target section
/// - `allin`: Nothing left behind
/// - `stack`: Chips behind after the latest played section
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Contribution {
    pub player: PlayerId,
    pub name: String,
    pub position: Position,
    pub total: Chips,
    pub sections: BTreeMap<SectionId, Chips>,
    pub posting: Posting,
    pub folded: bool,
    pub allin: bool,
    pub stack: Chips,
}

impl Contribution {
    /// Gathers every player's contribution at `target`.
    pub fn gather(hand: &Hand, ledger: &Ledger, target: SectionId, scope: Scope) -> Vec<Self> {
        let latest = hand.played(target).filter_map(|s| ledger.get(s)).last();
        hand.players
            .iter()
            .map(|player| {
                let sections = hand
                    .played(target)
                    .filter(|s| scope.covers(target, *s))
                    .filter_map(|s| ledger.get(s).map(|o| (s, o.spent(player.id))))
                    .collect::<BTreeMap<SectionId, Chips>>();
                let posting = match scope.covers(target, SectionId::opening()) {
                    true => hand.posting(player.id),
                    false => Posting::default(),
                };
                let folded = hand.folded(player.id, target);
                let stack = latest
                    .and_then(|o| o.exit(player.id))
                    .unwrap_or_else(|| hand.behind(player.id));
                let ante = match folded {
                    true => posting.ante,
                    false => 0,
                };
                Self {
                    player: player.id,
                    name: player.name.clone(),
                    position: player.position,
                    total: sections.values().sum::<Chips>() + posting.blinds() + ante,
                    sections,
                    posting,
                    folded,
                    allin: stack <= 0,
                    stack,
                }
            })
            .collect()
    }
    /// Still contesting the pot.
    pub fn is_active(&self) -> bool {
        !self.folded
    }
}
