use super::*;
use anyhow::Context;
use std::collections::BTreeMap;

/// One betting pass over every player still in the hand.
///
/// A round reads the hand and the outcomes already on the ledger, threads
/// the amount to call through each player's action in turn, and produces
/// the section's outcome. It never writes to the ledger itself.
pub struct Round<'a> {
    hand: &'a Hand,
    ledger: &'a Ledger,
    section: SectionId,
}

/// Everything a round produced.
///
/// # Fields
///
/// - `outcome`: The section's stacks and contributions
/// - `shortfalls`: Actions reclassified as all-in
/// - `fallbacks`: Players whose entry stack was not on record
#[derive(Debug, Clone, PartialEq)]
pub struct Played {
    pub outcome: Outcome,
    pub shortfalls: Vec<Shortfall>,
    pub fallbacks: Vec<PlayerId>,
}

impl<'a> From<(&'a Hand, &'a Ledger, SectionId)> for Round<'a> {
    fn from((hand, ledger, section): (&'a Hand, &'a Ledger, SectionId)) -> Self {
        Self {
            hand,
            ledger,
            section,
        }
    }
}

impl Round<'_> {
    pub fn play(&self) -> anyhow::Result<Played> {
        let mut outcome = Outcome::default();
        let mut shortfalls = Vec::new();
        let mut fallbacks = Vec::new();
        let mut entries = BTreeMap::new();
        for player in self.hand.players.iter() {
            let entry = match self.entry(player.id) {
                Some(chips) => chips,
                None => {
                    fallbacks.push(player.id);
                    player.stack
                }
            };
            entries.insert(player.id, entry);
        }
        let order = self
            .order()
            .into_iter()
            .filter(|id| !self.hand.folded_before(*id, self.section))
            .filter(|id| entries.get(id).is_some_and(|chips| *chips > 0))
            .collect::<Vec<PlayerId>>();
        let already = self.already();
        let mut to_call = self.seed(&already);
        let mut spent = BTreeMap::new();
        for id in order.iter().copied() {
            let player = self.hand.player(id).context("player missing from hand")?;
            let action = self.hand.action(self.section, id);
            let facing = Facing {
                spent: already.get(&id).copied().unwrap_or(0),
                stack: entries.get(&id).copied().unwrap_or(0),
                to_call,
            };
            let resolution = facing
                .resolve(&action)
                .with_context(|| format!("{} ({}) at {}", player.name, player.position, self.section))?;
            if resolution.to_call > to_call {
                outcome.aggressor = Some(id);
            }
            if resolution.forced {
                outcome.forced.insert(id);
                shortfalls.push(Shortfall {
                    player: id,
                    name: player.name.clone(),
                    position: player.position,
                    section: self.section,
                    required: resolution.required,
                    available: facing.stack,
                });
            }
            to_call = resolution.to_call;
            spent.insert(id, resolution.chips);
        }
        for (id, entry) in entries {
            outcome.put(id, entry, spent.get(&id).copied().unwrap_or(0));
        }
        outcome.order = order;
        Ok(Played {
            outcome,
            shortfalls,
            fallbacks,
        })
    }

    /// Stack entering the section: after postings for the first section,
    /// otherwise the exit stack of the last played section.
    fn entry(&self, id: PlayerId) -> Option<Chips> {
        match self.section.is_opening() {
            true => Some(self.hand.behind(id)),
            false => self
                .hand
                .preceding(self.section)
                .and_then(|prev| self.ledger.get(prev))
                .and_then(|outcome| outcome.exit(id)),
        }
    }

    /// What each player already has in on this street before the section:
    /// earlier levels plus live blinds. The ante never counts.
    fn already(&self) -> BTreeMap<PlayerId, Chips> {
        let base = self.section.base();
        self.hand
            .ids()
            .map(|id| {
                let blinds = match self.section.street().is_preflop() {
                    true => self.hand.posting(id).blinds(),
                    false => 0,
                };
                let earlier = self
                    .hand
                    .played(self.section)
                    .filter(|s| *s >= base && *s < self.section)
                    .filter_map(|s| self.ledger.get(s))
                    .map(|o| o.spent(id))
                    .sum::<Chips>();
                (id, blinds + earlier)
            })
            .collect()
    }

    /// The amount to call when the section opens.
    fn seed(&self, already: &BTreeMap<PlayerId, Chips>) -> Chips {
        match (self.section.is_opening(), self.section.level().is_reopened()) {
            (true, _) => self.hand.blinds.big,
            (false, true) => already.values().copied().max().unwrap_or(0),
            (false, false) => 0,
        }
    }

    /// Acting order. Base sections use the street's canonical order; a
    /// reopened section starts with the player after the last aggressor.
    fn order(&self) -> Vec<PlayerId> {
        let mut order = self.hand.order(self.section.street());
        if let Some(pivot) = self.pivot() {
            if let Some(i) = order.iter().position(|id| *id == pivot) {
                order.rotate_left(i + 1);
            }
        }
        order
    }

    /// Last aggressor of the previous pass on this street, or failing that
    /// its last player to act.
    fn pivot(&self) -> Option<PlayerId> {
        if !self.section.level().is_reopened() {
            return None;
        }
        let prev = self
            .hand
            .preceding(self.section)
            .filter(|prev| prev.street() == self.section.street())?;
        let outcome = self.ledger.get(prev)?;
        outcome.aggressor.or_else(|| {
            outcome
                .order
                .iter()
                .rev()
                .copied()
                .find(|id| self.hand.action(prev, *id).is_live())
        })
    }
}
