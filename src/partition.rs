use super::*;

/// Splits active contributions into a main pot and side pots.
///
/// Each distinct contribution level opens a pot holding the slice between
/// it and the level below, taken from every player who reached it. Dead
/// money and carried chips land in the main pot only. When nobody active is
/// all-in there is nothing to split and a single pot holds everything.
///
/// An active player who has put nothing in opens a main pot capped at zero.
/// It holds only dead money and carried chips, and every active player can
/// win it.
#[derive(Debug, Clone)]
pub struct Partition {
    active: Vec<Contribution>,
    dead: DeadMoney,
    carried: Chips,
}

impl From<(&[Contribution], DeadMoney, Chips)> for Partition {
    fn from((contributions, dead, carried): (&[Contribution], DeadMoney, Chips)) -> Self {
        Self {
            active: contributions
                .iter()
                .filter(|c| c.is_active())
                .cloned()
                .collect(),
            dead,
            carried,
        }
    }
}

impl Partition {
    /// Every chip the pots must account for.
    pub fn total(&self) -> Chips {
        self.active.iter().map(|c| c.total).sum::<Chips>() + self.dead.total() + self.carried
    }
    /// Active players who have put nothing in.
    pub fn zeros(&self) -> Vec<PlayerId> {
        self.active
            .iter()
            .filter(|c| c.total == 0)
            .map(|c| c.player)
            .collect()
    }
    pub fn pots(&self) -> Vec<Pot> {
        let levels = self.levels();
        let mut pots = match self.active.iter().any(|c| c.allin) && !levels.is_empty() {
            true => self.split(&levels),
            false => vec![self.single()],
        };
        if let Some(main) = pots.first_mut() {
            main.amount += self.dead.total() + self.carried;
        }
        let total = self.total();
        for pot in pots.iter_mut() {
            pot.share = match total {
                0 => 0.,
                n => pot.amount as f64 / n as f64 * 100.,
            };
        }
        pots
    }

    /// Distinct contribution levels, ascending.
    fn levels(&self) -> Vec<Chips> {
        let mut levels = self
            .active
            .iter()
            .map(|c| c.total)
            .collect::<Vec<_>>();
        levels.sort_unstable();
        levels.dedup();
        levels
    }
    fn single(&self) -> Pot {
        Pot {
            amount: self.active.iter().map(|c| c.total).sum(),
            cap: self.active.iter().map(|c| c.total).max().unwrap_or(0),
            eligible: self.active.iter().map(|c| c.player).collect(),
            excluded: Vec::new(),
            share: 0.,
        }
    }
    fn split(&self, levels: &[Chips]) -> Vec<Pot> {
        let mut floor = 0;
        let mut pots = Vec::with_capacity(levels.len());
        for &cap in levels {
            let eligible = self
                .active
                .iter()
                .filter(|c| c.total >= cap)
                .map(|c| c.player)
                .collect::<Vec<_>>();
            let excluded = self
                .active
                .iter()
                .filter(|c| c.total < cap)
                .map(|c| Exclusion {
                    player: c.player,
                    reason: match c.allin {
                        true => Reason::AllIn(c.total),
                        false => Reason::Short(c.total),
                    },
                })
                .collect::<Vec<_>>();
            pots.push(Pot {
                amount: (cap - floor) * eligible.len() as Chips,
                cap,
                eligible,
                excluded,
                share: 0.,
            });
            floor = cap;
        }
        pots
    }
}
