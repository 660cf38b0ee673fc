use super::*;

/// A hand as entered after the fact: who sat where, the forced bets, and
/// what everyone did in each section.
///
/// This is the only input to the engine. Stacks, contributions and pots are
/// all derived from it and never stored back.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Hand {
    pub players: Vec<Player>,
    #[serde(default)]
    pub blinds: Blinds,
    #[serde(default)]
    pub actions: Record,
}

impl From<(Vec<Player>, Blinds, Record)> for Hand {
    fn from((players, blinds, actions): (Vec<Player>, Blinds, Record)) -> Self {
        Self {
            players,
            blinds,
            actions,
        }
    }
}

impl Hand {
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }
    pub fn action(&self, section: SectionId, player: PlayerId) -> Action {
        self.actions.action(section, player)
    }

    /// Forced bets posted by `player` before preflop action.
    /// Heads-up without a seated small blind, the button posts it.
    pub fn posting(&self, id: PlayerId) -> Posting {
        let Some(player) = self.player(id) else {
            return Posting::default();
        };
        match player.position {
            Position::SB => self.blinds.post_small(player.stack),
            Position::BB => self.blinds.post_big(player.stack),
            Position::BTN if self.is_heads_up() => self.blinds.post_small(player.stack),
            _ => Posting::default(),
        }
    }
    fn is_heads_up(&self) -> bool {
        self.players.len() == 2 && self.players.iter().all(|p| p.position != Position::SB)
    }
    /// Stack left once forced bets are posted.
    pub fn behind(&self, id: PlayerId) -> Chips {
        self.player(id).map_or(0, |p| p.stack) - self.posting(id).total()
    }

    /// True if the section gets replayed: it holds recorded action, or it
    /// is the preflop base section where the blinds always play.
    pub fn is_played(&self, section: SectionId) -> bool {
        section.is_opening() || self.actions.has(section)
    }
    /// Played sections up to and including `target`.
    pub fn played(&self, target: SectionId) -> impl Iterator<Item = SectionId> + '_ {
        target.upto().filter(|s| self.is_played(*s))
    }
    /// The last played section before `section`.
    pub fn preceding(&self, section: SectionId) -> Option<SectionId> {
        section.prev().and_then(|prev| self.played(prev).last())
    }

    /// True if `player` is out of the hand by `upto`.
    ///
    /// Any recorded fold counts. A player with nothing recorded preflop
    /// never entered the hand and is folded automatically, unless posting
    /// put chips in and left none behind.
    pub fn folded(&self, player: PlayerId, upto: SectionId) -> bool {
        let never = self.action(SectionId::opening(), player).is_idle() && !self.is_posted_out(player);
        never || upto.upto().any(|s| self.action(s, player).is_fold())
    }
    /// True if forced bets took `player`'s whole stack.
    fn is_posted_out(&self, player: PlayerId) -> bool {
        self.posting(player).total() > 0 && self.behind(player) <= 0
    }
    /// True if `player` was out before `section` began.
    pub fn folded_before(&self, player: PlayerId, section: SectionId) -> bool {
        section
            .prev()
            .is_some_and(|prev| self.folded(player, prev))
    }
    /// The most recent action `player` recorded before `section`.
    pub fn previous(&self, player: PlayerId, section: SectionId) -> Option<(SectionId, Action)> {
        self.actions
            .history(player)
            .filter(|(s, _)| *s < section)
            .filter(|(_, a)| !a.is_idle())
            .last()
    }
    /// Canonical acting order on a street.
    pub fn order(&self, street: Street) -> Vec<PlayerId> {
        let mut players = self.players.iter().collect::<Vec<_>>();
        players.sort_by_key(|p| p.position.order(street));
        players.into_iter().map(|p| p.id).collect()
    }

    /// Chips committed before the first section `scope` gathers at `target`.
    pub fn carried(&self, ledger: &Ledger, target: SectionId, scope: Scope) -> Chips {
        let start = scope.start(target);
        let postings = match start.is_opening() {
            true => 0,
            false => self.ids().map(|id| self.posting(id).total()).sum(),
        };
        let sections = self
            .played(target)
            .filter(|s| *s < start)
            .filter_map(|s| ledger.get(s))
            .map(|o| o.total())
            .sum::<Chips>();
        postings + sections
    }
    /// Pot structure at `target`.
    pub fn settle(&self, ledger: &Ledger, target: SectionId, scope: Scope) -> Pots {
        Pots::from((self, ledger, target, scope))
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        use rand::Rng;
        const SEATS: [Position; 6] = [
            Position::SB,
            Position::BB,
            Position::UTG(0),
            Position::HJ,
            Position::CO,
            Position::BTN,
        ];
        let ref mut rng = rand::rng();
        let n = rng.random_range(2..=SEATS.len());
        let players = SEATS
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, position)| Player {
                id: i as PlayerId + 1,
                name: format!("P{}", i + 1),
                position: *position,
                stack: rng.random_range(1..=60) * S_BLIND,
            })
            .collect::<Vec<Player>>();
        let mut actions = Record::default();
        for section in SectionId::all() {
            if !section.is_opening() && rng.random_bool(0.4) {
                continue;
            }
            for player in players.iter() {
                if (!section.is_opening()) && rng.random_bool(0.2) {
                    continue;
                }
                let size = Amount::from(rng.random_range(1..=40) * S_BLIND);
                let action = match rng.random_range(0..6) {
                    0 => Action::Fold,
                    1 => Action::Check,
                    2 => Action::Call,
                    3 => Action::Bet(size),
                    4 => Action::Raise(size),
                    _ => Action::AllIn,
                };
                actions.set(section, player.id, action);
            }
        }
        Self {
            players,
            blinds: Blinds::default(),
            actions,
        }
    }
}
