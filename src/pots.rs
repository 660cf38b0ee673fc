use super::*;

/// The full pot structure of a hand at one section.
///
/// # Fields
///
/// - `section`: Where the hand was settled
/// - `scope`: Which sections contributions were gathered from
/// - `pots`: Main pot first, then side pots by ascending cap
/// - `dead`: Dead money breakdown, all of it in the main pot
/// - `carried`: Chips committed before the scope, all of it in the main pot
/// - `total`: Grand total; equals the sum of `pots`
/// - `contributions`: Every player's gathered contribution
/// - `zeros`: Active players who have put nothing in
/// - `status`: Whether betting on the street is closed
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Pots {
    pub section: SectionId,
    pub scope: Scope,
    pub pots: Vec<Pot>,
    pub dead: DeadMoney,
    pub carried: Chips,
    pub total: Chips,
    pub contributions: Vec<Contribution>,
    pub zeros: Vec<PlayerId>,
    pub status: Status,
}

impl From<(&Hand, &Ledger, SectionId, Scope)> for Pots {
    fn from((hand, ledger, section, scope): (&Hand, &Ledger, SectionId, Scope)) -> Self {
        let contributions = Contribution::gather(hand, ledger, section, scope);
        let dead = DeadMoney::from(contributions.as_slice());
        let carried = hand.carried(ledger, section, scope);
        let partition = Partition::from((contributions.as_slice(), dead, carried));
        let status = match scope {
            Scope::Street => Status::from(contributions.as_slice()),
            _ => Status::from(Contribution::gather(hand, ledger, section, Scope::Street).as_slice()),
        };
        Self {
            section,
            scope,
            pots: partition.pots(),
            total: partition.total(),
            zeros: partition.zeros(),
            dead,
            carried,
            contributions,
            status,
        }
    }
}

impl Pots {
    pub fn main(&self) -> Option<&Pot> {
        self.pots.first()
    }
    pub fn sides(&self) -> &[Pot] {
        self.pots.get(1..).unwrap_or(&[])
    }
    pub fn contribution(&self, player: PlayerId) -> Option<&Contribution> {
        self.contributions.iter().find(|c| c.player == player)
    }
    /// Display name of a player, falling back to their id.
    pub fn name(&self, player: PlayerId) -> String {
        self.contribution(player)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| player.to_string())
    }
    /// Label of the pot at `index`.
    pub fn label(index: usize) -> String {
        match index {
            0 => "main pot".to_string(),
            n => format!("side pot {}", n),
        }
    }
}

impl std::fmt::Display for Pots {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{} ({}) total {} carried {}",
            self.section,
            self.scope,
            Unit::format(self.total),
            Unit::format(self.carried)
        )?;
        for (i, pot) in self.pots.iter().enumerate() {
            let eligible = pot
                .eligible
                .iter()
                .map(|p| self.name(*p))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "  {:<11}{:>9}  cap {:>7}  {:>5.1}%  {}",
                Self::label(i),
                Unit::format(pot.amount),
                Unit::format(pot.cap),
                pot.share,
                eligible
            )?;
            for exclusion in pot.excluded.iter() {
                writeln!(f, "    excluded {} ({})", self.name(exclusion.player), exclusion.reason)?;
            }
        }
        writeln!(f, "  dead money {}", self.dead)?;
        if !self.zeros.is_empty() {
            let zeros = self.zeros.iter().map(|p| self.name(*p)).collect::<Vec<_>>();
            writeln!(f, "  nothing in {}", zeros.join(", "))?;
        }
        write!(f, "  betting {}", self.status)
    }
}
