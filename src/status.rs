use super::*;

/// Whether betting is closed at a section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Complete(Closure),
    /// Names of players still short of the highest contribution.
    Pending(Vec<String>),
}

/// Why betting closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Closure {
    Nobody,
    LastStanding,
    Matched,
    AllIn,
}

impl Status {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Judges street-cumulative contributions.
impl From<&[Contribution]> for Status {
    fn from(contributions: &[Contribution]) -> Self {
        let active = contributions
            .iter()
            .filter(|c| c.is_active())
            .collect::<Vec<_>>();
        let live = active.iter().filter(|c| !c.allin).collect::<Vec<_>>();
        let max = live.iter().map(|c| c.total).max().unwrap_or(0);
        match (active.len(), live.len()) {
            (0, _) => Self::Complete(Closure::Nobody),
            (1, _) => Self::Complete(Closure::LastStanding),
            (_, 0) => Self::Complete(Closure::AllIn),
            _ if live.iter().all(|c| c.total == max) => Self::Complete(Closure::Matched),
            _ => Self::Pending(
                live.iter()
                    .filter(|c| c.total < max)
                    .map(|c| c.name.clone())
                    .collect(),
            ),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Complete(Closure::Nobody) => write!(f, "complete (everyone folded)"),
            Self::Complete(Closure::LastStanding) => write!(f, "complete (one player left)"),
            Self::Complete(Closure::Matched) => write!(f, "complete (all bets matched)"),
            Self::Complete(Closure::AllIn) => write!(f, "complete (everyone all-in)"),
            Self::Pending(names) => write!(f, "pending: {}", names.join(", ")),
        }
    }
}
