use super::*;

/// A player's recorded decision in one section.
///
/// Bets and raises carry the declared total contribution for the street;
/// every other action derives its chips from the table state. `Idle` means
/// nothing was recorded for the player.
///
/// # Text form
///
/// Actions read and write as short phrases, which is also their JSON form:
/// `"no action"`, `"fold"`, `"check"`, `"call"`, `"bet 2K"`,
/// `"raise 7.5K"`, `"all-in"`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Action {
    #[default]
    Idle,
    Fold,
    Check,
    Call,
    Bet(Amount),
    Raise(Amount),
    AllIn,
}

impl Action {
    /// True if nothing was recorded.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
    pub fn is_fold(&self) -> bool {
        matches!(self, Self::Fold)
    }
    /// True if the player took part in the section without folding.
    pub fn is_live(&self) -> bool {
        !matches!(self, Self::Idle | Self::Fold)
    }
    /// Declared amount of a bet or raise.
    pub fn amount(&self) -> Option<Amount> {
        match *self {
            Self::Bet(amount) | Self::Raise(amount) => Some(amount),
            _ => None,
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = Invalid;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let (kind, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        match kind.to_lowercase().as_str() {
            "" | "none" => Ok(Self::Idle),
            "no" if rest.trim().eq_ignore_ascii_case("action") => Ok(Self::Idle),
            "fold" => Ok(Self::Fold),
            "check" => Ok(Self::Check),
            "call" => Ok(Self::Call),
            "all-in" | "allin" | "shove" => Ok(Self::AllIn),
            "bet" | "raise" if rest.trim().is_empty() => {
                Err(Invalid::Action(format!("{} without amount", kind)))
            }
            "bet" => Ok(Self::Bet(Amount::try_from(rest)?)),
            "raise" => Ok(Self::Raise(Amount::try_from(rest)?)),
            _ => Err(Invalid::Action(s.to_string())),
        }
    }
}

impl TryFrom<String> for Action {
    type Error = Invalid;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.to_string()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "no action"),
            Self::Fold => write!(f, "fold"),
            Self::Check => write!(f, "check"),
            Self::Call => write!(f, "call"),
            Self::Bet(amount) => write!(f, "bet {}", amount),
            Self::Raise(amount) => write!(f, "raise {}", amount),
            Self::AllIn => write!(f, "all-in"),
        }
    }
}
