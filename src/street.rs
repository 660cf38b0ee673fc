use super::*;

/// One of the four dealing rounds of a hold'em hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn prev(&self) -> Option<Self> {
        match self {
            Self::Pref => None,
            Self::Flop => Some(Self::Pref),
            Self::Turn => Some(Self::Flop),
            Self::Rive => Some(Self::Turn),
        }
    }
    /// True for the only street with blinds and antes.
    pub const fn is_preflop(&self) -> bool {
        matches!(self, Self::Pref)
    }
}

impl TryFrom<&str> for Street {
    type Error = Invalid;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "preflop" | "pref" | "pre" => Ok(Self::Pref),
            "flop" => Ok(Self::Flop),
            "turn" => Ok(Self::Turn),
            "river" | "rive" => Ok(Self::Rive),
            _ => Err(Invalid::Section(s.to_string())),
        }
    }
}

impl TryFrom<String> for Street {
    type Error = Invalid;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<Street> for String {
    fn from(street: Street) -> Self {
        street.to_string()
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}
