use super::*;

/// Forced bet configuration for a hand.
///
/// The big blind posts the whole table's ante. Any field missing from a
/// hand file falls back to the crate defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Blinds {
    pub small: Chips,
    pub big: Chips,
    pub ante: Chips,
    pub order: AnteOrder,
}

impl Default for Blinds {
    fn default() -> Self {
        Self {
            small: S_BLIND,
            big: B_BLIND,
            ante: ANTE,
            order: AnteOrder::default(),
        }
    }
}

impl From<(Chips, Chips, Chips)> for Blinds {
    fn from((small, big, ante): (Chips, Chips, Chips)) -> Self {
        Self {
            small,
            big,
            ante,
            order: AnteOrder::default(),
        }
    }
}

impl Blinds {
    pub fn with(self, order: AnteOrder) -> Self {
        Self { order, ..self }
    }
    /// What a small blind with `stack` chips manages to post.
    pub fn post_small(&self, stack: Chips) -> Posting {
        Posting {
            small: self.small.min(stack).max(0),
            ..Posting::default()
        }
    }
    /// What a big blind with `stack` chips manages to post.
    /// A short stack covers the first forced bet of [`AnteOrder`] before the second.
    pub fn post_big(&self, stack: Chips) -> Posting {
        let stack = stack.max(0);
        match self.order {
            AnteOrder::BlindFirst => {
                let big = self.big.min(stack);
                let ante = self.ante.min(stack - big);
                Posting { big, ante, ..Posting::default() }
            }
            AnteOrder::AnteFirst => {
                let ante = self.ante.min(stack);
                let big = self.big.min(stack - ante);
                Posting { big, ante, ..Posting::default() }
            }
        }
    }
}

/// Which forced bet a short-stacked big blind covers first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AnteOrder {
    #[default]
    BlindFirst,
    AnteFirst,
}

impl TryFrom<&str> for AnteOrder {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "bb first" | "blind first" => Ok(Self::BlindFirst),
            "ante first" | "dealer first" => Ok(Self::AnteFirst),
            _ => Err(anyhow::anyhow!("invalid ante order: {}", s)),
        }
    }
}

impl TryFrom<String> for AnteOrder {
    type Error = anyhow::Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<AnteOrder> for String {
    fn from(order: AnteOrder) -> Self {
        order.to_string()
    }
}

impl std::fmt::Display for AnteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::BlindFirst => write!(f, "blind first"),
            Self::AnteFirst => write!(f, "ante first"),
        }
    }
}

/// Chips a player put in before any voluntary action.
///
/// Blinds are live money that counts toward matching a bet. The ante never
/// does; it is dead from the moment it is posted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Posting {
    pub small: Chips,
    pub big: Chips,
    pub ante: Chips,
}

impl Posting {
    /// Live blind money.
    pub fn blinds(&self) -> Chips {
        self.small + self.big
    }
    pub fn total(&self) -> Chips {
        self.small + self.big + self.ante
    }
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
