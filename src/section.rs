use super::*;

/// Composite key of one betting pass: a street and a level within it.
///
/// Ordering is street first, then level, which is exactly the order in
/// which a hand is played. The string form is `"{street}_{level}"`, e.g.
/// `preflop_base` or `turn_more2`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId {
    street: Street,
    level: Level,
}

impl From<(Street, Level)> for SectionId {
    fn from((street, level): (Street, Level)) -> Self {
        Self { street, level }
    }
}

impl SectionId {
    /// The mandatory first section of every hand.
    pub const fn opening() -> Self {
        Self {
            street: Street::Pref,
            level: Level::Base,
        }
    }
    /// The last section a hand can reach.
    pub const fn closing() -> Self {
        Self {
            street: Street::Rive,
            level: Level::More2,
        }
    }
    /// Every section of a hand in playing order.
    pub fn all() -> impl Iterator<Item = Self> {
        Street::all()
            .iter()
            .flat_map(|s| Level::all().iter().map(move |l| Self::from((*s, *l))))
    }
    /// Every section up to and including `self`.
    pub fn upto(self) -> impl Iterator<Item = Self> {
        Self::all().take_while(move |s| *s <= self)
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn level(&self) -> Level {
        self.level
    }
    /// The base section of this section's street.
    pub fn base(&self) -> Self {
        Self::from((self.street, Level::Base))
    }
    /// True for the preflop base section, where blinds and antes live.
    pub fn is_opening(&self) -> bool {
        *self == Self::opening()
    }
    /// The section immediately before this one in playing order.
    pub fn prev(&self) -> Option<Self> {
        match self.level.prev() {
            Some(level) => Some(Self::from((self.street, level))),
            None => self
                .street
                .prev()
                .map(|street| Self::from((street, Level::More2))),
        }
    }
}

impl TryFrom<&str> for SectionId {
    type Error = Invalid;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (street, level) = s
            .trim()
            .split_once('_')
            .ok_or_else(|| Invalid::Section(s.to_string()))?;
        Ok(Self::from((Street::try_from(street)?, Level::try_from(level)?)))
    }
}

impl TryFrom<String> for SectionId {
    type Error = Invalid;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.to_string()
    }
}

impl std::str::FromStr for SectionId {
    type Err = Invalid;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}_{}", self.street, self.level)
    }
}
