use super::*;

/// Which sections a settlement gathers contributions from.
///
/// Everything committed before the scope starts is handed to the
/// partitioner as a single carried amount, so no chip is counted twice.
///
/// - `Section`: Only the target section
/// - `Street`: The target's street, from its base up to the target
/// - `Hand`: Everything from the blinds up to the target
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Section,
    Street,
    #[default]
    Hand,
}

impl Scope {
    pub const fn all() -> &'static [Self] {
        &[Self::Section, Self::Street, Self::Hand]
    }
    /// First section gathered when settling at `target`.
    pub fn start(&self, target: SectionId) -> SectionId {
        match self {
            Self::Section => target,
            Self::Street => target.base(),
            Self::Hand => SectionId::opening(),
        }
    }
    /// True if `section` is gathered when settling at `target`.
    pub fn covers(&self, target: SectionId, section: SectionId) -> bool {
        self.start(target) <= section && section <= target
    }
}

impl TryFrom<&str> for Scope {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "section" => Ok(Self::Section),
            "street" => Ok(Self::Street),
            "hand" => Ok(Self::Hand),
            _ => Err(anyhow::anyhow!("invalid scope: {}", s)),
        }
    }
}

impl std::str::FromStr for Scope {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Section => write!(f, "section"),
            Self::Street => write!(f, "street"),
            Self::Hand => write!(f, "hand"),
        }
    }
}
