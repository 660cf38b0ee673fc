use super::*;

/// A call, bet or raise the player could not afford, played as all-in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Shortfall {
    pub player: PlayerId,
    pub name: String,
    pub position: Position,
    pub section: SectionId,
    pub required: Chips,
    pub available: Chips,
}

impl Shortfall {
    /// Chips the player was missing.
    pub fn missing(&self) -> Chips {
        self.required - self.available
    }
}

impl std::fmt::Display for Shortfall {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) all-in at {}: needed {}, had {}",
            self.name,
            self.position,
            self.section,
            Unit::format(self.required),
            Unit::format(self.available),
        )
    }
}
