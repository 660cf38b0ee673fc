use super::*;

/// A seated player, fixed for the duration of a hand.
///
/// # Fields
///
/// - `id`: Identity used to key every per-player map
/// - `name`: Display name
/// - `position`: Canonical seat
/// - `stack`: Chips held when the hand began, before any posting
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub stack: Chips,
}

impl From<(PlayerId, &str, Position, Chips)> for Player {
    fn from((id, name, position, stack): (PlayerId, &str, Position, Chips)) -> Self {
        Self {
            id,
            name: name.to_string(),
            position,
            stack,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}
