use super::*;

/// Canonical table position.
///
/// Hand histories label seats loosely ("button", "D", "utg1", "cut-off");
/// every label is normalized into one of these on the way in. `UTG` and `MP`
/// carry an offset so that `UTG+2` or `MP+1` keep their relative order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    UTG(u8),
    LJ,
    HJ,
    MP(u8),
    CO,
    BTN,
    SB,
    BB,
}

impl Position {
    /// Sort key for acting order on a street.
    /// Preflop starts left of the big blind; later streets start with the small blind.
    pub fn order(&self, street: Street) -> usize {
        let preflop = match *self {
            Self::UTG(n) => n as usize,
            Self::LJ => 3,
            Self::HJ => 4,
            Self::MP(n) => 5 + n as usize,
            Self::CO => 8,
            Self::BTN => 9,
            Self::SB => 10,
            Self::BB => 11,
        };
        match (street, self) {
            (Street::Pref, _) => preflop,
            (_, Self::SB) => 0,
            (_, Self::BB) => 1,
            (_, _) => preflop + 2,
        }
    }
}

impl TryFrom<&str> for Position {
    type Error = Invalid;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let label = s
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let offset = |rest: &str| -> Result<u8, Invalid> {
            match rest.trim().trim_start_matches('+').trim() {
                "" => Ok(0),
                n => n.parse::<u8>().map_err(|_| Invalid::Position(s.to_string())),
            }
        };
        match label.as_str() {
            "btn" | "bu" | "button" | "d" | "dealer" => Ok(Self::BTN),
            "sb" | "small blind" | "small" => Ok(Self::SB),
            "bb" | "big blind" | "big" => Ok(Self::BB),
            "co" | "cutoff" | "cut off" => Ok(Self::CO),
            "hj" | "hijack" => Ok(Self::HJ),
            "lj" | "lojack" | "lowjack" => Ok(Self::LJ),
            "under the gun" => Ok(Self::UTG(0)),
            "middle position" => Ok(Self::MP(0)),
            x if x.starts_with("utg") => Ok(Self::UTG(offset(&x[3..])?)),
            x if x.starts_with("mp") => Ok(Self::MP(offset(&x[2..])?)),
            _ => Err(Invalid::Position(s.to_string())),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = Invalid;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.to_string()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UTG(0) => write!(f, "UTG"),
            Self::UTG(n) => write!(f, "UTG+{}", n),
            Self::MP(0) => write!(f, "MP"),
            Self::MP(n) => write!(f, "MP+{}", n),
            Self::LJ => write!(f, "LJ"),
            Self::HJ => write!(f, "HJ"),
            Self::CO => write!(f, "CO"),
            Self::BTN => write!(f, "BTN"),
            Self::SB => write!(f, "SB"),
            Self::BB => write!(f, "BB"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_loose_labels() {
        assert_eq!(Position::try_from("Button").unwrap(), Position::BTN);
        assert_eq!(Position::try_from("D").unwrap(), Position::BTN);
        assert_eq!(Position::try_from("dealer").unwrap(), Position::BTN);
        assert_eq!(Position::try_from("Small Blind").unwrap(), Position::SB);
        assert_eq!(Position::try_from("big_blind").unwrap(), Position::BB);
        assert_eq!(Position::try_from("utg1").unwrap(), Position::UTG(1));
        assert_eq!(Position::try_from("UTG+2").unwrap(), Position::UTG(2));
        assert_eq!(Position::try_from("Under the Gun").unwrap(), Position::UTG(0));
        assert_eq!(Position::try_from("cut-off").unwrap(), Position::CO);
        assert_eq!(Position::try_from("mp+1").unwrap(), Position::MP(1));
        assert!(Position::try_from("goalkeeper").is_err());
        assert!(Position::try_from("utg+x").is_err());
    }

    #[test]
    fn preflop_acts_left_of_big_blind() {
        let mut seats = vec![Position::BB, Position::SB, Position::BTN, Position::UTG(0), Position::CO];
        seats.sort_by_key(|p| p.order(Street::Pref));
        assert_eq!(
            seats,
            vec![Position::UTG(0), Position::CO, Position::BTN, Position::SB, Position::BB]
        );
    }

    #[test]
    fn postflop_starts_with_small_blind() {
        let mut seats = vec![Position::BTN, Position::BB, Position::UTG(0), Position::SB];
        seats.sort_by_key(|p| p.order(Street::Turn));
        assert_eq!(
            seats,
            vec![Position::SB, Position::BB, Position::UTG(0), Position::BTN]
        );
    }

    #[test]
    fn displays_canonical_labels() {
        assert_eq!(Position::UTG(0).to_string(), "UTG");
        assert_eq!(Position::UTG(2).to_string(), "UTG+2");
        assert_eq!(Position::try_from("hijack").unwrap().to_string(), "HJ");
    }
}
