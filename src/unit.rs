use super::*;

/// Scale in which hand histories record amounts.
///
/// - `K`: thousands of chips
/// - `Mil`: millions of chips, also read from the short label `m`
/// - `Actual`: chips as-is, also read from an empty label
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    K,
    Mil,
    #[default]
    Actual,
}

impl Unit {
    /// Chips represented by one of this unit.
    pub const fn factor(&self) -> Chips {
        match self {
            Self::K => KILO,
            Self::Mil => MEGA,
            Self::Actual => 1,
        }
    }
    /// Converts a declared value in this unit to absolute chips.
    pub fn chips(&self, value: f64) -> Chips {
        (value * self.factor() as f64).round() as Chips
    }
    /// Converts absolute chips back to a value in this unit.
    pub fn value(&self, chips: Chips) -> f64 {
        chips as f64 / self.factor() as f64
    }
    /// The largest unit that keeps the value at or above one.
    pub fn fit(chips: Chips) -> Self {
        match chips.abs() {
            n if n >= MEGA => Self::Mil,
            n if n >= KILO => Self::K,
            _ => Self::Actual,
        }
    }
    /// Compact rendering, e.g. `2.5K`, `1.25M`, `750`.
    pub fn format(chips: Chips) -> String {
        match Self::fit(chips) {
            Self::Mil => format!("{:.2}M", Self::Mil.value(chips)),
            Self::K => format!("{:.1}K", Self::K.value(chips)),
            Self::Actual => format!("{}", chips),
        }
    }
}

impl TryFrom<&str> for Unit {
    type Error = Invalid;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "k" => Ok(Self::K),
            "m" | "mil" => Ok(Self::Mil),
            "" | "actual" => Ok(Self::Actual),
            _ => Err(Invalid::Unit(s.to_string())),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = Invalid;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.to_string()
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::K => write!(f, "K"),
            Self::Mil => write!(f, "Mil"),
            Self::Actual => write!(f, "actual"),
        }
    }
}
