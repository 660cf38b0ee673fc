use super::*;

/// A declared bet size as written in the hand history: a number and a unit.
///
/// Amounts declare the player's total contribution for the street
/// ("raise to"), not the increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount {
    value: f64,
    unit: Unit,
}

impl From<(f64, Unit)> for Amount {
    fn from((value, unit): (f64, Unit)) -> Self {
        Self { value, unit }
    }
}

impl From<Chips> for Amount {
    fn from(chips: Chips) -> Self {
        Self::from((chips as f64, Unit::Actual))
    }
}

impl Amount {
    pub fn value(&self) -> f64 {
        self.value
    }
    pub fn unit(&self) -> Unit {
        self.unit
    }
    /// Absolute chips declared.
    pub fn chips(&self) -> Chips {
        self.unit.chips(self.value)
    }
    /// True if this amount can size a bet.
    pub fn is_positive(&self) -> bool {
        self.value.is_finite() && self.value > 0. && self.chips() > 0
    }
}

impl TryFrom<&str> for Amount {
    type Error = Invalid;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);
        let value = number
            .trim()
            .parse::<f64>()
            .map_err(|_| Invalid::Amount(s.to_string()))?;
        Ok(Self::from((value, Unit::try_from(unit)?)))
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.unit {
            Unit::Actual => write!(f, "{}", self.value),
            unit => write!(f, "{}{}", self.value, unit),
        }
    }
}
