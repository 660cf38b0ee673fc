/// Errors raised while reading or replaying a recorded hand.
///
/// These travel inside `anyhow::Error` with context naming the player and
/// section involved; callers can recover the variant with `downcast_ref`.
#[derive(Debug, Clone, PartialEq)]
pub enum Invalid {
    /// A bet or raise whose declared amount is not a positive number.
    Amount(String),
    /// Action text that does not name a known action.
    Action(String),
    /// A position label with no canonical equivalent.
    Position(String),
    /// A malformed street, level or section key.
    Section(String),
    /// A chip unit other than K, Mil or actual.
    Unit(String),
}

impl std::fmt::Display for Invalid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount(s) => write!(f, "invalid amount: {}", s),
            Self::Action(s) => write!(f, "invalid action: {}", s),
            Self::Position(s) => write!(f, "invalid position: {}", s),
            Self::Section(s) => write!(f, "invalid section: {}", s),
            Self::Unit(s) => write!(f, "invalid unit: {}", s),
        }
    }
}

impl std::error::Error for Invalid {}
