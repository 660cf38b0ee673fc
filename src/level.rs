use super::*;

/// A betting pass within a street.
///
/// Action on a street can reopen twice after the first pass, so a street
/// holds up to three successive sections.
///
/// - `Base`: The first pass of the street
/// - `More`: Action reopened once
/// - `More2`: Action reopened twice
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Level {
    Base = 0isize,
    More = 1isize,
    More2 = 2isize,
}

impl Level {
    pub const fn all() -> &'static [Self] {
        &[Self::Base, Self::More, Self::More2]
    }
    pub const fn prev(&self) -> Option<Self> {
        match self {
            Self::Base => None,
            Self::More => Some(Self::Base),
            Self::More2 => Some(Self::More),
        }
    }
    /// True for the passes that reopen action.
    pub const fn is_reopened(&self) -> bool {
        !matches!(self, Self::Base)
    }
    /// Human label used in reports.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Base => "BASE",
            Self::More => "MORE ACTION 1",
            Self::More2 => "MORE ACTION 2",
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = Invalid;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "more" | "more1" => Ok(Self::More),
            "more2" => Ok(Self::More2),
            _ => Err(Invalid::Section(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = Invalid;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_string()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::More => write!(f, "more"),
            Self::More2 => write!(f, "more2"),
        }
    }
}
