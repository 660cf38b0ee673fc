//! Pot accounting for poker hands recorded after the fact.
//!
//! Given the players of a hand, the blind/ante configuration and the actions
//! recorded for each betting pass, this crate replays the hand chip by chip
//! and reports the main pot, side pots and dead money at any point.
//!
//! ## Hand Description
//!
//! - [`Hand`]: Players, blinds and the recorded actions
//! - [`Player`]: Identity, [`Position`] and starting stack
//! - [`Blinds`]: Small blind, big blind, ante and [`AnteOrder`]
//! - [`Record`]: Recorded [`Action`]s keyed by [`SectionId`]
//!
//! ## Replay
//!
//! - [`Facing`]: Resolves one recorded action into chips moved
//! - [`Round`]: Plays one betting pass ("section") for every active player
//! - [`Ledger`]: Append-only history of per-section [`Outcome`]s
//! - [`Replay`]: Result of cascading every section up to a target
//!
//! ## Settlement
//!
//! - [`Contribution`]: What one player put in for a given [`Scope`]
//! - [`DeadMoney`]: Antes, folded blinds and folded bets
//! - [`Partition`]: Splits contributions into main and side [`Pot`]s
//! - [`Pots`]: The reported structure, with betting round [`Status`]
//!
//! ## Collaborators
//!
//! - [`Unit`]: K / Mil / actual chip units
//! - [`Trace`]: Optional sink for replay [`Event`]s
mod action;
mod amount;
mod blinds;
mod cascade;
mod contribution;
mod dead;
mod error;
mod facing;
mod hand;
mod ledger;
mod level;
mod outcome;
mod partition;
mod player;
mod position;
mod pot;
mod pots;
mod record;
mod round;
mod scope;
mod section;
mod shortfall;
mod status;
mod street;
mod trace;
mod unit;

pub use action::*;
pub use amount::*;
pub use blinds::*;
pub use cascade::*;
pub use contribution::*;
pub use dead::*;
pub use error::*;
pub use facing::*;
pub use hand::*;
pub use ledger::*;
pub use level::*;
pub use outcome::*;
pub use partition::*;
pub use player::*;
pub use position::*;
pub use pot::*;
pub use pots::*;
pub use record::*;
pub use round::*;
pub use scope::*;
pub use section::*;
pub use shortfall::*;
pub use status::*;
pub use street::*;
pub use trace::*;
pub use unit::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets and pot amounts in absolute chips.
pub type Chips = i64;
/// Player identity as recorded in the hand history.
pub type PlayerId = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE DEFAULTS
// ============================================================================
/// Chips per `K` unit.
pub const KILO: Chips = 1_000;
/// Chips per `Mil` unit.
pub const MEGA: Chips = 1_000_000;
/// Default small blind.
pub const S_BLIND: Chips = 500;
/// Default big blind.
pub const B_BLIND: Chips = 1_000;
/// Default big blind ante.
pub const ANTE: Chips = 1_000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Environment variable overriding the terminal log level.
#[cfg(feature = "cli")]
pub const LOG_ENV: &str = "POTBOOK_LOG";

/// Initialize terminal logging.
/// The level comes from `POTBOOK_LOG` when set, otherwise from `verbose`.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(match verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Warn,
        });
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
