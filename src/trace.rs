use super::*;

/// Something noteworthy that happened while replaying a hand.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A section was replayed, moving `total` chips.
    Played { section: SectionId, total: Chips },
    /// A player could not cover their action.
    Forced(Shortfall),
    /// No prior stack was on record and the starting stack was used.
    Fallback { section: SectionId, player: PlayerId },
    /// Running pot after a section.
    Settled { section: SectionId, total: Chips },
}

/// Receives replay events. The replay itself stays free of side effects;
/// whatever observes it does so through this sink.
pub trait Trace {
    fn event(&mut self, event: &Event);
}

/// Discards everything.
impl Trace for () {
    fn event(&mut self, _: &Event) {}
}

/// Collects events in order.
impl Trace for Vec<Event> {
    fn event(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

/// Forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger;

impl Trace for Logger {
    fn event(&mut self, event: &Event) {
        match event {
            Event::Forced(_) | Event::Fallback { .. } => log::warn!("{}", event),
            _ => log::debug!("{}", event),
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Played { section, total } => {
                write!(f, "played {} moved {}", section, Unit::format(*total))
            }
            Self::Forced(shortfall) => write!(f, "forced {}", shortfall),
            Self::Fallback { section, player } => {
                write!(f, "no prior stack for player {} at {}, using starting stack", player, section)
            }
            Self::Settled { section, total } => {
                write!(f, "pot at {} {}", section, Unit::format(*total))
            }
        }
    }
}
