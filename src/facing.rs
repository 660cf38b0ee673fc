use super::*;

/// The table as one player sees it when their turn comes.
///
/// # Fields
///
/// - `spent`: What the player already has in front of them this street
/// - `to_call`: The street total everyone must reach to stay in
/// - `stack`: Chips left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facing {
    pub spent: Chips,
    pub to_call: Chips,
    pub stack: Chips,
}

/// Chips moved by one resolved action.
///
/// # Fields
///
/// - `chips`: Chips actually moved into the pot
/// - `to_call`: The amount to call after this action
/// - `required`: Chips the action asked for before clipping to the stack
/// - `forced`: The stack fell short and the action became an all-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub chips: Chips,
    pub to_call: Chips,
    pub required: Chips,
    pub forced: bool,
}

impl From<(Chips, Chips, Chips)> for Facing {
    fn from((spent, to_call, stack): (Chips, Chips, Chips)) -> Self {
        Self {
            spent,
            to_call,
            stack,
        }
    }
}

impl Facing {
    /// Turns a recorded action into chips, clipping to the stack.
    ///
    /// A bet or raise declares the street total it aims for. A short stack
    /// moves what it has and only lifts the amount to call to what it
    /// actually reached.
    pub fn resolve(&self, action: &Action) -> anyhow::Result<Resolution> {
        let stack = self.stack.max(0);
        match action {
            Action::Idle | Action::Fold | Action::Check => Ok(self.moved(0, 0)),
            Action::Call => Ok(self.moved(self.owed(self.to_call), stack)),
            Action::AllIn => Ok(self.moved(stack, stack)),
            Action::Bet(amount) | Action::Raise(amount) => match amount.is_positive() {
                true => Ok(self.moved(self.owed(amount.chips()), stack)),
                false => Err(Invalid::Amount(amount.to_string()).into()),
            },
        }
    }
    fn owed(&self, target: Chips) -> Chips {
        (target - self.spent).max(0)
    }
    fn moved(&self, required: Chips, stack: Chips) -> Resolution {
        let chips = required.min(stack);
        Resolution {
            chips,
            required,
            forced: required > stack,
            to_call: self.to_call.max(self.spent + chips),
        }
    }
}
