//! Roll dice use case.

use std::fmt;

use rollcall_domain::Dice;

/// One face produced by a [`RollDice`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    pub value: i32,
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Random Dice roll is {}", self.value)
    }
}

/// Rolls a die repeatedly and records every face.
pub struct RollDice {
    dice: Dice,
}

impl RollDice {
    pub fn new(dice: Dice) -> Self {
        Self { dice }
    }

    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// Roll `count` times.
    pub fn execute(&self, count: usize) -> Vec<RollOutcome> {
        tracing::info!(
            sides = self.dice.sides(),
            mode = %self.dice.mode(),
            generator_range = %self.dice.generator_range(),
            count,
            "Rolling dice"
        );

        (0..count)
            .map(|_| {
                let value = self.dice.roll();
                tracing::debug!(sides = self.dice.sides(), value, "Dice rolled");
                RollOutcome { value }
            })
            .collect()
    }
}
