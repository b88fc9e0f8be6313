//! Application composition.
//!
//! Wires configuration to generators and use cases, and runs the demo
//! sequence: name a few entities, sample a generator, compare two ships,
//! then roll two dice that share a side count but not a generator.

use std::sync::Arc;

use rollcall_domain::{Dice, FullyNamed, Person, RandomSource, Starship};

use crate::infrastructure::{ConfigError, EngineConfig, GeneratorKind};
use crate::use_cases::{CompareStarships, RollDice, RollOutcome, ShipComparison};

/// Draws taken from the sampling generator before rolling.
const SAMPLE_DRAWS: usize = 2;

/// Main application state.
pub struct App {
    pub config: EngineConfig,
    pub use_cases: UseCases,
    sampler: Arc<dyn RandomSource>,
}

/// Container for all use cases.
pub struct UseCases {
    /// Die backed by the configured generator
    pub roll: RollDice,
    /// Die of the same size backed by `OddThroughNineteen`
    pub odd_roll: RollDice,
    pub compare: CompareStarships,
}

/// Everything the demo produced, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub names: Vec<String>,
    pub samples: Vec<i32>,
    pub comparison: ShipComparison,
    pub rolls: Vec<RollOutcome>,
    pub odd_rolls: Vec<RollOutcome>,
}

impl DemoReport {
    /// Lines written to stdout by the driver.
    pub fn stdout_lines(&self) -> Vec<String> {
        std::iter::once(self.comparison.to_string())
            .chain(self.rolls.iter().map(ToString::to_string))
            .chain(self.odd_rolls.iter().map(ToString::to_string))
            .collect()
    }
}

impl App {
    /// Build every generator and die described by `config`.
    ///
    /// Seeded configurations give each generator its own derived seed so the
    /// streams do not mirror each other.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let seed_for = |offset: u64| config.seed.map(|seed| seed.wrapping_add(offset));

        let sampler = GeneratorKind::OneThroughTen.build(seed_for(0));
        let primary = config.generator.build(seed_for(1));
        let odd = GeneratorKind::OddThroughNineteen.build(seed_for(2));

        let roll = RollDice::new(Dice::with_mode(config.dice_sides, primary, config.roll_mode)?);
        let odd_roll = RollDice::new(Dice::with_mode(config.dice_sides, odd, config.roll_mode)?);

        tracing::debug!(
            sides = config.dice_sides,
            generator = %config.generator,
            mode = %config.roll_mode,
            seeded = config.seed.is_some(),
            "Application composed"
        );

        Ok(Self {
            config,
            use_cases: UseCases {
                roll,
                odd_roll,
                compare: CompareStarships::new(),
            },
            sampler,
        })
    }

    pub fn run_demo(&self) -> DemoReport {
        let joe = Person::new("Joseph Rogers");
        let my_ship = Starship::with_prefix("Enterprise", "USS");
        let firefly = Starship::new("firefly");

        let named: [&dyn FullyNamed; 3] = [&joe, &my_ship, &firefly];
        let names: Vec<String> = named.iter().map(|n| n.full_name()).collect();
        for name in &names {
            tracing::info!(full_name = %name, "Named entity");
        }

        let samples: Vec<i32> = (0..SAMPLE_DRAWS).map(|_| self.sampler.random()).collect();
        tracing::info!(?samples, range = %self.sampler.range(), "Sampled generator");

        let comparison = self.use_cases.compare.execute(&my_ship, &firefly);
        let rolls = self.use_cases.roll.execute(self.config.roll_count);
        let odd_rolls = self.use_cases.odd_roll.execute(self.config.roll_count);

        DemoReport {
            names,
            samples,
            comparison,
            rolls,
            odd_rolls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_domain::{DomainError, RollMode};

    fn seeded_config(seed: u64) -> EngineConfig {
        EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_demo_names_and_comparison() {
        let app = App::new(EngineConfig::default()).unwrap();
        let report = app.run_demo();

        assert_eq!(
            report.names,
            vec!["Joseph Rogers", "USS Enterprise", "firefly"]
        );
        assert_eq!(report.comparison, ShipComparison::NotSame);
        assert_eq!(report.samples.len(), SAMPLE_DRAWS);
        assert!(report.samples.iter().all(|s| (1..=10).contains(s)));
    }

    #[test]
    fn test_demo_rolls_stay_on_the_die() {
        let app = App::new(EngineConfig::default()).unwrap();
        let report = app.run_demo();

        assert_eq!(report.rolls.len(), 5);
        assert!(report.rolls.iter().all(|r| (1..=6).contains(&r.value)));
    }

    #[test]
    fn test_odd_generator_only_rolls_even_faces_on_d6() {
        let app = App::new(EngineConfig {
            roll_count: 50,
            ..EngineConfig::default()
        })
        .unwrap();
        let report = app.run_demo();

        assert_eq!(report.odd_rolls.len(), 50);
        assert!(report.odd_rolls.iter().all(|r| r.value % 2 == 0));
    }

    #[test]
    fn test_seeded_demo_is_reproducible() {
        let first = App::new(seeded_config(7)).unwrap().run_demo();
        let second = App::new(seeded_config(7)).unwrap().run_demo();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stdout_lines_follow_demo_order() {
        let app = App::new(EngineConfig {
            roll_count: 2,
            ..seeded_config(1)
        })
        .unwrap();
        let report = app.run_demo();
        let lines = report.stdout_lines();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Not the same Starship!");
        assert!(lines[1..]
            .iter()
            .all(|l| l.starts_with("Random Dice roll is ")));
    }

    #[test]
    fn test_rejection_mode_is_wired_through() {
        let app = App::new(EngineConfig {
            roll_mode: RollMode::Rejection,
            generator: GeneratorKind::OneThroughHundred,
            dice_sides: 20,
            ..EngineConfig::default()
        })
        .unwrap();

        assert_eq!(app.use_cases.roll.dice().mode(), RollMode::Rejection);
        assert_eq!(app.use_cases.roll.dice().sides(), 20);
        assert_eq!(app.use_cases.roll.dice().generator_range().max(), 100);
    }

    #[test]
    fn test_invalid_sides_fail_composition() {
        let result = App::new(EngineConfig {
            dice_sides: 0,
            ..EngineConfig::default()
        });
        assert!(matches!(
            result,
            Err(ConfigError::Domain(DomainError::InvalidConfiguration(_)))
        ));
    }
}
