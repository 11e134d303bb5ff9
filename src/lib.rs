/// # Poker Advisor
/// A texas holdem analysis library
///
/// Currently supports
///  - monte carlo equity estimation vs. a random or constrained opponent
///  - combinatorial 5..7 card hand evaluation with a total order
///  - scored action recommendations with pot economics, board texture,
///    leak findings and a confidence label
///
/// ## Equity Simulator
///
/// ```
/// use poker_advisor::card::Card;
/// use poker_advisor::equity_calculator::{evaluate_equity, SimulationConfig};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let hero: [Card; 2] = ["As".parse().unwrap(), "Ah".parse().unwrap()];
/// let mut rng = SmallRng::seed_from_u64(1);
/// let result = evaluate_equity(hero, &[], &SimulationConfig::new(10_000), &mut rng).unwrap();
/// println!("equity: {:.3}", result.equity());
/// ```
///
/// ## Decision Engine
///
/// ```
/// use poker_advisor::decision_engine::{
///     analyze, AnalysisInput, OpponentProfile, Position, Street,
/// };
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let input = AnalysisInput {
///     hero: ["As".parse().unwrap(), "Ah".parse().unwrap()],
///     board: vec!["Kd".parse().unwrap(), "7s".parse().unwrap(), "2c".parse().unwrap()],
///     pot: 30.0,
///     to_call: 10.0,
///     hero_stack: 150.0,
///     villain_stack: 200.0,
///     street: Street::Flop,
///     position: Position::Late,
///     profile: OpponentProfile::Unknown,
///     fold_equity: 0.35,
///     bet_sizings: vec![0.5, 0.75],
///     iterations: 10_000,
///     opponent_candidates: None,
/// };
/// let mut rng = SmallRng::seed_from_u64(1);
/// let result = analyze(&input, &mut rng).unwrap();
/// println!("primary play: {:?}", result.recommendations[0].action);
/// ```

#[macro_use]
extern crate lazy_static;

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod hand_evaluator;

pub mod equity_calculator;

pub mod decision_engine;

pub use crate::error::AdvisorError;
