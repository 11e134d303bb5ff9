use crossbeam::atomic::AtomicCell;

use std::sync::{Arc, RwLock};

use log::debug;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::card::{check_distinct, Card};
use crate::constants::{BOARD_CARDS, CARD_COUNT};
use crate::deck::FULL_DECK;
use crate::error::AdvisorError;
use crate::hand_evaluator::evaluate_seven;

const DEFAULT_ITERATIONS: u64 = 10_000;
const DEFAULT_THREADS: u8 = 4;
// poll the cancel flag every 1024 games
const BATCH_MASK: u64 = 0x3ff;

/// Simulation parameters
///
/// When `opponent_candidates` is supplied the opponent hand is drawn
/// uniformly from that set each iteration instead of from the remaining
/// deck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub iterations: u64,
    pub threads: u8,
    pub opponent_candidates: Option<Vec<[Card; 2]>>,
}

impl SimulationConfig {
    pub fn new(iterations: u64) -> SimulationConfig {
        SimulationConfig {
            iterations,
            ..SimulationConfig::default()
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            iterations: DEFAULT_ITERATIONS,
            threads: DEFAULT_THREADS,
            opponent_candidates: None,
        }
    }
}

/// Win/tie/loss counts of a completed simulation
///
/// The three counts always sum to the requested iteration count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
}

impl SimulationResult {
    pub fn iterations(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Hero equity, (wins + ties / 2) / iterations, in [0, 1]
    pub fn equity(&self) -> f64 {
        let n = self.iterations();
        if n == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.ties as f64 / 2.0) / n as f64
    }
}

/// Shared flag to stop an in-flight simulation
///
/// Workers poll it between batches; a cancelled run reports
/// [`AdvisorError::Cancelled`] and discards its accumulators, it never
/// returns a result built from fewer iterations than requested
#[derive(Clone)]
pub struct CancelToken(Arc<AtomicCell<bool>>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken(Arc::new(AtomicCell::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load()
    }
}

impl Default for CancelToken {
    fn default() -> CancelToken {
        CancelToken::new()
    }
}

/// Estimate hero equity by Monte-Carlo simulation
///
/// Each iteration fixes an opponent hand, completes the board from the
/// unseen cards and compares both 7 card hands.  The random source is an
/// explicit dependency: a seeded rng with a fixed thread count reproduces
/// the exact same counts
///
/// # Example
/// ```
/// use poker_advisor::card::Card;
/// use poker_advisor::equity_calculator::{evaluate_equity, SimulationConfig};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let hero: [Card; 2] = ["As".parse().unwrap(), "Ah".parse().unwrap()];
/// let mut rng = SmallRng::seed_from_u64(1);
/// let result = evaluate_equity(hero, &[], &SimulationConfig::new(10_000), &mut rng).unwrap();
/// assert!(result.equity() > 0.5);
/// ```
pub fn evaluate_equity<R: Rng>(
    hero: [Card; 2],
    board: &[Card],
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulationResult, AdvisorError> {
    evaluate_equity_cancellable(hero, board, config, rng, &CancelToken::new())
}

/// [`evaluate_equity`] with an externally owned cancel flag
pub fn evaluate_equity_cancellable<R: Rng>(
    hero: [Card; 2],
    board: &[Card],
    config: &SimulationConfig,
    rng: &mut R,
    token: &CancelToken,
) -> Result<SimulationResult, AdvisorError> {
    let sim = Simulator::new(hero, board, config)?;
    let sim = Arc::new(sim);
    let n_threads = config.threads.max(1);
    let base = config.iterations / u64::from(n_threads);
    let remainder = config.iterations % u64::from(n_threads);

    crossbeam::scope(|scope| {
        for t in 0..n_threads {
            let sim = Arc::clone(&sim);
            let token = token.clone();
            let quota = base + if u64::from(t) < remainder { 1 } else { 0 };
            let mut rng = SmallRng::from_rng(&mut *rng).unwrap();
            scope.spawn(move |_| {
                sim.run_monte_carlo(&mut rng, quota, &token);
            });
        }
    })
    .unwrap();

    if token.is_cancelled() {
        return Err(AdvisorError::Cancelled);
    }

    let results = sim.results.read().unwrap();
    let result = SimulationResult {
        wins: results.wins,
        ties: results.ties,
        losses: results.losses,
    };
    debug!(
        "simulation finished: {} games, equity {:.4}",
        result.iterations(),
        result.equity()
    );
    Ok(result)
}

/// Accumulated counts guarded by the results lock
#[derive(Default)]
struct Results {
    wins: u64,
    ties: u64,
    losses: u64,
}

/// Per-thread counts, flushed into `Results` once per batch
#[derive(Default)]
struct ResultsBatch {
    wins: u64,
    ties: u64,
    losses: u64,
}

/// Validated simulation scenario shared by all worker threads
struct Simulator {
    hero: [Card; 2],
    fixed_board: Vec<Card>,
    known_mask: u64,
    candidates: Option<Vec<[Card; 2]>>,
    results: RwLock<Results>,
}

impl Simulator {
    fn new(
        hero: [Card; 2],
        board: &[Card],
        config: &SimulationConfig,
    ) -> Result<Simulator, AdvisorError> {
        if config.iterations == 0 {
            return Err(AdvisorError::ZeroIterations);
        }
        if board.len() > BOARD_CARDS {
            return Err(AdvisorError::TooManyBoardCards);
        }

        let mut known: Vec<Card> = Vec::with_capacity(2 + board.len());
        known.extend_from_slice(&hero);
        known.extend_from_slice(board);
        let known_mask = check_distinct(&known)?;

        if let Some(candidates) = &config.opponent_candidates {
            if candidates.is_empty() {
                return Err(AdvisorError::EmptyCandidateSet);
            }
            // every candidate must be playable against the known cards
            for combo in candidates {
                let combo_mask = check_distinct(&combo[..])?;
                if (combo_mask & known_mask) != 0 {
                    return Err(AdvisorError::DuplicateCard(combo[0].to_string()));
                }
            }
        }

        // 2 hero + 5 board + 2 opponent can never exhaust 52 cards, but the
        // invariant is cheap to state explicitly
        let cards_needed = BOARD_CARDS - board.len() + 2;
        if usize::from(CARD_COUNT) - known.len() < cards_needed {
            return Err(AdvisorError::InsufficientDeck);
        }

        Ok(Simulator {
            hero,
            fixed_board: board.to_vec(),
            known_mask,
            candidates: config.opponent_candidates.clone(),
            results: RwLock::new(Results::default()),
        })
    }

    fn run_monte_carlo(&self, rng: &mut SmallRng, quota: u64, token: &CancelToken) {
        let mut batch = ResultsBatch::default();
        let card_dist: Uniform<u8> = Uniform::from(0..CARD_COUNT);

        for i in 0..quota {
            if (i & BATCH_MASK) == 0 {
                if token.is_cancelled() {
                    return;
                }
                self.flush(&mut batch);
            }

            let mut used_mask = self.known_mask;

            // fix the opponent hand first, then complete the board around it
            let villain: [Card; 2] = match &self.candidates {
                Some(candidates) => {
                    let combo = candidates[rng.gen_range(0, candidates.len())];
                    used_mask |= combo[0].mask() | combo[1].mask();
                    combo
                }
                None => [
                    draw_unseen(rng, &mut used_mask, &card_dist),
                    draw_unseen(rng, &mut used_mask, &card_dist),
                ],
            };

            let mut board = [self.hero[0]; BOARD_CARDS];
            board[..self.fixed_board.len()].copy_from_slice(&self.fixed_board);
            for slot in self.fixed_board.len()..BOARD_CARDS {
                board[slot] = draw_unseen(rng, &mut used_mask, &card_dist);
            }

            let hero_value = evaluate_seven(&[
                self.hero[0],
                self.hero[1],
                board[0],
                board[1],
                board[2],
                board[3],
                board[4],
            ]);
            let villain_value = evaluate_seven(&[
                villain[0],
                villain[1],
                board[0],
                board[1],
                board[2],
                board[3],
                board[4],
            ]);

            if hero_value > villain_value {
                batch.wins += 1;
            } else if hero_value < villain_value {
                batch.losses += 1;
            } else {
                batch.ties += 1;
            }
        }

        if !token.is_cancelled() {
            self.flush(&mut batch);
        }
    }

    fn flush(&self, batch: &mut ResultsBatch) {
        if batch.wins == 0 && batch.ties == 0 && batch.losses == 0 {
            return;
        }
        let mut results = self.results.write().unwrap();
        results.wins += batch.wins;
        results.ties += batch.ties;
        results.losses += batch.losses;
        *batch = ResultsBatch::default();
    }
}

/// Rejection-sample one card outside `used_mask` and mark it used
fn draw_unseen<R: Rng>(rng: &mut R, used_mask: &mut u64, card_dist: &Uniform<u8>) -> Card {
    loop {
        let card = FULL_DECK[usize::from(card_dist.sample(rng))];
        if (*used_mask & card.mask()) == 0 {
            *used_mask |= card.mask();
            return card;
        }
    }
}
