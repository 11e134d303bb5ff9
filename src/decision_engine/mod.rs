pub mod metrics;
pub mod texture;

mod confidence;
mod leaks;
mod scoring;

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::{check_distinct, Card};
use crate::constants::BOARD_CARDS;
use crate::equity_calculator::{evaluate_equity, SimulationConfig};
use crate::error::AdvisorError;

use self::confidence::confidence_label;
use self::leaks::{detect_leaks, LeakContext};
use self::metrics::{ev_bet, ev_call, pot_odds, required_equity, stack_to_pot_ratio};
use self::scoring::generate_recommendations;
use self::texture::{classify_board, BoardTexture};

/// Betting round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

/// Hero seat, coarse-grained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Early,
    Middle,
    Late,
    Blinds,
}

/// Behavioral read on the opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentProfile {
    Tight,
    Loose,
    Aggressive,
    Passive,
    Unknown,
}

impl OpponentProfile {
    /// Tight and passive players telegraph their ranges
    pub fn is_predictable(self) -> bool {
        matches!(self, OpponentProfile::Tight | OpponentProfile::Passive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

/// One scored candidate action with its supporting facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecommendation {
    pub action: Action,
    /// Bet or raise size as a fraction of pot
    pub size: Option<f64>,
    /// In [0, 1], higher is better
    pub score: f64,
    pub rationale: Vec<String>,
}

/// Pot economics derived for one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandMetrics {
    pub equity: f64,
    pub pot_odds: f64,
    pub required_equity: f64,
    pub spr: f64,
    /// Action label to expected value in pot-relative stake units
    pub ev: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Advisory finding, never affects the recommendation scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakFinding {
    pub issue: String,
    pub fix: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Everything `analyze` needs; plain values, no transport framing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub hero: [Card; 2],
    /// 0 to 5 known board cards
    pub board: Vec<Card>,
    pub pot: f64,
    /// Amount to call; 0 when not facing a bet
    pub to_call: f64,
    pub hero_stack: f64,
    pub villain_stack: f64,
    pub street: Street,
    pub position: Position,
    pub profile: OpponentProfile,
    /// Estimated probability the opponent folds to a bet, in [0, 1]
    pub fold_equity: f64,
    /// Bet sizings to evaluate, fractions of pot in (0, 2]
    pub bet_sizings: Vec<f64>,
    /// Monte-Carlo iterations for the equity estimate
    pub iterations: u64,
    /// Restrict the opponent to these hands instead of random ones
    pub opponent_candidates: Option<Vec<[Card; 2]>>,
}

impl AnalysisInput {
    /// Effective stack for SPR, the shorter of the two
    pub fn effective_stack(&self) -> f64 {
        self.hero_stack.min(self.villain_stack)
    }

    fn validate(&self) -> Result<(), AdvisorError> {
        if self.pot <= 0.0 {
            return Err(AdvisorError::NonPositivePot);
        }
        if self.fold_equity < 0.0 || self.fold_equity > 1.0 {
            return Err(AdvisorError::InvalidFoldEquity(self.fold_equity));
        }
        for &s in &self.bet_sizings {
            if s <= 0.0 || s > 2.0 {
                return Err(AdvisorError::InvalidSizing(s));
            }
        }
        if self.board.len() > BOARD_CARDS {
            return Err(AdvisorError::TooManyBoardCards);
        }
        let mut known: Vec<Card> = self.hero.to_vec();
        known.extend_from_slice(&self.board);
        check_distinct(&known)?;
        Ok(())
    }
}

/// Complete analysis: ranked actions, metrics, reads, confidence, leaks
///
/// Owned by the caller; the engine keeps nothing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sorted descending by score; the first entry is the primary play
    pub recommendations: Vec<ActionRecommendation>,
    pub metrics: HandMetrics,
    pub hero_range: String,
    pub villain_range: String,
    pub confidence: Confidence,
    pub leaks: Vec<LeakFinding>,
}

/// Run the full pipeline: equity simulation, then the decision engine
///
/// The random source drives the simulation only; a seeded rng makes the
/// whole analysis reproducible
pub fn analyze<R: Rng>(input: &AnalysisInput, rng: &mut R) -> Result<AnalysisResult, AdvisorError> {
    input.validate()?;
    let config = SimulationConfig {
        iterations: input.iterations,
        opponent_candidates: input.opponent_candidates.clone(),
        ..SimulationConfig::default()
    };
    let sim = evaluate_equity(input.hero, &input.board, &config, rng)?;
    Ok(analyze_with_equity(input, sim.equity()))
}

/// Decision engine proper: consumes an equity number, never touches cards
/// beyond the board texture
pub fn analyze_with_equity(input: &AnalysisInput, equity: f64) -> AnalysisResult {
    let texture = classify_board(&input.board);
    let metrics = compute_metrics(input, equity);
    let recommendations = generate_recommendations(input, &metrics, &texture);

    let leaks = detect_leaks(&LeakContext {
        metrics: &metrics,
        input,
        top: &recommendations[0],
    });
    let confidence = confidence_label(equity, input.street, metrics.spr, input.profile);
    let hero_range = hero_range_strength(equity);
    let villain_range = villain_range_strength(input.profile, &texture);

    AnalysisResult {
        recommendations,
        metrics,
        hero_range,
        villain_range,
        confidence,
        leaks,
    }
}

fn compute_metrics(input: &AnalysisInput, equity: f64) -> HandMetrics {
    let mut ev = BTreeMap::new();
    ev.insert("fold".to_string(), 0.0);
    if input.to_call > 0.0 {
        ev.insert(
            "call".to_string(),
            ev_call(equity, input.pot, input.to_call),
        );
    } else {
        ev.insert("check".to_string(), ev_call(equity, input.pot, 0.0));
    }
    let bet_label = if input.to_call > 0.0 { "raise" } else { "bet" };
    for &s in &input.bet_sizings {
        ev.insert(
            format!("{} {:.0}%", bet_label, s * 100.0),
            ev_bet(equity, input.pot, s, input.fold_equity),
        );
    }

    HandMetrics {
        equity,
        pot_odds: pot_odds(input.to_call, input.pot),
        required_equity: required_equity(input.to_call, input.pot),
        spr: stack_to_pot_ratio(input.effective_stack(), input.pot),
        ev,
    }
}

fn hero_range_strength(equity: f64) -> String {
    let label = if equity >= 0.75 {
        "very strong"
    } else if equity >= 0.6 {
        "strong"
    } else if equity >= 0.45 {
        "medium"
    } else if equity >= 0.3 {
        "weak"
    } else {
        "very weak"
    };
    format!("{} ({:.1}% equity)", label, equity * 100.0)
}

fn villain_range_strength(profile: OpponentProfile, texture: &BoardTexture) -> String {
    let base = match profile {
        OpponentProfile::Tight => "narrow and value heavy",
        OpponentProfile::Loose => "wide with many weak holdings",
        OpponentProfile::Aggressive => "wide and bluff heavy",
        OpponentProfile::Passive => "capped, rarely bluffing",
        OpponentProfile::Unknown => "assumed balanced",
    };
    if texture.draw_heavy {
        format!("{}, with live draws on this board", base)
    } else {
        base.to_string()
    }
}
