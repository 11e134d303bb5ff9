use super::metrics::{ev_bet, ev_call};
use super::texture::{BoardTexture, Dryness};
use super::{Action, ActionRecommendation, AnalysisInput, HandMetrics, Street};

/// Margin below required equity that separates a clear fold from a close one
pub(crate) const EQUITY_MARGIN: f64 = 0.10;
/// Equity above which a hand bets for value
pub(crate) const STRONG_EQUITY: f64 = 0.6;
/// Equity below which a bet is a bluff
pub(crate) const WEAK_EQUITY: f64 = 0.4;
/// Middle of the equity scale, used by dry-board and short-stack rules
pub(crate) const MEDIUM_EQUITY: f64 = 0.5;
/// Minimum fold equity for a bluff to contribute score
pub(crate) const FOLD_EQUITY_FLOOR: f64 = 0.3;
/// Standard sizing band, fractions of pot
pub(crate) const STANDARD_SIZING_MIN: f64 = 0.5;
pub(crate) const STANDARD_SIZING_MAX: f64 = 0.75;

const CLEAR_FOLD_SCORE: f64 = 0.9;
const CLOSE_FOLD_SCORE: f64 = 0.6;
const BAD_FOLD_SCORE: f64 = 0.1;
const POT_CONTROL_BONUS: f64 = 0.1;
const VALUE_BET_BASE: f64 = 0.5;
const VALUE_BET_SLOPE: f64 = 0.75;
const BLUFF_WEIGHT: f64 = 0.6;
const DRY_BOARD_BONUS: f64 = 0.15;
const SIZING_BONUS: f64 = 0.15;

fn clamp_unit(x: f64) -> f64 {
    x.max(0.0).min(1.0)
}

/// Folding scores high only when equity falls short of the price
pub(crate) fn fold_score(equity: f64, required: f64) -> f64 {
    if equity + EQUITY_MARGIN < required {
        CLEAR_FOLD_SCORE
    } else if equity < required {
        CLOSE_FOLD_SCORE
    } else {
        BAD_FOLD_SCORE
    }
}

/// Base continue score from the equity-to-price ratio
///
/// With nothing to call, continuing is free and scales with raw equity
pub(crate) fn call_base_score(equity: f64, required: f64) -> f64 {
    if required <= 0.0 {
        0.3 + equity * 0.5
    } else if equity >= required {
        (equity / required).min(2.0) / 2.0 * 0.8
    } else {
        0.2 * (equity / required)
    }
}

/// Pot control incentive on non-terminal streets
pub(crate) fn pot_control_bonus(street: Street) -> f64 {
    if street == Street::River {
        0.0
    } else {
        POT_CONTROL_BONUS
    }
}

/// Value betting contribution for strong hands
pub(crate) fn value_bet_bonus(equity: f64) -> f64 {
    if equity > STRONG_EQUITY {
        VALUE_BET_BASE + (equity - STRONG_EQUITY) * VALUE_BET_SLOPE
    } else {
        0.0
    }
}

/// Bluffing contribution for weak hands with enough fold equity
pub(crate) fn bluff_bonus(equity: f64, fold_equity: f64) -> f64 {
    if equity < WEAK_EQUITY && fold_equity > FOLD_EQUITY_FLOOR {
        fold_equity * BLUFF_WEIGHT
    } else {
        0.0
    }
}

/// Dry boards favour betting a hand with a real equity edge
pub(crate) fn dry_board_bonus(texture: &BoardTexture, equity: f64) -> f64 {
    if texture.dryness == Dryness::Dry && equity > MEDIUM_EQUITY {
        DRY_BOARD_BONUS
    } else {
        0.0
    }
}

/// Bonus for sizes inside the standard band
pub(crate) fn sizing_bonus(size: f64) -> f64 {
    if size >= STANDARD_SIZING_MIN && size <= STANDARD_SIZING_MAX {
        SIZING_BONUS
    } else {
        0.0
    }
}

/// Score one candidate per action, sorted descending; the first entry is
/// the primary recommendation
pub(crate) fn generate_recommendations(
    input: &AnalysisInput,
    metrics: &HandMetrics,
    texture: &BoardTexture,
) -> Vec<ActionRecommendation> {
    let equity = metrics.equity;
    let required = metrics.required_equity;
    let facing_bet = input.to_call > 0.0;
    let mut candidates = Vec::with_capacity(2 + input.bet_sizings.len());

    // fold
    let mut rationale = vec![format!(
        "equity {:.1}% against required {:.1}%",
        equity * 100.0,
        required * 100.0
    )];
    if equity >= required {
        rationale.push("folding forfeits a positive expectation call".to_string());
    }
    candidates.push(ActionRecommendation {
        action: Action::Fold,
        size: None,
        score: clamp_unit(fold_score(equity, required)),
        rationale,
    });

    // check or call
    let action = if facing_bet { Action::Call } else { Action::Check };
    let mut score = call_base_score(equity, required);
    let mut rationale = Vec::new();
    if facing_bet {
        rationale.push(format!(
            "pot odds {:.1}%, call EV {:+.2}",
            metrics.pot_odds * 100.0,
            ev_call(equity, input.pot, input.to_call)
        ));
    } else {
        rationale.push("checking keeps the pot small at no cost".to_string());
    }
    let bonus = pot_control_bonus(input.street);
    if bonus > 0.0 {
        score += bonus;
        rationale.push("pot control ahead of later streets".to_string());
    }
    candidates.push(ActionRecommendation {
        action,
        size: None,
        score: clamp_unit(score),
        rationale,
    });

    // one bet or raise per configured sizing
    let action = if facing_bet { Action::Raise } else { Action::Bet };
    for &size in &input.bet_sizings {
        let mut score = 0.0;
        let mut rationale = Vec::new();
        let value = value_bet_bonus(equity);
        if value > 0.0 {
            score += value;
            rationale.push(format!("value bet with {:.1}% equity", equity * 100.0));
        }
        let bluff = bluff_bonus(equity, input.fold_equity);
        if bluff > 0.0 {
            score += bluff;
            rationale.push(format!(
                "bluff leverages {:.0}% fold equity",
                input.fold_equity * 100.0
            ));
        }
        let dry = dry_board_bonus(texture, equity);
        if dry > 0.0 {
            score += dry;
            rationale.push("dry board favours the equity leader".to_string());
        }
        let sizing = sizing_bonus(size);
        if sizing > 0.0 {
            score += sizing;
            rationale.push(format!("{:.0}% pot is a standard sizing", size * 100.0));
        }
        rationale.push(format!(
            "bet EV {:+.2}",
            ev_bet(equity, input.pot, size, input.fold_equity)
        ));
        candidates.push(ActionRecommendation {
            action,
            size: Some(size),
            score: clamp_unit(score),
            rationale,
        });
    }

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision_engine::texture::classify_board;
    use crate::decision_engine::{OpponentProfile, Position};
    use std::collections::BTreeMap;

    fn input(equity_board: &[&str], pot: f64, to_call: f64, sizings: &[f64]) -> AnalysisInput {
        AnalysisInput {
            hero: ["As".parse().unwrap(), "Ah".parse().unwrap()],
            board: equity_board.iter().map(|s| s.parse().unwrap()).collect(),
            pot,
            to_call,
            hero_stack: 100.0,
            villain_stack: 100.0,
            street: Street::Flop,
            position: Position::Late,
            profile: OpponentProfile::Unknown,
            fold_equity: 0.35,
            bet_sizings: sizings.to_vec(),
            iterations: 1000,
            opponent_candidates: None,
        }
    }

    fn metrics(equity: f64, pot: f64, to_call: f64) -> HandMetrics {
        HandMetrics {
            equity,
            pot_odds: crate::decision_engine::metrics::pot_odds(to_call, pot),
            required_equity: crate::decision_engine::metrics::required_equity(to_call, pot),
            spr: 5.0,
            ev: BTreeMap::new(),
        }
    }

    #[test]
    fn test_fold_score_tiers() {
        assert_eq!(fold_score(0.10, 0.30), 0.9); // well below
        assert_eq!(fold_score(0.25, 0.30), 0.6); // slightly below
        assert_eq!(fold_score(0.40, 0.30), 0.1); // profitable call
    }

    #[test]
    fn test_call_base_score_scales_with_price() {
        assert!(call_base_score(0.6, 0.25) > call_base_score(0.3, 0.25));
        assert!(call_base_score(0.2, 0.25) < 0.2);
        // free check with decent equity is reasonable
        assert!(call_base_score(0.5, 0.0) > 0.5);
    }

    #[test]
    fn test_pot_control_only_before_river() {
        assert!(pot_control_bonus(Street::Flop) > 0.0);
        assert!(pot_control_bonus(Street::Turn) > 0.0);
        assert_eq!(pot_control_bonus(Street::River), 0.0);
    }

    #[test]
    fn test_value_bet_bonus_threshold() {
        assert_eq!(value_bet_bonus(0.55), 0.0);
        assert!(value_bet_bonus(0.65) > 0.0);
        assert!(value_bet_bonus(0.9) > value_bet_bonus(0.65));
    }

    #[test]
    fn test_bluff_bonus_needs_fold_equity() {
        assert!(bluff_bonus(0.3, 0.5) > 0.0);
        assert_eq!(bluff_bonus(0.3, 0.2), 0.0); // not enough fold equity
        assert_eq!(bluff_bonus(0.5, 0.5), 0.0); // too much equity to bluff
    }

    #[test]
    fn test_sizing_bonus_band() {
        assert!(sizing_bonus(0.5) > 0.0);
        assert!(sizing_bonus(0.75) > 0.0);
        assert_eq!(sizing_bonus(0.25), 0.0);
        assert_eq!(sizing_bonus(1.5), 0.0);
    }

    #[test]
    fn test_strong_hand_prefers_bet() {
        let inp = input(&["Kd", "7s", "2c"], 30.0, 0.0, &[0.5]);
        let m = metrics(0.85, 30.0, 0.0);
        let texture = classify_board(&inp.board);
        let recs = generate_recommendations(&inp, &m, &texture);
        assert_eq!(recs[0].action, Action::Bet);
        assert_eq!(recs[0].size, Some(0.5));
        assert!(!recs[0].rationale.is_empty());
    }

    #[test]
    fn test_weak_hand_facing_big_bet_folds() {
        let inp = input(&["Kd", "7s", "2c"], 30.0, 30.0, &[0.5]);
        // required equity 0.5, hand has 0.2
        let m = metrics(0.20, 30.0, 30.0);
        let texture = classify_board(&inp.board);
        let recs = generate_recommendations(&inp, &m, &texture);
        assert_eq!(recs[0].action, Action::Fold);
    }

    #[test]
    fn test_facing_bet_labels_call_and_raise() {
        let inp = input(&["Kd", "7s", "2c"], 30.0, 10.0, &[0.5, 0.75]);
        let m = metrics(0.55, 30.0, 10.0);
        let texture = classify_board(&inp.board);
        let recs = generate_recommendations(&inp, &m, &texture);
        assert!(recs.iter().any(|r| r.action == Action::Call));
        assert!(recs.iter().any(|r| r.action == Action::Raise));
        assert!(recs.iter().all(|r| r.action != Action::Check));
        assert!(recs.iter().all(|r| r.action != Action::Bet));
    }

    #[test]
    fn test_scores_sorted_and_clamped() {
        let inp = input(&["Kd", "7s", "2c"], 30.0, 10.0, &[0.25, 0.5, 0.75, 1.0]);
        let m = metrics(0.95, 30.0, 10.0);
        let texture = classify_board(&inp.board);
        let recs = generate_recommendations(&inp, &m, &texture);
        assert_eq!(recs.len(), 6);
        for r in &recs {
            assert!(r.score >= 0.0 && r.score <= 1.0);
        }
        for w in recs.windows(2) {
            assert!(w[0].score >= w[1].score);
        }
    }
}
