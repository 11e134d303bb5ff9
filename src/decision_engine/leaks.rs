use super::scoring::{EQUITY_MARGIN, MEDIUM_EQUITY, STANDARD_SIZING_MIN, STRONG_EQUITY, WEAK_EQUITY};
use super::{Action, ActionRecommendation, AnalysisInput, HandMetrics, LeakFinding, Position, Severity};

/// SPR below which the stack is committed
const SHORT_STACK_SPR: f64 = 2.0;

/// Inputs shared by every leak rule
pub(crate) struct LeakContext<'a> {
    pub metrics: &'a HandMetrics,
    pub input: &'a AnalysisInput,
    pub top: &'a ActionRecommendation,
}

type LeakRule = fn(&LeakContext) -> Option<LeakFinding>;

/// Rules run in order after scoring; they never alter scores
const LEAK_RULES: &[LeakRule] = &[
    overcalling,
    under_betting_strong_hand,
    loose_out_of_position,
    short_stack_weak_call,
];

pub(crate) fn detect_leaks(ctx: &LeakContext) -> Vec<LeakFinding> {
    LEAK_RULES.iter().filter_map(|rule| rule(ctx)).collect()
}

fn overcalling(ctx: &LeakContext) -> Option<LeakFinding> {
    if ctx.metrics.equity + EQUITY_MARGIN < ctx.metrics.required_equity
        && ctx.top.action == Action::Call
    {
        return Some(LeakFinding {
            issue: "calling well below the required equity".to_string(),
            fix: "fold unless the price or your read improves".to_string(),
            severity: Severity::High,
        });
    }
    None
}

fn under_betting_strong_hand(ctx: &LeakContext) -> Option<LeakFinding> {
    if ctx.metrics.equity <= STRONG_EQUITY {
        return None;
    }
    match (ctx.top.action, ctx.top.size) {
        (Action::Bet, Some(size)) | (Action::Raise, Some(size)) if size < STANDARD_SIZING_MIN => {
            Some(LeakFinding {
                issue: "betting too small with a strong hand".to_string(),
                fix: format!(
                    "size up to at least {:.0}% of pot to build the pot",
                    STANDARD_SIZING_MIN * 100.0
                ),
                severity: Severity::Medium,
            })
        }
        _ => None,
    }
}

fn loose_out_of_position(ctx: &LeakContext) -> Option<LeakFinding> {
    if ctx.input.position == Position::Early
        && ctx.metrics.equity < WEAK_EQUITY
        && ctx.top.action != Action::Fold
    {
        return Some(LeakFinding {
            issue: "continuing with a weak hand from early position".to_string(),
            fix: "tighten up out of position; fold weak holdings".to_string(),
            severity: Severity::Medium,
        });
    }
    None
}

fn short_stack_weak_call(ctx: &LeakContext) -> Option<LeakFinding> {
    if ctx.metrics.spr < SHORT_STACK_SPR
        && ctx.top.action == Action::Call
        && ctx.metrics.equity < MEDIUM_EQUITY
    {
        return Some(LeakFinding {
            issue: "calling off a short stack with a weak hand".to_string(),
            fix: "commit only with a hand that beats half the range, or fold".to_string(),
            severity: Severity::High,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision_engine::{OpponentProfile, Street};
    use std::collections::BTreeMap;

    fn base_input() -> AnalysisInput {
        AnalysisInput {
            hero: ["As".parse().unwrap(), "Kd".parse().unwrap()],
            board: vec![],
            pot: 30.0,
            to_call: 10.0,
            hero_stack: 100.0,
            villain_stack: 100.0,
            street: Street::Flop,
            position: Position::Late,
            profile: OpponentProfile::Unknown,
            fold_equity: 0.3,
            bet_sizings: vec![0.5],
            iterations: 1000,
            opponent_candidates: None,
        }
    }

    fn base_metrics(equity: f64, required: f64, spr: f64) -> HandMetrics {
        HandMetrics {
            equity,
            pot_odds: required,
            required_equity: required,
            spr,
            ev: BTreeMap::new(),
        }
    }

    fn top(action: Action, size: Option<f64>) -> ActionRecommendation {
        ActionRecommendation {
            action,
            size,
            score: 0.8,
            rationale: vec![],
        }
    }

    #[test]
    fn test_overcalling_flagged_high() {
        let input = base_input();
        let metrics = base_metrics(0.15, 0.30, 5.0);
        let top = top(Action::Call, None);
        let leaks = detect_leaks(&LeakContext {
            metrics: &metrics,
            input: &input,
            top: &top,
        });
        assert_eq!(leaks.len(), 1);
        assert_eq!(leaks[0].severity, Severity::High);
        assert!(leaks[0].issue.contains("calling"));
    }

    #[test]
    fn test_no_overcall_when_folding() {
        let input = base_input();
        let metrics = base_metrics(0.15, 0.30, 5.0);
        let top = top(Action::Fold, None);
        let leaks = detect_leaks(&LeakContext {
            metrics: &metrics,
            input: &input,
            top: &top,
        });
        assert!(leaks.is_empty());
    }

    #[test]
    fn test_under_betting_strong_hand() {
        let input = base_input();
        let metrics = base_metrics(0.8, 0.25, 5.0);
        let top = top(Action::Bet, Some(0.25));
        let leaks = detect_leaks(&LeakContext {
            metrics: &metrics,
            input: &input,
            top: &top,
        });
        assert_eq!(leaks.len(), 1);
        assert_eq!(leaks[0].severity, Severity::Medium);
        // standard sizing draws no finding
        let top = top_fn_ok(&input, &metrics);
        assert!(top.is_empty());
    }

    fn top_fn_ok(input: &AnalysisInput, metrics: &HandMetrics) -> Vec<LeakFinding> {
        let top = top(Action::Bet, Some(0.75));
        detect_leaks(&LeakContext {
            metrics,
            input,
            top: &top,
        })
    }

    #[test]
    fn test_loose_out_of_position() {
        let mut input = base_input();
        input.position = Position::Early;
        let metrics = base_metrics(0.3, 0.25, 5.0);
        let top = top(Action::Call, None);
        let leaks = detect_leaks(&LeakContext {
            metrics: &metrics,
            input: &input,
            top: &top,
        });
        assert_eq!(leaks.len(), 1);
        assert_eq!(leaks[0].severity, Severity::Medium);
    }

    #[test]
    fn test_short_stack_weak_call() {
        let input = base_input();
        let metrics = base_metrics(0.35, 0.30, 1.5);
        let top = top(Action::Call, None);
        let leaks = detect_leaks(&LeakContext {
            metrics: &metrics,
            input: &input,
            top: &top,
        });
        assert_eq!(leaks.len(), 1);
        assert_eq!(leaks[0].severity, Severity::High);
    }

    #[test]
    fn test_rules_are_independent() {
        // early position, short stack, bad call: multiple findings at once
        let mut input = base_input();
        input.position = Position::Early;
        let metrics = base_metrics(0.15, 0.30, 1.0);
        let top = top(Action::Call, None);
        let leaks = detect_leaks(&LeakContext {
            metrics: &metrics,
            input: &input,
            top: &top,
        });
        assert_eq!(leaks.len(), 3);
    }
}
