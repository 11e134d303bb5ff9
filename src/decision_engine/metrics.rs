/*
 * Pot economics, pure functions of the numeric inputs
 *
 * The bet EV formula keeps the single `pot + 2 * size * pot` growth term
 * of the original model; it is a documented approximation of pot growth,
 * not a multi-street solver
 */

/// Cost to call relative to the resulting pot, `call / (pot + call)`
///
/// A zero call size costs nothing, so the odds are 0
pub fn pot_odds(call_size: f64, pot_size: f64) -> f64 {
    if call_size <= 0.0 {
        return 0.0;
    }
    call_size / (pot_size + call_size)
}

/// Equity needed for a break-even call, equal to the pot odds
pub fn required_equity(call_size: f64, pot_size: f64) -> f64 {
    pot_odds(call_size, pot_size)
}

/// Effective stack divided by pot
///
/// Documented edge case: a zero (or negative) pot reports +infinity
/// rather than NaN; `analyze` rejects non-positive pots before ever
/// calling this
pub fn stack_to_pot_ratio(stack_size: f64, pot_size: f64) -> f64 {
    if pot_size <= 0.0 {
        return f64::INFINITY;
    }
    stack_size / pot_size
}

/// Expected value of calling `call_size` into `pot_size` with `equity`
pub fn ev_call(equity: f64, pot_size: f64, call_size: f64) -> f64 {
    equity * (pot_size + call_size) - call_size
}

/// Expected value of betting `size` (fraction of pot)
///
/// Opponent folds with probability `fold_equity`; otherwise the pot grows
/// by both bets and the hand realizes `equity`
pub fn ev_bet(equity: f64, pot_size: f64, size: f64, fold_equity: f64) -> f64 {
    let bet = size * pot_size;
    fold_equity * pot_size + (1.0 - fold_equity) * (equity * (pot_size + 2.0 * bet) - bet)
}
