use super::{Confidence, OpponentProfile, Street};

/// Points awarded for equity extremity, scaled by distance from a coin flip
const EXTREMITY_WEIGHT: f64 = 40.0;
/// Points per street, later streets leave less unknown
const FLOP_POINTS: f64 = 5.0;
const TURN_POINTS: f64 = 10.0;
const RIVER_POINTS: f64 = 15.0;
/// SPR outside this band simplifies the decision
const SPR_LOW: f64 = 2.0;
const SPR_HIGH: f64 = 20.0;
const SPR_POINTS: f64 = 10.0;
/// Small credit for a predictable opponent profile
const PREDICTABLE_POINTS: f64 = 5.0;

const HIGH_THRESHOLD: f64 = 40.0;
const MEDIUM_THRESHOLD: f64 = 20.0;

fn street_points(street: Street) -> f64 {
    match street {
        Street::Preflop => 0.0,
        Street::Flop => FLOP_POINTS,
        Street::Turn => TURN_POINTS,
        Street::River => RIVER_POINTS,
    }
}

/// Map weighted evidence to a LOW/MEDIUM/HIGH label
pub(crate) fn confidence_label(
    equity: f64,
    street: Street,
    spr: f64,
    profile: OpponentProfile,
) -> Confidence {
    let mut points = (equity - 0.5).abs() * 2.0 * EXTREMITY_WEIGHT;
    points += street_points(street);
    if spr < SPR_LOW || spr > SPR_HIGH {
        points += SPR_POINTS;
    }
    if profile.is_predictable() {
        points += PREDICTABLE_POINTS;
    }

    if points >= HIGH_THRESHOLD {
        Confidence::High
    } else if points >= MEDIUM_THRESHOLD {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
