use serde::{Deserialize, Serialize};

/// The ten hand categories in ascending strength
///
/// A royal flush is the ace-high straight flush promoted to its own
/// category; it relates to lesser straight flushes exactly as
/// "same shape, higher top card"
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

/// Value of a 5 card hand
///
/// `tiebreakers` holds rank comparison values, most significant first,
/// zero padded to length 5.  The derived ordering compares category first,
/// then tiebreakers element-wise, which gives the required total order:
/// any two hand values are `<`, `>` or `==`, never incomparable
///
/// # Example
/// ```
/// use poker_advisor::hand_evaluator::{HandCategory, HandValue};
/// let aces = HandValue::new(HandCategory::OnePair, &[14, 13, 12, 11]);
/// let kings = HandValue::new(HandCategory::OnePair, &[13, 14, 12, 11]);
/// assert!(aces > kings);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HandValue {
    pub category: HandCategory,
    pub tiebreakers: [u8; 5],
}

impl HandValue {
    /// Build a hand value, zero padding the tiebreaker vector
    ///
    /// Panics if more than 5 tiebreakers are supplied; call sites are all
    /// internal to the evaluator and pass at most 5
    pub fn new(category: HandCategory, tiebreakers: &[u8]) -> HandValue {
        let mut padded = [0u8; 5];
        padded[..tiebreakers.len()].copy_from_slice(tiebreakers);
        HandValue {
            category,
            tiebreakers: padded,
        }
    }
}
