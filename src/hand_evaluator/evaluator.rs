use super::hand_value::{HandCategory, HandValue};
use crate::card::{check_distinct, Card};
use crate::error::AdvisorError;

/// The 6 ways to pick 5 cards out of 6
const FIVE_OF_SIX: [[usize; 5]; 6] = [
    [1, 2, 3, 4, 5],
    [0, 2, 3, 4, 5],
    [0, 1, 3, 4, 5],
    [0, 1, 2, 4, 5],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 3, 4],
];

/// The 21 ways to pick 5 cards out of 7
const FIVE_OF_SEVEN: [[usize; 5]; 21] = [
    [2, 3, 4, 5, 6],
    [1, 3, 4, 5, 6],
    [1, 2, 4, 5, 6],
    [1, 2, 3, 5, 6],
    [1, 2, 3, 4, 6],
    [1, 2, 3, 4, 5],
    [0, 3, 4, 5, 6],
    [0, 2, 4, 5, 6],
    [0, 2, 3, 5, 6],
    [0, 2, 3, 4, 6],
    [0, 2, 3, 4, 5],
    [0, 1, 4, 5, 6],
    [0, 1, 3, 5, 6],
    [0, 1, 3, 4, 6],
    [0, 1, 3, 4, 5],
    [0, 1, 2, 5, 6],
    [0, 1, 2, 4, 6],
    [0, 1, 2, 4, 5],
    [0, 1, 2, 3, 6],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 3, 4],
];

/// Evaluate 5, 6 or 7 cards into the best achievable 5 card hand value
///
/// Every 5 card subset is classified independently and the maximum under
/// the [`HandValue`] total order is returned
///
/// # Example
/// ```
/// use poker_advisor::card::Card;
/// use poker_advisor::hand_evaluator::{evaluate, HandCategory};
/// let cards: Vec<Card> = ["As", "Ks", "Qs", "Js", "Ts"]
///     .iter().map(|s| s.parse().unwrap()).collect();
/// assert_eq!(evaluate(&cards).unwrap().category, HandCategory::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandValue, AdvisorError> {
    check_distinct(cards)?;
    match cards.len() {
        5 => Ok(classify_five([cards[0], cards[1], cards[2], cards[3], cards[4]])),
        6 => Ok(best_subset(cards, &FIVE_OF_SIX)),
        7 => Ok(best_subset(cards, &FIVE_OF_SEVEN)),
        n => Err(AdvisorError::InvalidCardCount(n)),
    }
}

/// Evaluate exactly 7 cards already known to be distinct
///
/// Simulation hot path, skips the per-call duplicate scan
pub(crate) fn evaluate_seven(cards: &[Card; 7]) -> HandValue {
    best_subset(cards, &FIVE_OF_SEVEN)
}

fn best_subset(cards: &[Card], combos: &[[usize; 5]]) -> HandValue {
    combos
        .iter()
        .map(|idx| {
            classify_five([
                cards[idx[0]],
                cards[idx[1]],
                cards[idx[2]],
                cards[idx[3]],
                cards[idx[4]],
            ])
        })
        .max()
        .unwrap()
}

/// High card of a straight among the given distinct descending ranks,
/// counting the wheel A-2-3-4-5 as 5 high
fn straight_high_card(ranks_desc: &[u8; 5]) -> Option<u8> {
    // duplicates rule out a straight
    for w in ranks_desc.windows(2) {
        if w[0] == w[1] {
            return None;
        }
    }
    if ranks_desc[0] - ranks_desc[4] == 4 {
        return Some(ranks_desc[0]);
    }
    if *ranks_desc == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

/// Classify exactly 5 cards, checked from straight flush down to high card
fn classify_five(cards: [Card; 5]) -> HandValue {
    let mut ranks = [0u8; 5];
    for (i, c) in cards.iter().enumerate() {
        ranks[i] = c.rank_value();
    }
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = straight_high_card(&ranks);

    if flush {
        match straight {
            Some(14) => return HandValue::new(HandCategory::RoyalFlush, &[14]),
            Some(high) => return HandValue::new(HandCategory::StraightFlush, &[high]),
            None => {}
        }
    }

    // group ranks by multiplicity, (count, rank) sorted descending,
    // so kickers come out in the right order for every category below
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &r in &ranks {
        match groups.iter_mut().find(|(_, rank)| *rank == r) {
            Some(g) => g.0 += 1,
            None => groups.push((1, r)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    if groups[0].0 == 4 {
        return HandValue::new(HandCategory::FourOfAKind, &[groups[0].1, groups[1].1]);
    }
    if groups[0].0 == 3 && groups[1].0 == 2 {
        return HandValue::new(HandCategory::FullHouse, &[groups[0].1, groups[1].1]);
    }
    if flush {
        return HandValue::new(HandCategory::Flush, &ranks);
    }
    if let Some(high) = straight {
        return HandValue::new(HandCategory::Straight, &[high]);
    }
    if groups[0].0 == 3 {
        return HandValue::new(
            HandCategory::ThreeOfAKind,
            &[groups[0].1, groups[1].1, groups[2].1],
        );
    }
    if groups[0].0 == 2 && groups[1].0 == 2 {
        return HandValue::new(
            HandCategory::TwoPair,
            &[groups[0].1, groups[1].1, groups[2].1],
        );
    }
    if groups[0].0 == 2 {
        return HandValue::new(
            HandCategory::OnePair,
            &[groups[0].1, groups[1].1, groups[2].1, groups[3].1],
        );
    }
    HandValue::new(HandCategory::HighCard, &ranks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(strs: &[&str]) -> Vec<Card> {
        strs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn eval(strs: &[&str]) -> HandValue {
        evaluate(&hand(strs)).unwrap()
    }

    #[test]
    fn test_royal_flush() {
        let v = eval(&["As", "Ks", "Qs", "Js", "Ts"]);
        assert_eq!(v.category, HandCategory::RoyalFlush);
        assert_eq!(v.tiebreakers, [14, 0, 0, 0, 0]);
    }

    #[test]
    fn test_straight_flush_top_card() {
        let nine_high = eval(&["9h", "8h", "7h", "6h", "5h"]);
        let king_high = eval(&["Kd", "Qd", "Jd", "Td", "9d"]);
        assert_eq!(nine_high.category, HandCategory::StraightFlush);
        assert_eq!(king_high.category, HandCategory::StraightFlush);
        assert!(king_high > nine_high);
        assert!(eval(&["As", "Ks", "Qs", "Js", "Ts"]) > king_high);
    }

    #[test]
    fn test_wheel_straight_flush() {
        let v = eval(&["Ah", "2h", "3h", "4h", "5h"]);
        assert_eq!(v.category, HandCategory::StraightFlush);
        assert_eq!(v.tiebreakers, [5, 0, 0, 0, 0]);
    }

    #[test]
    fn test_four_of_a_kind() {
        let v = eval(&["7s", "7h", "7d", "7c", "Kd"]);
        assert_eq!(v.category, HandCategory::FourOfAKind);
        assert_eq!(v.tiebreakers, [7, 13, 0, 0, 0]);
    }

    #[test]
    fn test_full_house() {
        let v = eval(&["7s", "7h", "7d", "Kc", "Kd"]);
        assert_eq!(v.category, HandCategory::FullHouse);
        assert_eq!(v.tiebreakers, [7, 13, 0, 0, 0]);
        // triple rank dominates the pair rank
        let bigger = eval(&["8s", "8h", "8d", "2c", "2d"]);
        assert!(bigger > v);
    }

    #[test]
    fn test_flush_ranks_descending() {
        let v = eval(&["Kc", "Jc", "8c", "5c", "2c"]);
        assert_eq!(v.category, HandCategory::Flush);
        assert_eq!(v.tiebreakers, [13, 11, 8, 5, 2]);
    }

    #[test]
    fn test_wheel_straight_is_five_high() {
        let wheel = eval(&["Ah", "2s", "3d", "4c", "5h"]);
        assert_eq!(wheel.category, HandCategory::Straight);
        assert_eq!(wheel.tiebreakers, [5, 0, 0, 0, 0]);
        let six_high = eval(&["2h", "3s", "4d", "5c", "6h"]);
        assert!(six_high > wheel);
    }

    #[test]
    fn test_ace_high_straight_not_wrapping() {
        // K-A-2-3-4 is no straight
        let v = eval(&["Kh", "As", "2d", "3c", "4h"]);
        assert_eq!(v.category, HandCategory::HighCard);
    }

    #[test]
    fn test_three_of_a_kind_kickers() {
        let v = eval(&["9s", "9h", "9d", "Ac", "2d"]);
        assert_eq!(v.category, HandCategory::ThreeOfAKind);
        assert_eq!(v.tiebreakers, [9, 14, 2, 0, 0]);
    }

    #[test]
    fn test_two_pair_ordering() {
        let v = eval(&["Ts", "Th", "4d", "4c", "Ad"]);
        assert_eq!(v.category, HandCategory::TwoPair);
        assert_eq!(v.tiebreakers, [10, 4, 14, 0, 0]);
    }

    #[test]
    fn test_one_pair_kickers_descending() {
        let v = eval(&["6s", "6h", "Ad", "Jc", "3d"]);
        assert_eq!(v.category, HandCategory::OnePair);
        assert_eq!(v.tiebreakers, [6, 14, 11, 3, 0]);
    }

    #[test]
    fn test_high_card() {
        let v = eval(&["As", "Jh", "9d", "6c", "2d"]);
        assert_eq!(v.category, HandCategory::HighCard);
        assert_eq!(v.tiebreakers, [14, 11, 9, 6, 2]);
    }

    #[test]
    fn test_category_ladder() {
        let fixtures = [
            eval(&["As", "Jh", "9d", "6c", "2d"]),  // high card
            eval(&["6s", "6h", "Ad", "Jc", "3d"]),  // one pair
            eval(&["Ts", "Th", "4d", "4c", "Ad"]),  // two pair
            eval(&["9s", "9h", "9d", "Ac", "2d"]),  // trips
            eval(&["2h", "3s", "4d", "5c", "6h"]),  // straight
            eval(&["Kc", "Jc", "8c", "5c", "2c"]),  // flush
            eval(&["7s", "7h", "7d", "Kc", "Kd"]),  // full house
            eval(&["7s", "7h", "7d", "7c", "Kd"]),  // quads
            eval(&["9h", "8h", "7h", "6h", "5h"]),  // straight flush
            eval(&["As", "Ks", "Qs", "Js", "Ts"]),  // royal
        ];
        for w in fixtures.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn test_six_card_picks_best() {
        // pair of aces plus a flush within six cards
        let v = eval(&["Ah", "Ad", "Kh", "9h", "5h", "2h"]);
        assert_eq!(v.category, HandCategory::Flush);
        assert_eq!(v.tiebreakers, [14, 13, 9, 5, 2]);
    }

    #[test]
    fn test_seven_card_picks_best() {
        // board makes a straight that beats the pocket pair
        let v = eval(&["8s", "8h", "4d", "5c", "6h", "7d", "8c"]);
        assert_eq!(v.category, HandCategory::Straight);
        assert_eq!(v.tiebreakers, [8, 0, 0, 0, 0]);
    }

    #[test]
    fn test_seven_card_full_house_over_trips() {
        let v = eval(&["Qs", "Qh", "Qd", "7c", "7h", "2d", "3c"]);
        assert_eq!(v.category, HandCategory::FullHouse);
        assert_eq!(v.tiebreakers, [12, 7, 0, 0, 0]);
    }

    #[test]
    fn test_invalid_card_count() {
        assert_eq!(
            evaluate(&hand(&["As", "Ks"])),
            Err(AdvisorError::InvalidCardCount(2))
        );
        assert_eq!(
            evaluate(&hand(&["As", "Ks", "Qs", "Js", "Ts", "9s", "8s", "7s"])),
            Err(AdvisorError::InvalidCardCount(8))
        );
        assert!(evaluate(&[]).is_err());
    }

    #[test]
    fn test_duplicate_cards_rejected() {
        assert_eq!(
            evaluate(&hand(&["As", "As", "Qs", "Js", "Ts"])),
            Err(AdvisorError::DuplicateCard("As".to_string()))
        );
    }

    #[test]
    fn test_total_order_transitive_and_trichotomous() {
        let a = eval(&["Kc", "Jc", "8c", "5c", "2c"]);
        let b = eval(&["2h", "3s", "4d", "5c", "6h"]);
        let c = eval(&["Ts", "Th", "4d", "4c", "Ad"]);
        assert!(a >= b && b >= c && a >= c);
        for (x, y) in [(a, b), (b, c), (a, c)].iter() {
            let gt = x > y;
            let lt = x < y;
            let eq = x == y;
            assert_eq!(
                [gt, lt, eq].iter().filter(|f| **f).count(),
                1,
                "exactly one of >, <, == must hold"
            );
        }
        // equal hands across suits tie
        let d = eval(&["Kd", "Jd", "8d", "5d", "2d"]);
        assert_eq!(a, d);
    }

    #[test]
    fn test_evaluate_never_fails_on_well_formed_input() {
        use crate::deck::FULL_DECK;
        // sliding windows over the deck exercise many rank/suit mixes
        for start in 0..48 {
            let cards = &FULL_DECK[start..start + 5];
            let v = evaluate(cards).unwrap();
            assert!(v.category >= HandCategory::HighCard);
            assert!(v.category <= HandCategory::RoyalFlush);
        }
    }
}
