use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::Card;
use crate::constants::CARD_COUNT;
use crate::error::AdvisorError;

lazy_static! {
    /// The 52 distinct cards of a standard deck, in index order
    pub static ref FULL_DECK: [Card; 52] = init_full_deck();
}

fn init_full_deck() -> [Card; 52] {
    let mut deck = [Card::from_index(0).unwrap(); 52];
    for i in 0..CARD_COUNT {
        deck[usize::from(i)] = Card::from_index(i).unwrap();
    }
    deck
}

/// Cards still available given a mask of known cards
///
/// Exclusion is by card value, see [`Card::mask`]
pub fn available_cards(exclusion_mask: u64) -> Vec<Card> {
    FULL_DECK
        .iter()
        .copied()
        .filter(|c| (c.mask() & exclusion_mask) == 0)
        .collect()
}

/// Draw `n` cards at random without replacement from `candidates`
///
/// Fails with `InsufficientDeck` when fewer than `n` candidates remain.
/// Partial Fisher-Yates, the input order of `candidates` does not matter
pub fn draw<R: Rng>(candidates: &[Card], n: usize, rng: &mut R) -> Result<Vec<Card>, AdvisorError> {
    if n > candidates.len() {
        return Err(AdvisorError::InsufficientDeck);
    }
    let mut pool = candidates.to_vec();
    let mut drawn = Vec::with_capacity(n);
    for i in 0..n {
        let j = rng.gen_range(i, pool.len());
        pool.swap(i, j);
        drawn.push(pool[i]);
    }
    Ok(drawn)
}

/// Shuffle cards in place with an unbiased permutation
pub fn shuffle<R: Rng>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}
