use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Rank value at or above which a card counts as high (ten)
const HIGH_CARD_RANK: u8 = 10;
/// Rank value at or below which a card gives the ace wheel-draw potential
const WHEEL_DRAW_RANK: u8 = 5;
const ACE_RANK: u8 = 14;
/// Maximum gap between neighbouring sorted ranks for a connected board
const CONNECTED_GAP: u8 = 2;
/// Board length at which a connected board counts as very wet on its own
const VERY_WET_BOARD_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dryness {
    Dry,
    Wet,
    VeryWet,
}

/// Read-only classification of the known board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardTexture {
    pub dryness: Dryness,
    pub paired: bool,
    pub monotone: bool,
    pub rainbow: bool,
    pub connected: bool,
    pub high_cards: usize,
    pub draw_heavy: bool,
}

/// Classify a board of 0 to 5 known cards
///
/// Monotone and rainbow both require at least 3 cards; an empty or
/// two-card board is always dry
pub fn classify_board(board: &[Card]) -> BoardTexture {
    let paired = is_paired(board);
    let monotone = board.len() >= 3 && board.iter().all(|c| c.suit() == board[0].suit());
    let rainbow = board.len() >= 3 && has_distinct_suits(board);
    let connected = is_connected(board);
    let high_cards = board
        .iter()
        .filter(|c| c.rank_value() >= HIGH_CARD_RANK)
        .count();

    let dryness = if connected && (monotone || board.len() >= VERY_WET_BOARD_LEN) {
        Dryness::VeryWet
    } else if connected || monotone {
        Dryness::Wet
    } else {
        Dryness::Dry
    };

    BoardTexture {
        dryness,
        paired,
        monotone,
        rainbow,
        connected,
        high_cards,
        draw_heavy: dryness != Dryness::Dry,
    }
}

fn is_paired(board: &[Card]) -> bool {
    for (i, a) in board.iter().enumerate() {
        for b in &board[i + 1..] {
            if a.rank_value() == b.rank_value() {
                return true;
            }
        }
    }
    false
}

fn has_distinct_suits(board: &[Card]) -> bool {
    let mut seen = [false; 4];
    for c in board {
        let s = usize::from(c.suit());
        if seen[s] {
            return false;
        }
        seen[s] = true;
    }
    true
}

fn is_connected(board: &[Card]) -> bool {
    if board.len() < 2 {
        return false;
    }
    let mut ranks: Vec<u8> = board.iter().map(|c| c.rank_value()).collect();
    ranks.sort_unstable();
    if ranks.windows(2).any(|w| w[1] - w[0] <= CONNECTED_GAP) {
        return true;
    }
    // an ace next to a wheel card plays as connected too
    ranks.contains(&ACE_RANK) && ranks.iter().any(|&r| r <= WHEEL_DRAW_RANK)
}
