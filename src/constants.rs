/// Number of cards in standard deck
pub const CARD_COUNT: u8 = 52;

/// Number of ranks in a standard deck
/// (2 -> A)
pub const RANK_COUNT: u8 = 13;

/// Number of suits in a standard deck
pub const SUIT_COUNT: u8 = 4;

/// Number of cards on a complete board
pub const BOARD_CARDS: usize = 5;

/// Comparison value of the lowest rank (deuce)
pub const RANK_VALUE_MIN: u8 = 2;

/// Comparison value of the highest rank (ace)
pub const RANK_VALUE_MAX: u8 = 14;

/// u8 rank to char table, index 0 = deuce
pub const RANK_TO_CHAR: &[char; 13] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// u8 suit to char table
pub static SUIT_TO_CHAR: &[char; 4] = &['s', 'h', 'd', 'c'];
