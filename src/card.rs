/*
 * Canonical card representation
 *
 * Cards are stored as a single index, 4 * (rank value - 2) + suit,
 * so the full deck spans indexes 0 -> 51
 */

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::*;
use crate::error::AdvisorError;

/// A single playing card
///
/// Equality is by (rank, suit) value.  Textual form is the two character
/// notation rank char followed by lowercase suit initial, e.g. `As`, `Td`
///
/// # Example
/// ```
/// use poker_advisor::card::Card;
/// let c: Card = "Ah".parse().unwrap();
/// assert_eq!(c.rank_value(), 14);
/// assert_eq!(c.to_string(), "Ah");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Create a card from rank comparison value (2 -> 14) and suit index (0 -> 3)
    pub fn new(rank_value: u8, suit: u8) -> Result<Card, AdvisorError> {
        if rank_value < RANK_VALUE_MIN || rank_value > RANK_VALUE_MAX || suit >= SUIT_COUNT {
            return Err(AdvisorError::ParseCard(format!(
                "rank {} suit {}",
                rank_value, suit
            )));
        }
        Ok(Card(4 * (rank_value - RANK_VALUE_MIN) + suit))
    }

    /// Create a card from its deck index (0 -> 51)
    pub fn from_index(index: u8) -> Result<Card, AdvisorError> {
        if index >= CARD_COUNT {
            return Err(AdvisorError::ParseCard(format!("index {}", index)));
        }
        Ok(Card(index))
    }

    /// Deck index, 0 -> 51
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Rank comparison value, 2 -> 14 (ace high)
    pub const fn rank_value(self) -> u8 {
        (self.0 >> 2) + RANK_VALUE_MIN
    }

    /// Suit index, 0 -> 3 in s, h, d, c order
    pub const fn suit(self) -> u8 {
        self.0 & 3
    }

    /// Single bit mask for exclusion sets
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            RANK_TO_CHAR[usize::from(self.0 >> 2)],
            SUIT_TO_CHAR[usize::from(self.0 & 3)]
        )
    }
}

impl FromStr for Card {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(AdvisorError::ParseCard(s.to_string()));
        }
        let rank = char_to_rank_value(chars[0]);
        let suit = char_to_suit(chars[1]);
        if rank == u8::MAX || suit == u8::MAX {
            return Err(AdvisorError::ParseCard(s.to_string()));
        }
        Card::new(rank, suit)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct CardVisitor;

impl<'de> Visitor<'de> for CardVisitor {
    type Value = Card;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a two character card string like `As`")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Card, E> {
        v.parse().map_err(|_| E::custom(format!("invalid card: {}", v)))
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Card, D::Error> {
        deserializer.deserialize_str(CardVisitor)
    }
}

/// Convert a rank char to its comparison value (2 -> 14)
///
/// Case insensitive, returns `u8::MAX` on invalid input
pub fn char_to_rank_value(c: char) -> u8 {
    match c.to_ascii_lowercase() {
        'a' => 14,
        'k' => 13,
        'q' => 12,
        'j' => 11,
        't' => 10,
        '9' => 9,
        '8' => 8,
        '7' => 7,
        '6' => 6,
        '5' => 5,
        '4' => 4,
        '3' => 3,
        '2' => 2,
        _ => u8::MAX,
    }
}

/// Convert a suit char to its index
///
/// Case insensitive, returns `u8::MAX` on invalid input
pub fn char_to_suit(c: char) -> u8 {
    match c.to_ascii_lowercase() {
        's' => 0,
        'h' => 1,
        'd' => 2,
        'c' => 3,
        _ => u8::MAX,
    }
}

/// Verify a card slice holds no duplicate values, returning the combined
/// exclusion mask
pub fn check_distinct(cards: &[Card]) -> Result<u64, AdvisorError> {
    let mut mask = 0u64;
    for c in cards {
        if (mask & c.mask()) != 0 {
            return Err(AdvisorError::DuplicateCard(c.to_string()));
        }
        mask |= c.mask();
    }
    Ok(mask)
}
