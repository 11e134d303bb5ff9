use thiserror::Error;

/// Error type for every fallible operation in the crate
///
/// Invalid input is always reported synchronously, before any simulation
/// work is done.  A failed call leaves no state behind.
#[derive(Debug, Error, PartialEq)]
pub enum AdvisorError {
    #[error("duplicate card in input: {0}")]
    DuplicateCard(String),
    #[error("hand must contain 5 to 7 cards, got {0}")]
    InvalidCardCount(usize),
    #[error("too many board cards")]
    TooManyBoardCards,
    #[error("not enough cards left in the deck")]
    InsufficientDeck,
    #[error("opponent candidate set is empty")]
    EmptyCandidateSet,
    #[error("iteration count must be positive")]
    ZeroIterations,
    #[error("pot size must be positive")]
    NonPositivePot,
    #[error("bet sizing must be in (0, 2], got {0}")]
    InvalidSizing(f64),
    #[error("fold equity must be in [0, 1], got {0}")]
    InvalidFoldEquity(f64),
    #[error("invalid card string: {0}")]
    ParseCard(String),
    #[error("simulation cancelled")]
    Cancelled,
}
