mod evaluator;
mod hand_value;

pub use evaluator::evaluate;
pub(crate) use evaluator::evaluate_seven;
pub use hand_value::{HandCategory, HandValue};
