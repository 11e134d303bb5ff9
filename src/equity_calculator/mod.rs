mod simulator;

pub use simulator::{
    evaluate_equity, evaluate_equity_cancellable, CancelToken, SimulationConfig, SimulationResult,
};
