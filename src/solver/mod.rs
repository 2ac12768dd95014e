// ============================================================================
// Solver Module
// Newton iteration producing the √2 expansion
// ============================================================================

mod config;
mod newton;

pub use config::{
    SolverConfig, DEFAULT_DIGIT_COUNT, DEFAULT_GUARD_DIGITS, DEFAULT_INITIAL_GUESS,
    DEFAULT_THRESHOLD_MARGIN,
};
pub use newton::{Expansion, RootSolver, SolveError};
