pub mod fitness;
pub mod selection;

pub use fitness::{evaluate_pool, goodness_ratio, ScoredExpr};
pub use selection::select_fittest;
