//! Domain layer: the graph model, its reversal, and the solver ports.

pub mod error;
pub mod graph;
pub mod rank;
pub mod reversal;
pub mod traits;
