use crate::domain::graph::{Graph, SccResult};
use crate::domain::rank::PageRankResult;

pub trait SccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult;
}

pub trait RankSolver {
    fn compute_ranks(&self, graph: &Graph) -> PageRankResult;
}
