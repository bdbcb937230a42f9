//! PageRank by power iteration over the reversed graph.
//!
//! ```text
//! PR(v) = (1 - d) / N + d * Σ PR(u) / out_degree(u)   for each u → v
//! ```
//!
//! Incoming edges of `v` are read from the adjacency of `v` in the reversed graph.
//! Every vertex is updated from the previous iterate only; the new vector replaces
//! the old one after the full sweep.

use crate::domain::error::PageRankConfigError;
use crate::domain::graph::Graph;
use crate::domain::rank::{DanglingPolicy, PageRankConfig, PageRankResult};
use crate::domain::reversal::reverse;
use crate::domain::traits::RankSolver;

#[derive(Debug, Clone, Default)]
pub struct PowerIterationRanker {
    config: PageRankConfig,
}

impl PowerIterationRanker {
    pub fn new(config: PageRankConfig) -> Result<Self, PageRankConfigError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl RankSolver for PowerIterationRanker {
    fn compute_ranks(&self, graph: &Graph) -> PageRankResult {
        pagerank(graph, &self.config)
    }
}

fn pagerank(graph: &Graph, config: &PageRankConfig) -> PageRankResult {
    let n = graph.vertex_count();
    if n == 0 {
        return PageRankResult {
            ranks: Vec::new(),
            iterations: 0,
            converged: true,
            residual: 0.0,
            dangling: config.dangling,
        };
    }

    let nf = n as f64;
    let d = config.damping;
    let teleport = (1.0 - d) / nf;

    let rev = reverse(graph);
    let out_degree: Vec<usize> = (0..n).map(|v| graph.out_degree(v)).collect();
    let dangling: Vec<usize> = (0..n).filter(|&v| out_degree[v] == 0).collect();

    let mut rank = vec![1.0 / nf; n];
    let mut next = vec![0.0; n];
    let mut residual = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        let dangling_share = match config.dangling {
            DanglingPolicy::Redistribute => dangling.iter().map(|&u| rank[u]).sum::<f64>() / nf,
            DanglingPolicy::Leak | DanglingPolicy::SelfLoop => 0.0,
        };

        for (v, slot) in next.iter_mut().enumerate() {
            let mut r = 0.0;
            // Every `u` here has at least the edge u -> v, so its degree is non-zero.
            for e in rev.out_edges(v) {
                r += rank[e.to] / out_degree[e.to] as f64;
            }
            if config.dangling == DanglingPolicy::SelfLoop && out_degree[v] == 0 {
                r += rank[v];
            }
            *slot = teleport + d * (r + dangling_share);
        }

        residual = rank
            .iter()
            .zip(next.iter())
            .map(|(old, new)| {
                let delta = old - new;
                delta * delta
            })
            .sum();

        std::mem::swap(&mut rank, &mut next);

        if residual < config.tolerance {
            return PageRankResult {
                ranks: rank,
                iterations: iteration,
                converged: true,
                residual,
                dangling: config.dangling,
            };
        }
    }

    PageRankResult {
        ranks: rank,
        iterations: config.max_iterations,
        converged: false,
        residual,
        dangling: config.dangling,
    }
}
