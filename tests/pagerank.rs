use scc_pagerank::domain::graph::Graph;
use scc_pagerank::domain::rank::{DanglingPolicy, PageRankConfig};
use scc_pagerank::domain::traits::RankSolver;
use scc_pagerank::infrastructure::pagerank::PowerIterationRanker;

const D: f64 = 0.85;

fn graph(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut g = Graph::new(n);
    g.reserve_edges(edges.len());
    for &(a, b) in edges {
        g.add_edge(a, b).expect("edge");
    }
    g
}

fn with_policy(dangling: DanglingPolicy) -> PowerIterationRanker {
    PowerIterationRanker::new(PageRankConfig {
        dangling,
        ..PageRankConfig::default()
    })
    .expect("valid config")
}

#[test]
fn cycle_of_three_converges_to_one_third() {
    let res = PowerIterationRanker::default().compute_ranks(&graph(3, &[(0, 1), (1, 2), (2, 0)]));
    assert!(res.converged);
    for r in &res.ranks {
        assert!((r - 1.0 / 3.0).abs() < 1e-9);
    }
}

#[test]
fn single_edge_matches_reference_output() {
    let res = PowerIterationRanker::default().compute_ranks(&graph(2, &[(0, 1)]));
    let r0 = (1.0 - D) / 2.0;
    assert!((res.ranks[0] - r0).abs() < 1e-12);
    assert!((res.ranks[1] - ((1.0 - D) / 2.0 + D * r0)).abs() < 1e-12);
}

#[test]
fn ranks_sum_to_one_without_dangling_vertices() {
    // Every vertex has an outgoing edge; includes a self-loop and parallel edges.
    let g = graph(
        5,
        &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 3), (3, 4), (4, 0), (4, 0)],
    );
    let res = PowerIterationRanker::default().compute_ranks(&g);
    assert!(res.converged);
    assert!((res.total() - 1.0).abs() < 1e-3, "total {}", res.total());
}

#[test]
fn redistribute_sums_to_one_with_dangling_vertices() {
    let g = graph(4, &[(0, 1), (0, 2), (1, 2)]);
    let res = with_policy(DanglingPolicy::Redistribute).compute_ranks(&g);
    assert!(res.converged);
    assert!((res.total() - 1.0).abs() < 1e-6);
    // 2 collects from both 0 and 1; 3 only ever receives teleport + dangling share.
    assert!(res.ranks[2] > res.ranks[1]);
    assert!(res.ranks[1] > res.ranks[3]);
}

#[test]
fn leak_policy_loses_mass_at_sinks() {
    let g = graph(4, &[(0, 1), (0, 2), (1, 2)]);
    let res = PowerIterationRanker::default().compute_ranks(&g);
    assert!(res.converged);
    assert!(res.total() < 1.0);
    assert!(res.ranks.iter().all(|r| r.is_finite()));
}

#[test]
fn solver_does_not_mutate_input() {
    let g = graph(3, &[(0, 1), (1, 2)]);
    let before: Vec<_> = g.edges().collect();
    let _ = PowerIterationRanker::default().compute_ranks(&g);
    let after: Vec<_> = g.edges().collect();
    assert_eq!(before, after);
}

#[test]
fn tighter_tolerance_needs_more_iterations() {
    let g = graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
    let loose = PowerIterationRanker::default().compute_ranks(&g);
    let tight = PowerIterationRanker::new(PageRankConfig {
        tolerance: 1e-14,
        ..PageRankConfig::default()
    })
    .expect("valid config")
    .compute_ranks(&g);
    assert!(tight.converged);
    assert!(tight.iterations > loose.iterations);
    for (a, b) in loose.ranks.iter().zip(tight.ranks.iter()) {
        assert!((a - b).abs() < 5e-2);
    }
}
