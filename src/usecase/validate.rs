use crate::domain::graph::Graph;
use crate::usecase::load::LoadedGraph;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::collections::BTreeSet;

/// Shape of a well-formed graph, as reported by `graph validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphReport {
    pub vertices: usize,
    pub edges: usize,
    pub labelled: usize,
    pub self_loops: usize,
    pub parallel_edges: usize,
    /// Vertices without outgoing edges.
    pub dangling: usize,
}

/// Strict checks on top of what loading already enforces.
///
/// Loading accepts repeated vertex records (the last label wins) and ignores data
/// after the last edge; validation rejects both.
pub fn validate_graph(loaded: &LoadedGraph) -> Result<GraphReport> {
    let mut seen: BTreeSet<usize> = BTreeSet::new();
    for (i, &id) in loaded.vertex_ids.iter().enumerate() {
        if !seen.insert(id) {
            return Err(anyhow!("vertex record {i}: duplicate vertex id {id}"));
        }
    }

    if loaded.trailing_tokens > 0 {
        return Err(anyhow!(
            "{} unexpected token(s) after the last edge record",
            loaded.trailing_tokens
        ));
    }

    Ok(describe_graph(&loaded.graph))
}

pub fn describe_graph(graph: &Graph) -> GraphReport {
    let n = graph.vertex_count();
    let mut report = GraphReport {
        vertices: n,
        edges: graph.edge_count(),
        ..GraphReport::default()
    };

    let mut targets: Vec<usize> = Vec::new();
    for v in 0..n {
        if graph.label(v).is_some() {
            report.labelled += 1;
        }
        if graph.out_degree(v) == 0 {
            report.dangling += 1;
        }

        targets.clear();
        targets.extend(graph.out_edges(v).map(|e| e.to));
        report.self_loops += targets.iter().filter(|&&t| t == v).count();

        targets.sort_unstable();
        let before = targets.len();
        targets.dedup();
        report.parallel_edges += before - targets.len();
    }

    report
}
