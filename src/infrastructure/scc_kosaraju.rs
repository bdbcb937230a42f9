use crate::domain::graph::{Graph, SccResult};
use crate::domain::reversal::reverse;
use crate::domain::traits::SccDetector;

const UNASSIGNED: usize = usize::MAX;

pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &Graph) -> SccResult {
    let n = graph.vertex_count();

    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut seen = vec![false; n];

    for start in 0..n {
        if seen[start] {
            continue;
        }
        iterative_finish_order(start, graph, &mut seen, &mut order);
    }

    let rev = reverse(graph);

    let mut component_of = vec![UNASSIGNED; n];
    let mut components: Vec<Vec<usize>> = Vec::new();

    for &v in order.iter().rev() {
        if component_of[v] != UNASSIGNED {
            continue;
        }

        let cid = components.len();
        let mut stack = vec![v];
        component_of[v] = cid;
        let mut comp = Vec::new();

        while let Some(x) = stack.pop() {
            comp.push(x);
            for e in rev.out_edges(x) {
                if component_of[e.to] == UNASSIGNED {
                    component_of[e.to] = cid;
                    stack.push(e.to);
                }
            }
        }

        comp.sort_unstable();
        components.push(comp);
    }

    let mut cyclic_component = vec![false; components.len()];

    for (cid, comp) in components.iter().enumerate() {
        if comp.len() > 1 {
            cyclic_component[cid] = true;
            continue;
        }
        let only = comp[0];
        if graph.out_edges(only).any(|e| e.to == only) {
            cyclic_component[cid] = true;
        }
    }

    SccResult {
        component_of,
        components,
        cyclic_component,
    }
}

/// Post-order DFS from `start`, exploring the newest edge of each vertex first.
///
/// Each stack frame holds a vertex and how many of its edges were already tried,
/// which reproduces the visiting order of the recursive formulation.
fn iterative_finish_order(start: usize, graph: &Graph, seen: &mut [bool], order: &mut Vec<usize>) {
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    seen[start] = true;

    while let Some((v, next_i)) = stack.pop() {
        if let Some(e) = graph.out_edge(v, next_i) {
            stack.push((v, next_i + 1));
            if !seen[e.to] {
                seen[e.to] = true;
                stack.push((e.to, 0));
            }
            continue;
        }

        order.push(v);
    }
}
