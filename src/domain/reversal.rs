use crate::domain::graph::Graph;

/// Builds a new graph with every edge flipped and the same labels.
///
/// Edges are inserted while walking vertices `0..n` and each vertex's adjacency in
/// order, so the result is a deterministic function of the input.
pub fn reverse(g: &Graph) -> Graph {
    let n = g.vertex_count();
    let mut rg = Graph::new(n);

    rg.copy_labels_from(g);

    rg.reserve_edges(g.edge_count());
    for e in g.edges() {
        rg.push_edge(e.to, e.from);
    }

    rg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_edges(g: &Graph) -> Vec<(usize, usize)> {
        let mut all: Vec<(usize, usize)> = g.edges().map(|e| (e.from, e.to)).collect();
        all.sort_unstable();
        all
    }

    #[test]
    fn reverse_flips_every_edge_and_keeps_labels() {
        let mut g = Graph::new(3);
        g.set_vertex_label(1, "middle").expect("label");
        g.add_edge(0, 1).expect("edge");
        g.add_edge(1, 2).expect("edge");
        g.add_edge(1, 2).expect("edge");

        let rg = reverse(&g);
        assert_eq!(rg.vertex_count(), 3);
        assert_eq!(rg.label(1), Some("middle"));
        assert_eq!(sorted_edges(&rg), vec![(1, 0), (2, 1), (2, 1)]);
        assert_eq!(rg.edge_capacity(), 3);
    }

    #[test]
    fn reverse_insertion_order_follows_source_traversal() {
        // 0 -> 2 then 1 -> 2: the reversed adjacency of 2 gets (2,0) first, so it
        // is read back last.
        let mut g = Graph::new(3);
        g.add_edge(0, 2).expect("edge");
        g.add_edge(1, 2).expect("edge");

        let rg = reverse(&g);
        let outs: Vec<usize> = rg.out_edges(2).map(|e| e.to).collect();
        assert_eq!(outs, vec![1, 0]);
    }

    #[test]
    fn double_reverse_restores_edge_multiset() {
        let mut g = Graph::new(4);
        for (a, b) in [(0, 1), (1, 2), (2, 0), (2, 2), (3, 1), (3, 1)] {
            g.add_edge(a, b).expect("edge");
        }
        let rr = reverse(&reverse(&g));
        assert_eq!(sorted_edges(&rr), sorted_edges(&g));
    }

    #[test]
    fn reverse_leaves_original_untouched() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1).expect("edge");
        let _ = reverse(&g);
        assert_eq!(sorted_edges(&g), vec![(0, 1)]);
    }
}
