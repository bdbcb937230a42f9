use crate::domain::error::GraphError;

/// Index of an edge in the graph's edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

/// Directed multigraph with a fixed vertex set and optional per-vertex labels.
///
/// Edges live in a single arena; each vertex keeps the ids of its outgoing edges in
/// insertion order. Readers see them newest first, so adding an edge behaves like
/// prepending it to the vertex's edge list.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeId>>,
    labels: Vec<Option<String>>,
    edge_capacity: usize,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
            labels: vec![None; vertex_count],
            edge_capacity: 0,
        }
    }

    /// Builds an empty graph from a count as read from untrusted input.
    ///
    /// Allocation failure is reported as [`GraphError::TooManyVertices`].
    pub fn try_new(vertex_count: i64) -> Result<Self, GraphError> {
        let n = usize::try_from(vertex_count)
            .map_err(|_| GraphError::InvalidVertexCount(vertex_count))?;

        let mut adjacency: Vec<Vec<EdgeId>> = Vec::new();
        let mut labels: Vec<Option<String>> = Vec::new();
        adjacency
            .try_reserve_exact(n)
            .map_err(|_| GraphError::TooManyVertices(n))?;
        labels
            .try_reserve_exact(n)
            .map_err(|_| GraphError::TooManyVertices(n))?;
        adjacency.resize_with(n, Vec::new);
        labels.resize(n, None);

        Ok(Self {
            edges: Vec::new(),
            adjacency,
            labels,
            edge_capacity: 0,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge count declared by the last [`reserve_edges`](Self::reserve_edges) call.
    pub fn edge_capacity(&self) -> usize {
        self.edge_capacity
    }

    pub fn set_vertex_label(
        &mut self,
        vertex: usize,
        label: impl Into<String>,
    ) -> Result<(), GraphError> {
        self.check_vertex(vertex)?;
        self.labels[vertex] = Some(label.into());
        Ok(())
    }

    pub fn label(&self, vertex: usize) -> Option<&str> {
        self.labels.get(vertex).and_then(|l| l.as_deref())
    }

    /// Declares the expected number of edges and clears any edges added so far.
    ///
    /// The capacity is a sizing hint only: adding more edges than reserved grows
    /// the arena.
    pub fn reserve_edges(&mut self, capacity: usize) {
        self.edges.clear();
        self.edges.reserve(capacity);
        for outs in self.adjacency.iter_mut() {
            outs.clear();
        }
        self.edge_capacity = capacity;
    }

    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<EdgeId, GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.push_edge(from, to))
    }

    /// Appends an edge whose endpoints are already known to be in range.
    pub(crate) fn push_edge(&mut self, from: usize, to: usize) -> EdgeId {
        debug_assert!(from < self.vertex_count() && to < self.vertex_count());
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { from, to });
        self.adjacency[from].push(id);
        id
    }

    pub(crate) fn copy_labels_from(&mut self, other: &Graph) {
        debug_assert_eq!(self.vertex_count(), other.vertex_count());
        self.labels.clone_from(&other.labels);
    }

    pub fn edge(&self, id: EdgeId) -> Edge {
        self.edges[id.0]
    }

    /// Outgoing edges of `vertex`, most recently added first.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn out_edges(&self, vertex: usize) -> impl DoubleEndedIterator<Item = Edge> + '_ {
        self.adjacency[vertex]
            .iter()
            .rev()
            .map(move |&id| self.edges[id.0])
    }

    /// The `i`-th outgoing edge of `vertex` in [`out_edges`](Self::out_edges) order.
    pub fn out_edge(&self, vertex: usize, i: usize) -> Option<Edge> {
        let outs = &self.adjacency[vertex];
        let idx = outs.len().checked_sub(i + 1)?;
        Some(self.edges[outs[idx].0])
    }

    /// Number of outgoing edges, counting parallel edges and self-loops.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }

    /// Every edge, grouped by source vertex in ascending order and, within a
    /// vertex, in adjacency order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.vertex_count()).flat_map(move |v| self.out_edges(v))
    }

    /// Fails with [`GraphError::VertexOutOfBounds`] unless `vertex` exists.
    pub fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

#[derive(Debug, Clone)]
pub struct SccResult {
    pub component_of: Vec<usize>,
    pub components: Vec<Vec<usize>>,
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn largest_component(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(g: &Graph, v: usize) -> Vec<usize> {
        g.out_edges(v).map(|e| e.to).collect()
    }

    #[test]
    fn new_graph_has_no_edges_or_labels() {
        let g = Graph::new(3);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 0);
        assert!((0..3).all(|v| g.label(v).is_none()));
    }

    #[test]
    fn try_new_rejects_negative_counts() {
        assert_eq!(
            Graph::try_new(-1).unwrap_err(),
            GraphError::InvalidVertexCount(-1)
        );
        assert_eq!(Graph::try_new(0).expect("empty").vertex_count(), 0);
    }

    #[test]
    fn try_new_reports_unallocatable_counts() {
        assert_eq!(
            Graph::try_new(i64::MAX).unwrap_err(),
            GraphError::TooManyVertices(i64::MAX as usize)
        );
        let g = Graph::try_new(3).expect("small graph");
        assert_eq!(g.vertex_count(), 3);
        assert!((0..3).all(|v| g.label(v).is_none() && g.out_degree(v) == 0));
    }

    #[test]
    fn out_edges_are_most_recent_first() {
        let mut g = Graph::new(4);
        g.reserve_edges(3);
        g.add_edge(0, 1).expect("edge");
        g.add_edge(0, 2).expect("edge");
        g.add_edge(0, 3).expect("edge");
        assert_eq!(targets(&g, 0), vec![3, 2, 1]);
        assert_eq!(g.out_edge(0, 0), Some(Edge { from: 0, to: 3 }));
        assert_eq!(g.out_edge(0, 2), Some(Edge { from: 0, to: 1 }));
        assert_eq!(g.out_edge(0, 3), None);
    }

    #[test]
    fn edge_ids_resolve_to_their_endpoints() {
        let mut g = Graph::new(3);
        let a = g.add_edge(2, 0).expect("edge");
        let b = g.add_edge(0, 1).expect("edge");
        assert_ne!(a, b);
        assert_eq!(g.edge(a), Edge { from: 2, to: 0 });
        assert_eq!(g.edge(b), Edge { from: 0, to: 1 });
    }

    #[test]
    fn parallel_edges_and_self_loops_are_kept() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1).expect("edge");
        g.add_edge(0, 1).expect("edge");
        g.add_edge(1, 1).expect("edge");
        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.out_degree(1), 1);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn add_edge_grows_past_reservation() {
        let mut g = Graph::new(2);
        g.reserve_edges(1);
        g.add_edge(0, 1).expect("edge");
        g.add_edge(1, 0).expect("edge beyond capacity");
        assert_eq!(g.edge_capacity(), 1);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn reserving_again_resets_edges() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1).expect("edge");
        g.reserve_edges(4);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.out_degree(0), 0);
    }

    #[test]
    fn out_of_bounds_endpoints_are_rejected() {
        let mut g = Graph::new(2);
        let err = g.add_edge(0, 2).unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexOutOfBounds {
                vertex: 2,
                vertex_count: 2
            }
        );
        assert!(g.add_edge(5, 0).is_err());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn labels_overwrite_and_check_bounds() {
        let mut g = Graph::new(1);
        g.set_vertex_label(0, "first").expect("label");
        g.set_vertex_label(0, "second").expect("label");
        assert_eq!(g.label(0), Some("second"));
        assert!(g.set_vertex_label(1, "nope").is_err());
    }

    #[test]
    fn edges_iterates_by_vertex_then_adjacency_order() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2).expect("edge");
        g.add_edge(0, 1).expect("edge");
        g.add_edge(1, 0).expect("edge");
        let all: Vec<(usize, usize)> = g.edges().map(|e| (e.from, e.to)).collect();
        assert_eq!(all, vec![(0, 1), (1, 0), (1, 2)]);
    }
}
