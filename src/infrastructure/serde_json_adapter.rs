use crate::domain::graph::{Graph, SccResult};
use crate::domain::rank::{DanglingPolicy, PageRankResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphFileDto {
    pub vertex_count: i64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<VertexDto>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VertexDto {
    pub id: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EdgeDto {
    pub from: usize,
    pub to: usize,
}

impl GraphFileDto {
    /// Builds the graph; edges are added in document order.
    pub fn to_graph(&self) -> Result<Graph> {
        let mut g = Graph::try_new(self.vertex_count)?;

        for (i, v) in self.vertices.iter().enumerate() {
            match v.label.as_deref() {
                Some(label) => g.set_vertex_label(v.id, label),
                None => g.check_vertex(v.id),
            }
            .with_context(|| format!("vertex record {i}"))?;
        }

        g.reserve_edges(self.edges.len());
        for (i, e) in self.edges.iter().enumerate() {
            g.add_edge(e.from, e.to)
                .with_context(|| format!("edge record {i}"))?;
        }

        Ok(g)
    }

    /// Serializes a graph; edges are listed oldest first so that reading the
    /// document back reproduces the same adjacency order.
    pub fn from_graph(g: &Graph) -> Self {
        let vertices = (0..g.vertex_count())
            .filter_map(|v| {
                g.label(v).map(|l| VertexDto {
                    id: v,
                    label: Some(l.to_string()),
                })
            })
            .collect();

        let mut edges: Vec<EdgeDto> = Vec::with_capacity(g.edge_count());
        for v in 0..g.vertex_count() {
            edges.extend(g.out_edges(v).rev().map(|e| EdgeDto {
                from: e.from,
                to: e.to,
            }));
        }

        Self {
            vertex_count: g.vertex_count() as i64,
            vertices,
            edges,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReportDto {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
    /// Component id of every vertex.
    pub components: Vec<usize>,
    pub cyclic_components: Vec<bool>,
    /// Non-finite ranks serialize as `null`.
    pub ranks: Vec<f64>,
    pub pagerank: PageRankSummaryDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageRankSummaryDto {
    pub iterations: usize,
    pub converged: bool,
    pub residual: f64,
    pub dangling: DanglingPolicy,
}

impl AnalysisReportDto {
    pub fn new(graph: &Graph, scc: &SccResult, ranks: &PageRankResult) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            component_count: scc.component_count(),
            components: scc.component_of.clone(),
            cyclic_components: scc.cyclic_component.clone(),
            ranks: ranks.ranks.clone(),
            pagerank: PageRankSummaryDto {
                iterations: ranks.iterations,
                converged: ranks.converged,
                residual: ranks.residual,
                dangling: ranks.dangling,
            },
        }
    }
}

pub fn parse_graph_document(raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).context("parsing graph JSON")
}

pub fn graph_dto_from_value(value: serde_json::Value) -> Result<GraphFileDto> {
    serde_json::from_value(value).context("decoding graph document")
}

pub fn render_graph_document(dto: &GraphFileDto) -> Result<String> {
    let mut pretty = serde_json::to_string_pretty(dto).context("serializing graph document")?;
    pretty.push('\n');
    Ok(pretty)
}

pub fn render_json_report(report: &AnalysisReportDto) -> Result<String> {
    let mut pretty = serde_json::to_string_pretty(report)?;
    pretty.push('\n');
    Ok(pretty)
}
