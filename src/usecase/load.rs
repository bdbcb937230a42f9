use crate::domain::graph::Graph;
use crate::infrastructure::graph_text::parse_graph_text;
use crate::infrastructure::schema_validator::validate_graph_document;
use crate::infrastructure::serde_json_adapter::{graph_dto_from_value, parse_graph_document};
use anyhow::{anyhow, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Text,
    Json,
}

impl InputFormat {
    /// `*.json` paths are JSON documents; anything else, stdin included, is text.
    pub fn from_path(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".json") {
            InputFormat::Json
        } else {
            InputFormat::Text
        }
    }
}

impl FromStr for InputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(InputFormat::Text),
            "json" => Ok(InputFormat::Json),
            other => Err(anyhow!("unknown input format: {other} (expected text or json)")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph,
    /// Vertex id of every vertex record, in document order.
    pub vertex_ids: Vec<usize>,
    /// Data found after the last record (text format only).
    pub trailing_tokens: usize,
}

pub fn load_graph(raw: &str, format: InputFormat) -> Result<LoadedGraph> {
    match format {
        InputFormat::Text => {
            let parsed = parse_graph_text(raw)?;
            Ok(LoadedGraph {
                graph: parsed.graph,
                vertex_ids: parsed.vertex_ids,
                trailing_tokens: parsed.trailing_tokens,
            })
        }
        InputFormat::Json => {
            let value = parse_graph_document(raw)?;
            validate_graph_document(&value)?;
            let dto = graph_dto_from_value(value)?;
            let graph = dto.to_graph()?;
            Ok(LoadedGraph {
                graph,
                vertex_ids: dto.vertices.iter().map(|v| v.id).collect(),
                trailing_tokens: 0,
            })
        }
    }
}
