//! Line-oriented graph format and the dot/rank report.
//!
//! Input:
//!
//! ```text
//! <header line, ignored>
//! <n>
//! <id> <url> <title, rest of the line>      n records
//! <m>
//! <from> <to>                               m records
//! ```
//!
//! Output is a `digraph{...}` block whose vertex labels are component ids,
//! followed by one `// rank of <v> is <r>` comment per vertex.

use crate::domain::graph::{Graph, SccResult};
use crate::domain::rank::PageRankResult;
use anyhow::{anyhow, Context, Result};
use std::io::Write;

#[derive(Debug, Clone)]
pub struct TextGraph {
    pub graph: Graph,
    /// Vertex id of every vertex record, in input order.
    pub vertex_ids: Vec<usize>,
    /// Whitespace-separated tokens left after the last edge record.
    pub trailing_tokens: usize,
}

struct Cursor<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            line: 1,
        }
    }

    fn rest_of_line(&mut self) -> &'a str {
        let (head, tail) = match self.rest.find('\n') {
            Some(i) => {
                self.line += 1;
                (&self.rest[..i], &self.rest[i + 1..])
            }
            None => (self.rest, ""),
        };
        self.rest = tail;
        head.trim_end_matches('\r')
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let start = self
            .rest
            .char_indices()
            .find(|(_, c)| !c.is_whitespace())
            .map(|(i, _)| i)?;
        self.line += self.rest[..start].matches('\n').count();
        self.rest = &self.rest[start..];

        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace())
            .map_or(self.rest.len(), |(i, _)| i);
        let token = &self.rest[..end];
        self.rest = &self.rest[end..];
        Some(token)
    }

    fn next_i64(&mut self, what: &str) -> Result<i64> {
        let token = self
            .next_token()
            .ok_or_else(|| anyhow!("unexpected end of input, expected {what}"))?;
        token
            .parse::<i64>()
            .with_context(|| format!("line {}: {what} is not an integer: {token:?}", self.line))
    }

    fn next_index(&mut self, what: &str) -> Result<usize> {
        let value = self.next_i64(what)?;
        usize::try_from(value).map_err(|_| anyhow!("line {}: negative {what}: {value}", self.line))
    }
}

pub fn parse_graph_text(input: &str) -> Result<TextGraph> {
    let mut cur = Cursor::new(input);
    let _header = cur.rest_of_line();

    let n = cur.next_i64("vertex count")?;
    // A vertex record takes at least four bytes ("0 u\n"); refuse counts the
    // rest of the input cannot hold before allocating for them.
    if n > 0 && (n as u64).saturating_mul(4) > cur.rest.len() as u64 {
        return Err(anyhow!(
            "line {}: vertex count {n} exceeds the {} vertex record(s) the input can hold",
            cur.line,
            cur.rest.len() / 4
        ));
    }
    let mut graph = Graph::try_new(n)?;

    let mut vertex_ids = Vec::with_capacity(graph.vertex_count());
    for i in 0..graph.vertex_count() {
        let id = cur
            .next_index("vertex id")
            .with_context(|| format!("vertex record {i}"))?;
        let _url = cur
            .next_token()
            .ok_or_else(|| anyhow!("vertex record {i}: missing url"))?;
        let title = cur.rest_of_line().trim();
        graph
            .set_vertex_label(id, title)
            .with_context(|| format!("vertex record {i}"))?;
        vertex_ids.push(id);
    }

    let m = cur.next_index("edge count")?;
    // The declared count is only a hint; never reserve more than the input could hold.
    graph.reserve_edges(m.min(cur.rest.len()));
    for i in 0..m {
        let from = cur
            .next_index("edge source")
            .with_context(|| format!("edge record {i}"))?;
        let to = cur
            .next_index("edge target")
            .with_context(|| format!("edge record {i}"))?;
        graph
            .add_edge(from, to)
            .with_context(|| format!("edge record {i}"))?;
    }

    let mut trailing_tokens = 0;
    while cur.next_token().is_some() {
        trailing_tokens += 1;
    }

    Ok(TextGraph {
        graph,
        vertex_ids,
        trailing_tokens,
    })
}

pub fn write_dot_report<W: Write>(
    out: &mut W,
    graph: &Graph,
    scc: &SccResult,
    ranks: &PageRankResult,
) -> std::io::Result<()> {
    writeln!(out, "digraph{{")?;
    for (v, cid) in scc.component_of.iter().enumerate() {
        writeln!(out, "{v} [label=\"{cid}\"]")?;
    }
    for e in graph.edges() {
        writeln!(out, "{} -> {}", e.from, e.to)?;
    }
    writeln!(out, "}}")?;

    for (v, r) in ranks.ranks.iter().enumerate() {
        writeln!(out, "// rank of {v} is {}", format_g(*r))?;
    }
    Ok(())
}

/// Formats like C's `%g`: six significant digits, trailing zeros removed,
/// scientific notation for exponents below -4 or from 6 up.
pub fn format_g(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    const PRECISION: i32 = 6;
    let digits = (PRECISION - 1) as usize;
    let sci = format!("{x:.digits$e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= PRECISION {
        let mantissa = strip_fraction_zeros(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp).max(0) as usize;
        strip_fraction_zeros(&format!("{x:.decimals$}")).to_string()
    }
}

fn strip_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
