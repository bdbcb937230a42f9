//! Strongly connected components and PageRank over a labelled directed graph.
//!
//! The crate is split into layers:
//! - domain: graph model, reversal, solver ports, errors
//! - usecase: loading, validation, analysis workflow + progress events
//! - infrastructure: Kosaraju and power-iteration solvers, file formats, IO
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
