//! Binary entrypoint.
//!
//! The crate is split into layers:
//! - domain: pure, synchronous graph model and solver ports
//! - usecase: loading, validation, analysis + progress events
//! - infrastructure: solver implementations, serde + async IO
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    scc_pagerank::interface::cli::run().await
}
