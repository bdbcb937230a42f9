// Infrastructure layer: adapters, file I/O, serde, eventing, solver implementations
pub mod event_ndjson;
pub mod graph_text;
pub mod pagerank;
pub mod scc_kosaraju;
pub mod schema_validator;
pub mod serde_json_adapter;
pub mod stdio_adapter;
