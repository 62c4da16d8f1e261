//! Parley HTTP API: CLI configuration, application state, and the axum
//! router. The `parley` binary in `main.rs` wires these together.

pub mod cli;
pub mod http;
pub mod state;
