//! Falling 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `falling_2048::{core,input,term,types}` so
//! the binary, benches and integration tests share one import path while the
//! implementation lives in dedicated crates under `crates/`.

pub use falling_2048_core as core;
pub use falling_2048_input as input;
pub use falling_2048_term as term;
pub use falling_2048_types as types;
