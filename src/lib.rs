//! Panzer Drive (workspace facade crate).
//!
//! Exposes the workspace as `panzer_drive::{types, core, input, term, engine}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use panzer_core as core;
pub use panzer_engine as engine;
pub use panzer_input as input;
pub use panzer_term as term;
pub use panzer_types as types;
