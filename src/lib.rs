//! Fog2D (workspace facade crate).
//!
//! Re-exports the engine crates under one roof as
//! `fog2d::{core,engine,input,term,types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use fog2d_core as core;
pub use fog2d_engine as engine;
pub use fog2d_input as input;
pub use fog2d_term as term;
pub use fog2d_types as types;
