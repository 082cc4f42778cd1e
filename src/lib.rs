//! Charades TUI (workspace facade crate).
//!
//! This package keeps the `charades_tui::{core,term,input,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use charades_core as core;
pub use charades_input as input;
pub use charades_term as term;
pub use charades_types as types;
