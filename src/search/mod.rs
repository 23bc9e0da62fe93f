//! Universal search: result model, duplicate expansion, ranking,
//! orchestration, suggestions, and the query-input state machine.

pub mod expand;
// Consumed by the rendering layer, which lives outside this binary
#[allow(dead_code)]
pub mod input;
pub mod modules;
pub mod ranking;
pub mod result;
pub mod service;
pub mod suggest;

pub use service::{SearchOutcome, SearchService};
