//! Source parsers: fetch raw external data and produce normalized
//! candidate records. Neither parser knows anything about persistence;
//! the orchestrator feeds their output to the catalog store.

pub mod linguist;
pub mod tags;
