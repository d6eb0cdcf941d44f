//! Cases feature: case records plus their nested evidence and witness
//! statements. Nested records live and die with their case; deleting a case
//! is a single request and the server cascades.

pub mod client;
pub mod flows;
pub mod types;
