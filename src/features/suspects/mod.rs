//! Suspects feature: the suspect registry shared across cases.

pub mod client;
pub mod flows;
pub mod types;
