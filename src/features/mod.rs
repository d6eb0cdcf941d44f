//! Domain-level features (auth, cases, suspects). Each feature keeps its
//! endpoint paths in `client`, its payloads in `types` and its user-facing
//! workflows in `flows`, so the CLI stays a thin layer over them.

pub mod auth;
pub mod cases;
pub mod suspects;
