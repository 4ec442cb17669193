//! mcqdrill-core — Test-session lifecycle engine.
//!
//! This crate defines the data model, question bank parser, session builder,
//! session state machine, and scorer that the rest of mcqdrill builds on.
//! It is deliberately synchronous and side-effect free: time enters only as
//! explicit `DateTime<Utc>` arguments, and randomness as an explicit `Rng`.

pub mod error;
pub mod model;
pub mod parser;
pub mod scorer;
pub mod session;
