//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `behavior` - Pure behavioral classification engine
//! - `session` - Recorded conversation sessions and their audio segments

pub mod behavior;
pub mod foundation;
pub mod session;
