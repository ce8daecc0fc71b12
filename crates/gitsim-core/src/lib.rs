//! Repository state model for the gitsim command simulator.
//!
//! This crate holds the simulated version-control state: identity
//! configuration, the branch pointer, working and staged change sets, local
//! and remote commit histories, and the stash stack. Mutation operations are
//! infallible; every precondition (unknown path, empty staging set, empty
//! stash) is checked by the interpreter before it touches the model.

pub mod repository;
pub mod types;

pub use repository::Repository;
pub use types::*;
