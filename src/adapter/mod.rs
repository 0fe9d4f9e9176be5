//! Implementations of the chain collaborator ports.

pub mod ethereum;
