//! Core data structures for the neurogene kernel.

pub mod decision;
pub mod genome;
pub mod neural;
