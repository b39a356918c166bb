//! # Neurogene
//!
//! Genotype-to-phenotype kernel for artificial-life simulations: real-valued
//! DNA wires layered decision nets and body traits of simulated organisms.
//!
//! The implementation lives in the workspace crates; this library gathers
//! them under one [`model`] namespace for hosts and integration tests.

pub mod model;
