//! core
//!
//! Core domain types and algorithms for gridcolor.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Dimensions, VertexId, Color
//! - [`graph`] - CSR lattice graph
//! - [`coloring`] - Greedy breadth-first colorer and verification
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid lattice sizes at construction time
//! - Core code never prints; diagnostics are returned as data
//! - All results are deterministic

pub mod coloring;
pub mod config;
pub mod graph;
pub mod types;
