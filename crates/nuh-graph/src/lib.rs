#![deny(missing_docs)]

//! Non-uniform hypergraph container, degree sequences and the uniformization
//! transform built on the `nuh-core` contracts.

pub mod combinatorics;
mod degree;
mod hypergraph;
mod ids;
mod uniform;

pub use degree::DegreeSequence;
pub use hypergraph::Hypergraph;
pub use uniform::{NuHypergraph, UniformizeReport};
