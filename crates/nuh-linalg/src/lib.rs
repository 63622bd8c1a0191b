#![deny(missing_docs)]

//! Linear-algebra representations of hypergraphs exposed through
//! [`nuh_core::HypergraphView`]: incidence, adjacency, intersection profile,
//! degree, Laplacian and clique-motif matrices.
//!
//! Every derivation rebuilds the incidence matrix it needs, so results are pure
//! functions of the view and the options.

mod adjacency;
mod incidence;
mod laplacian;
mod options;
mod profile;
mod sparse;

use std::collections::BTreeMap;

pub use adjacency::{adjacency_matrix, clique_motif_matrix};
pub use incidence::{
    incidence_matrix, incidence_matrix_weighted, Incidence, IncidenceIndex, IncidenceMatrix,
};
pub use laplacian::laplacian;
pub use options::{AdjacencyOptions, IncidenceOptions, LaplacianOptions, MatrixOptions};
pub use profile::{degree_vector, intersection_profile};
pub use sparse::to_dense;

/// Re-exported matrix types used in results.
pub use nalgebra::{DMatrix, DVector};
pub use nalgebra_sparse::CsrMatrix;

/// A derived matrix together with an optional position to identifier map.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMatrix<M, Id> {
    /// The derived matrix or vector.
    pub matrix: M,
    /// Present when the caller asked for an index.
    pub index: Option<BTreeMap<usize, Id>>,
}
