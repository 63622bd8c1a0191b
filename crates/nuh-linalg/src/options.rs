use nuh_core::NuhError;
use serde::{Deserialize, Serialize};

/// Options controlling incidence matrix construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidenceOptions {
    /// Keep only hyperedges of this order (size minus one). `None` keeps all.
    pub order: Option<usize>,
    /// Build a CSR matrix instead of a dense one.
    pub sparse: bool,
    /// Return position to identifier maps alongside the matrix.
    pub index: bool,
}

impl Default for IncidenceOptions {
    fn default() -> Self {
        Self {
            order: None,
            sparse: true,
            index: false,
        }
    }
}

/// Options controlling adjacency matrix construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyOptions {
    /// Keep only hyperedges of this order. `None` keeps all.
    pub order: Option<usize>,
    /// Minimum number of shared hyperedges for two nodes to be adjacent.
    pub s: usize,
    /// Keep shared-edge counts instead of a 0/1 pattern.
    pub weighted: bool,
    /// Return the row position to node map.
    pub index: bool,
}

impl Default for AdjacencyOptions {
    fn default() -> Self {
        Self {
            order: None,
            s: 1,
            weighted: false,
            index: false,
        }
    }
}

/// Order filter and index flag shared by the simpler derivations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatrixOptions {
    /// Keep only hyperedges of this order. `None` keeps all.
    pub order: Option<usize>,
    /// Return the position to identifier map.
    pub index: bool,
}

/// Options controlling the order-`d` Laplacian.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaplacianOptions {
    /// Interaction order; 1 yields the usual graph Laplacian.
    pub order: usize,
    /// Divide the result by `order`.
    pub rescale_per_node: bool,
    /// Return the row position to node map.
    pub index: bool,
}

impl Default for LaplacianOptions {
    fn default() -> Self {
        Self {
            order: 1,
            rescale_per_node: false,
            index: false,
        }
    }
}

pub(crate) fn validate_order(order: Option<usize>) -> Result<(), NuhError> {
    if order == Some(0) {
        return Err(NuhError::invalid_argument(
            "invalid-order",
            "order filter must be at least 1",
        )
        .with_context("order", 0)
        .with_hint("use None to include hyperedges of every order"));
    }
    Ok(())
}
