#![deny(missing_docs)]
#![doc = "Identifiers, errors and the read-only hypergraph view shared by the nuh crates."]

use std::fmt;
use std::iter::ExactSizeIterator;

use serde::{Deserialize, Serialize};

pub mod errors;

pub use errors::{ErrorInfo, NuhError};

/// Identifier for a node within a hypergraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a hyperedge within a hypergraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only access to the membership structure of a hypergraph.
///
/// Implementations must enumerate nodes and edges in a deterministic order for a
/// fixed snapshot; matrix rows and columns follow that order.
pub trait HypergraphView {
    /// Returns an iterator over all node identifiers.
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_>;

    /// Returns an iterator over all edge identifiers.
    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = EdgeId> + '_>;

    /// Returns the member nodes of the specified hyperedge.
    fn members(&self, edge: EdgeId) -> Result<&[NodeId], NuhError>;

    /// Returns the hyperedges the specified node belongs to.
    fn memberships(&self, node: NodeId) -> Result<Vec<EdgeId>, NuhError>;

    /// Returns the number of nodes.
    fn num_nodes(&self) -> usize {
        self.nodes().len()
    }

    /// Returns the number of hyperedges.
    fn num_edges(&self) -> usize {
        self.edges().len()
    }
}
