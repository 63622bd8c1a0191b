use std::collections::{BTreeMap, BTreeSet};

use nuh_core::{EdgeId, HypergraphView, NodeId, NuhError};

use crate::ids::dedup_members;

#[derive(Debug, Clone, Default)]
struct NodeRecord {
    memberships: BTreeSet<EdgeId>,
}

#[derive(Debug, Clone)]
struct EdgeRecord {
    members: Vec<NodeId>,
}

/// Undirected hypergraph whose hyperedges may span any positive number of nodes.
///
/// Identifiers are handed out by counters owned by the instance, so two graphs
/// never share an identifier source.
#[derive(Debug, Clone, Default)]
pub struct Hypergraph {
    nodes: BTreeMap<NodeId, NodeRecord>,
    edges: BTreeMap<EdgeId, EdgeRecord>,
    next_node: u64,
    next_edge: u64,
}

impl Hypergraph {
    /// Creates an empty hypergraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a hypergraph from member lists, creating nodes on first sight.
    ///
    /// Edge identifiers follow the order of `edges`.
    pub fn from_edges<I, E>(edges: I) -> Result<Self, NuhError>
    where
        I: IntoIterator<Item = E>,
        E: AsRef<[u64]>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let members: Vec<NodeId> = edge.as_ref().iter().copied().map(NodeId::from_raw).collect();
            for node in &members {
                if !graph.nodes.contains_key(node) {
                    graph.add_node_with_id(*node)?;
                }
            }
            graph.add_edge(&members)?;
        }
        Ok(graph)
    }

    /// Adds a node using the next free identifier.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId::from_raw(self.next_node);
        self.nodes.insert(id, NodeRecord::default());
        self.next_node += 1;
        id
    }

    /// Adds a node with a caller chosen identifier.
    pub fn add_node_with_id(&mut self, id: NodeId) -> Result<(), NuhError> {
        if self.nodes.contains_key(&id) {
            return Err(NuhError::graph("duplicate-node", "node already exists")
                .with_context("node", id));
        }
        self.nodes.insert(id, NodeRecord::default());
        self.next_node = self.next_node.max(id.as_raw() + 1);
        Ok(())
    }

    /// Adds a hyperedge over existing nodes. Repeated members are collapsed.
    pub fn add_edge(&mut self, members: &[NodeId]) -> Result<EdgeId, NuhError> {
        if members.is_empty() {
            return Err(NuhError::graph(
                "empty-edge",
                "hyperedges require at least one member",
            ));
        }
        let members = dedup_members(members);
        for node in &members {
            self.node(*node)?;
        }
        let id = EdgeId::from_raw(self.next_edge);
        self.next_edge += 1;
        for node in &members {
            if let Some(record) = self.nodes.get_mut(node) {
                record.memberships.insert(id);
            }
        }
        self.edges.insert(id, EdgeRecord { members });
        Ok(id)
    }

    fn node(&self, id: NodeId) -> Result<&NodeRecord, NuhError> {
        self.nodes.get(&id).ok_or_else(|| {
            NuhError::graph("unknown-node", "node does not exist").with_context("node", id)
        })
    }

    fn edge(&self, id: EdgeId) -> Result<&EdgeRecord, NuhError> {
        self.edges.get(&id).ok_or_else(|| {
            NuhError::graph("unknown-edge", "edge does not exist").with_context("edge", id)
        })
    }
}

impl HypergraphView for Hypergraph {
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_> {
        Box::new(self.nodes.keys().copied())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = EdgeId> + '_> {
        Box::new(self.edges.keys().copied())
    }

    fn members(&self, edge: EdgeId) -> Result<&[NodeId], NuhError> {
        Ok(&self.edge(edge)?.members)
    }

    fn memberships(&self, node: NodeId) -> Result<Vec<EdgeId>, NuhError> {
        Ok(self.node(node)?.memberships.iter().copied().collect())
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }
}
