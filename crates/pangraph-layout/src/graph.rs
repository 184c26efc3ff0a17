// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory segment graph: the node table that owns every segment.
use std::collections::BTreeMap;

use thiserror::Error;

use crate::ident::NodeId;
use crate::layout::LayoutStats;
use crate::node::SegmentNode;
use crate::view::FilteredView;

/// Error returned while building a [`SegmentGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node with this id is already present.
    #[error("node {0} already exists")]
    DuplicateNode(NodeId),
    /// An edge endpoint does not exist in the graph.
    #[error("missing node {0}")]
    MissingNode(NodeId),
}

/// Owner of all segments of one unfiltered alignment graph.
///
/// Segments refer to each other only through [`NodeId`]s stored in their
/// adjacency lists; the graph is the single owner. Iteration is in id order
/// so layout passes are deterministic.
#[derive(Debug, Clone, Default)]
pub struct SegmentGraph {
    pub(crate) nodes: BTreeMap<NodeId, SegmentNode>,
    pub(crate) stats: LayoutStats,
}

impl SegmentGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an unwired segment.
    pub fn insert_node(&mut self, node: SegmentNode) -> Result<(), GraphError> {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.nodes.insert(id, node);
        Ok(())
    }

    /// Wires a directed edge `from -> to`.
    ///
    /// Self-loops are accepted here; layout reports them as cycles.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::MissingNode(to));
        }
        let Some(src) = self.nodes.get_mut(&from) else {
            return Err(GraphError::MissingNode(from));
        };
        src.outgoing.push(to);
        if let Some(dst) = self.nodes.get_mut(&to) {
            dst.incoming.push(from);
        }
        Ok(())
    }

    /// Returns a shared reference to a node when it exists.
    pub fn node(&self, id: NodeId) -> Option<&SegmentNode> {
        self.nodes.get(&id)
    }

    /// Returns `true` if the graph holds a node with `id`.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterate over all nodes in id order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &SegmentNode> {
        self.nodes.values()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no segments.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Writes the vertical lane of a node.
    pub fn set_y_order(&mut self, id: NodeId, lane: u32) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::MissingNode(id))?;
        node.y_order = lane;
        Ok(())
    }

    /// Forgets every cached horizontal position so the next query starts a
    /// fresh layout pass.
    pub fn reset_layout(&mut self) {
        for node in self.nodes.values_mut() {
            node.x_start = None;
        }
        self.stats = LayoutStats::default();
    }

    /// Returns a read-only view over `ids` that hides adjacency.
    ///
    /// Ids not present in the graph are skipped.
    pub fn filtered(&self, ids: impl IntoIterator<Item = NodeId>) -> FilteredView<'_> {
        FilteredView::new(self, ids)
    }
}
