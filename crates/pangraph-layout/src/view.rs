// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only filtered view over a [`SegmentGraph`].
//!
//! Filtering and combination happen outside this crate. Once a subset of
//! segments is selected, the adjacency lists of the underlying nodes may
//! point at segments that are no longer part of the picture. [`FilteredView`]
//! makes that rule structural: it exposes positions, content and lanes, but
//! never `incoming`/`outgoing`.
//!
//! # Example
//!
//! ```
//! use pangraph_layout::{NodeId, SegmentGraph, SegmentNode};
//!
//! let mut graph = SegmentGraph::new();
//! graph.insert_node(SegmentNode::new(NodeId(1), None, 0, 4, &b"ACGT"[..])?)?;
//! graph.insert_node(SegmentNode::new(NodeId(2), None, 4, 6, &b"GG"[..])?)?;
//! graph.connect(NodeId(1), NodeId(2))?;
//! graph.layout_all()?;
//!
//! let view = graph.filtered([NodeId(2)]);
//! let node = view.node(NodeId(2)).ok_or("missing")?;
//! assert_eq!(node.x_start(), Some(5));
//! assert!(view.node(NodeId(1)).is_none());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
use std::collections::BTreeSet;

use bytes::Bytes;

use crate::graph::SegmentGraph;
use crate::ident::{GenomeId, NodeId};
use crate::node::SegmentNode;

/// Read-only view over a subset of a [`SegmentGraph`].
///
/// **DO NOT** add any of the following to this type or to [`FilteredNode`]:
/// - accessors for `incoming`/`outgoing`
/// - any method returning `&SegmentNode` or `&SegmentGraph`
/// - `Deref`/`AsRef` to the underlying node or graph
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    graph: &'a SegmentGraph,
    ids: BTreeSet<NodeId>,
}

impl<'a> FilteredView<'a> {
    pub(crate) fn new(graph: &'a SegmentGraph, ids: impl IntoIterator<Item = NodeId>) -> Self {
        let ids = ids.into_iter().filter(|id| graph.contains(*id)).collect();
        Self { graph, ids }
    }

    /// Returns the node when it is part of the view.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<FilteredNode<'a>> {
        if !self.ids.contains(&id) {
            return None;
        }
        self.graph.node(id).map(|node| FilteredNode { node })
    }

    /// Returns `true` if `id` is part of the view.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Iterate over the visible nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = FilteredNode<'a>> + '_ {
        let graph = self.graph;
        self.ids
            .iter()
            .filter_map(move |id| graph.node(*id).map(|node| FilteredNode { node }))
    }

    /// Number of visible nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the view selects nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// A segment seen through a [`FilteredView`]: everything but adjacency.
#[derive(Debug, Clone, Copy)]
pub struct FilteredNode<'a> {
    node: &'a SegmentNode,
}

impl<'a> FilteredNode<'a> {
    /// Node id.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    /// Source genomes, `None` when unknown.
    #[must_use]
    pub fn sources(&self) -> Option<&'a [GenomeId]> {
        self.node.sources()
    }

    /// Inclusive start of the reference span.
    #[must_use]
    pub fn ref_start(&self) -> u64 {
        self.node.ref_start()
    }

    /// Exclusive end of the reference span.
    #[must_use]
    pub fn ref_end(&self) -> u64 {
        self.node.ref_end()
    }

    /// Raw sequence content.
    #[must_use]
    pub fn content(&self) -> &'a Bytes {
        self.node.content()
    }

    /// Content length.
    #[must_use]
    pub fn width(&self) -> u64 {
        self.node.width()
    }

    /// Horizontal start, if laid out.
    #[must_use]
    pub fn x_start(&self) -> Option<u64> {
        self.node.x_start()
    }

    /// Horizontal end, if laid out.
    #[must_use]
    pub fn x_end(&self) -> Option<u64> {
        self.node.x_end()
    }

    /// Vertical lane.
    #[must_use]
    pub fn y_order(&self) -> u32 {
        self.node.y_order()
    }
}
