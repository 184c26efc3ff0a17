// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collapse proposals for neighbouring segments.
use std::collections::BTreeMap;

use tracing::debug;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::graph::SegmentGraph;
use crate::ident::NodeId;
use crate::layout::Whitespace;
use crate::operation::WrapperOperation;
use crate::wrapper::{CombinedWrapper, HorizontalWrapper, LeafPosition, NodeWrapper, WrapperKind};

/// Finds adjacent segments that sit close enough to be drawn as one unit.
///
/// Each leaf records its [`right_whitespace`](SegmentGraph::right_whitespace).
/// Inside a horizontal wrapper, two neighbouring leaves `a, b` are proposed
/// when `a -> b` is an edge and `a`'s whitespace is at most `max_gap`.
///
/// Works on the unfiltered graph only: combined wrappers carry no edge data
/// and are rejected with [`LayoutError::UnsupportedWrapperVariant`].
pub struct CollapsePlanner<'g> {
    graph: &'g SegmentGraph,
    max_gap: i64,
    whitespace: BTreeMap<NodeId, Whitespace>,
    pairs: Vec<(NodeId, NodeId)>,
}

impl<'g> CollapsePlanner<'g> {
    /// Plans over `graph`, merging across gaps of at most `max_gap`.
    #[must_use]
    pub fn new(graph: &'g SegmentGraph, max_gap: i64) -> Self {
        Self {
            graph,
            max_gap,
            whitespace: BTreeMap::new(),
            pairs: Vec::new(),
        }
    }

    /// Plans with the collapse threshold from `config`.
    #[must_use]
    pub fn from_config(graph: &'g SegmentGraph, config: &LayoutConfig) -> Self {
        Self::new(graph, config.collapse_max_gap)
    }

    /// Proposed `(left, right)` merges in visiting order.
    #[must_use]
    pub fn collapse_pairs(&self) -> &[(NodeId, NodeId)] {
        &self.pairs
    }

    /// Whitespace recorded for a visited leaf.
    #[must_use]
    pub fn whitespace_of(&self, id: NodeId) -> Option<Whitespace> {
        self.whitespace.get(&id).copied()
    }

    fn is_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.graph
            .node(from)
            .is_some_and(|n| n.outgoing().contains(&to))
    }
}

impl WrapperOperation for CollapsePlanner<'_> {
    fn name(&self) -> &'static str {
        "collapse-planner"
    }

    fn visit_leaf<'w>(
        &mut self,
        leaf: &'w LeafPosition,
        _container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        let ws = self.graph.right_whitespace(leaf.node())?;
        self.whitespace.insert(leaf.node(), ws);
        Ok(())
    }

    fn visit_horizontal<'w>(
        &mut self,
        wrapper: &'w HorizontalWrapper,
        container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        for child in wrapper.children() {
            self.apply(child, container)?;
        }
        for pair in wrapper.children().windows(2) {
            let (NodeWrapper::Leaf(a), NodeWrapper::Leaf(b)) = (&pair[0], &pair[1]) else {
                continue;
            };
            let (a, b) = (a.node(), b.node());
            let Some(ws) = self.whitespace_of(a) else {
                continue;
            };
            if self.is_edge(a, b) && ws.fits_within(self.max_gap) {
                debug!(left = %a, right = %b, gap = ws.get(), "proposing collapse");
                self.pairs.push((a, b));
            }
        }
        Ok(())
    }

    fn visit_combined<'w>(
        &mut self,
        _wrapper: &'w CombinedWrapper,
        _container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        Err(self.unsupported(WrapperKind::Combined))
    }
}
