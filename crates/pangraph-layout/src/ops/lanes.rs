// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vertical lane assignment.
use tracing::trace;

use crate::error::LayoutError;
use crate::graph::SegmentGraph;
use crate::operation::WrapperOperation;
use crate::wrapper::{HorizontalWrapper, LeafPosition, NodeWrapper, SpaceWrapper, VerticalWrapper};

/// Assigns `y_order` to every segment reached through the wrapper tree.
///
/// - vertical children get consecutive lane bands; a child spanning k lanes
///   pushes its next sibling down by k (an empty child still takes one lane);
/// - horizontal and spaced children share their parent's lane;
/// - combined members share one lane.
pub struct LaneAssignment<'g> {
    graph: &'g mut SegmentGraph,
    first: u32,
    lane: u32,
    bottom: u32,
}

impl<'g> LaneAssignment<'g> {
    /// Starts assigning at lane 0.
    pub fn new(graph: &'g mut SegmentGraph) -> Self {
        Self::starting_at(graph, 0)
    }

    /// Starts assigning at `lane`.
    pub fn starting_at(graph: &'g mut SegmentGraph, lane: u32) -> Self {
        Self {
            graph,
            first: lane,
            lane,
            bottom: lane,
        }
    }

    /// Number of lanes covered by everything visited so far.
    #[must_use]
    pub fn lanes_used(&self) -> u32 {
        self.bottom - self.first
    }

    fn same_lane<'w>(
        &mut self,
        children: impl Iterator<Item = &'w NodeWrapper>,
        container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        let base = self.lane;
        for child in children {
            self.lane = base;
            self.apply(child, container)?;
        }
        self.lane = base;
        Ok(())
    }
}

impl WrapperOperation for LaneAssignment<'_> {
    fn name(&self) -> &'static str {
        "lane-assignment"
    }

    fn visit_leaf<'w>(
        &mut self,
        leaf: &'w LeafPosition,
        _container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        let id = leaf.node();
        self.graph
            .set_y_order(id, self.lane)
            .map_err(|_| LayoutError::UnknownNode(id))?;
        self.bottom = self.bottom.max(self.lane.saturating_add(1));
        trace!(node = %id, lane = self.lane, "assigned lane");
        Ok(())
    }

    fn visit_horizontal<'w>(
        &mut self,
        wrapper: &'w HorizontalWrapper,
        container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        self.same_lane(wrapper.children().iter(), container)
    }

    fn visit_space<'w>(
        &mut self,
        wrapper: &'w SpaceWrapper,
        container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        self.same_lane(wrapper.children(), container)
    }

    fn visit_vertical<'w>(
        &mut self,
        wrapper: &'w VerticalWrapper,
        container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        // The band is measured from this stack's own base, not from lanes
        // already claimed by siblings sharing the parent's lane.
        let base = self.lane;
        let outer_bottom = self.bottom;
        let mut next = base;
        for child in wrapper.children() {
            self.lane = next;
            self.bottom = next;
            self.apply(child, container)?;
            next = self.bottom.max(next.saturating_add(1));
        }
        self.lane = base;
        self.bottom = outer_bottom.max(next);
        Ok(())
    }
}
