// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Horizontal positioning of segments (longest-path layout).
//!
//! A segment starts right after the widest-reaching predecessor, leaving
//! [`EDGE_GAP`] units for the connecting edge:
//!
//! ```text
//! start_x(n) = 0                                          if n has no incoming edges
//!            = max(start_x(p) + width(p) + EDGE_GAP)      over p in n.incoming
//! ```
//!
//! Positions are memoized on the node (`x_start` is written once per pass)
//! and computed with an explicit stack, so long chains do not grow the
//! native call stack. A directed cycle is reported as
//! [`LayoutError::CyclicGraph`] instead of recursing forever.
use std::collections::HashSet;

use tracing::{debug, info, instrument, trace};

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::graph::SegmentGraph;
use crate::ident::NodeId;

/// Horizontal space reserved between a segment and its successor for the
/// edge that connects them.
pub const EDGE_GAP: u64 = 1;

/// Free horizontal space to the right of a segment.
///
/// [`Whitespace::UNBOUNDED`] means the segment has no successors and nothing
/// constrains it on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Whitespace(i64);

impl Whitespace {
    /// No successor: the largest representable coordinate delta.
    pub const UNBOUNDED: Self = Self(i64::MAX);

    /// Returns the raw delta.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }

    /// Returns `true` for the no-successor sentinel.
    #[must_use]
    pub fn is_unbounded(self) -> bool {
        self == Self::UNBOUNDED
    }

    /// Returns `true` if the gap is bounded and at most `max_gap`.
    #[must_use]
    pub fn fits_within(self, max_gap: i64) -> bool {
        !self.is_unbounded() && self.0 <= max_gap
    }
}

/// Counters for the current layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    /// Nodes whose `x_start` was computed since the last reset.
    pub resolved: u64,
}

impl SegmentGraph {
    /// Returns the horizontal start of `id`, computing it (and every
    /// unpositioned ancestor) on first use with the default [`EDGE_GAP`].
    pub fn start_x(&mut self, id: NodeId) -> Result<u64, LayoutError> {
        self.start_x_with_gap(id, EDGE_GAP)
    }

    /// Same as [`start_x`](Self::start_x) with an explicit edge gap.
    ///
    /// The gap only matters for nodes positioned by this call; cached
    /// positions are returned untouched.
    pub fn start_x_with_gap(&mut self, id: NodeId, gap: u64) -> Result<u64, LayoutError> {
        let root = self.nodes.get(&id).ok_or(LayoutError::UnknownNode(id))?;
        if let Some(x) = root.x_start {
            return Ok(x);
        }

        // Post-order DFS over incoming edges. Each frame is a node plus the
        // index of the next predecessor to inspect.
        let mut stack: Vec<(NodeId, usize)> = vec![(id, 0)];
        let mut on_path: HashSet<NodeId> = HashSet::from([id]);

        while let Some(frame) = stack.last_mut() {
            let current = frame.0;
            let node = self
                .nodes
                .get(&current)
                .ok_or(LayoutError::UnknownNode(current))?;

            if let Some(&pred) = node.incoming.get(frame.1) {
                frame.1 += 1;
                let pred_node = self.nodes.get(&pred).ok_or(LayoutError::UnknownNode(pred))?;
                if pred_node.x_start.is_some() {
                    continue;
                }
                if !on_path.insert(pred) {
                    debug!(node = %pred, via = %current, "cycle detected during layout");
                    return Err(LayoutError::CyclicGraph { node: pred });
                }
                stack.push((pred, 0));
                continue;
            }

            let mut max = 0;
            for pred in &node.incoming {
                let p = self.nodes.get(pred).ok_or(LayoutError::UnknownNode(*pred))?;
                let px = p.x_start.ok_or(LayoutError::Unpositioned { node: *pred })?;
                let reach = px
                    .checked_add(p.width())
                    .and_then(|end| end.checked_add(gap))
                    .ok_or(LayoutError::CoordinateOverflow { node: current })?;
                max = max.max(reach);
            }

            stack.pop();
            on_path.remove(&current);
            if let Some(node) = self.nodes.get_mut(&current) {
                node.x_start = Some(max);
            }
            self.stats.resolved += 1;
            trace!(node = %current, x_start = max, "positioned segment");
        }

        self.nodes
            .get(&id)
            .and_then(|n| n.x_start)
            .ok_or(LayoutError::Unpositioned { node: id })
    }

    /// Positions every segment and returns the canvas width (largest
    /// `x_end`, `0` for an empty graph).
    pub fn layout_all(&mut self) -> Result<u64, LayoutError> {
        self.layout_all_with_gap(EDGE_GAP)
    }

    /// Positions every segment with the edge gap from `config`.
    pub fn layout_all_with(&mut self, config: &LayoutConfig) -> Result<u64, LayoutError> {
        self.layout_all_with_gap(config.edge_gap)
    }

    #[instrument(skip(self), fields(nodes = self.nodes.len()))]
    fn layout_all_with_gap(&mut self, gap: u64) -> Result<u64, LayoutError> {
        let ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        let mut width = 0;
        for id in ids {
            self.start_x_with_gap(id, gap)?;
            width = width.max(self.x_end(id)?);
        }
        info!(canvas_width = width, resolved = self.stats.resolved, "layout complete");
        Ok(width)
    }

    /// Counters for the current pass.
    #[must_use]
    pub fn layout_stats(&self) -> LayoutStats {
        self.stats
    }

    /// Content length of `id`.
    pub fn width(&self, id: NodeId) -> Result<u64, LayoutError> {
        self.nodes
            .get(&id)
            .map(crate::node::SegmentNode::width)
            .ok_or(LayoutError::UnknownNode(id))
    }

    /// `x_start + width` of an already positioned node.
    pub fn x_end(&self, id: NodeId) -> Result<u64, LayoutError> {
        let node = self.nodes.get(&id).ok_or(LayoutError::UnknownNode(id))?;
        let x = node.x_start.ok_or(LayoutError::Unpositioned { node: id })?;
        x.checked_add(node.width())
            .ok_or(LayoutError::CoordinateOverflow { node: id })
    }

    /// Gap between the right edge of `id` and the nearest successor's left
    /// edge.
    ///
    /// Pure query: the node and all of its successors must already be
    /// positioned. A node without successors yields [`Whitespace::UNBOUNDED`].
    pub fn right_whitespace(&self, id: NodeId) -> Result<Whitespace, LayoutError> {
        let node = self.nodes.get(&id).ok_or(LayoutError::UnknownNode(id))?;
        if node.outgoing.is_empty() {
            return Ok(Whitespace::UNBOUNDED);
        }
        let end = self.x_end(id)?;
        let mut nearest = u64::MAX;
        for succ in &node.outgoing {
            let s = self.nodes.get(succ).ok_or(LayoutError::UnknownNode(*succ))?;
            let sx = s.x_start.ok_or(LayoutError::Unpositioned { node: *succ })?;
            nearest = nearest.min(sx);
        }
        Ok(Whitespace(signed_delta(nearest, end)))
    }
}

fn signed_delta(to: u64, from: u64) -> i64 {
    if to >= from {
        i64::try_from(to - from).unwrap_or(i64::MAX - 1)
    } else {
        i64::try_from(from - to).map_or(i64::MIN, |d| -d)
    }
}
