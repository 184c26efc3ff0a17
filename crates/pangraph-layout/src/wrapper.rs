// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Composite wrapper shapes laid over the segment graph.
//!
//! A wrapper tree is assembled bottom-up by the composition step (outside
//! this crate) from laid-out segments. Children are owned, so the tree is
//! acyclic by construction. Behaviour over the tree lives in
//! [`WrapperOperation`](crate::WrapperOperation) implementations, not here.
use std::fmt;

use crate::error::LayoutError;
use crate::ident::NodeId;
use crate::operation::WrapperOperation;

/// Names a wrapper variant (used in errors and logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperKind {
    /// [`LeafPosition`].
    Leaf,
    /// [`SingleWrapper`].
    Single,
    /// [`HorizontalWrapper`].
    Horizontal,
    /// [`VerticalWrapper`].
    Vertical,
    /// [`SpaceWrapper`].
    Space,
    /// [`CombinedWrapper`].
    Combined,
}

impl fmt::Display for WrapperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Leaf => "leaf",
            Self::Single => "single",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Space => "space",
            Self::Combined => "combined",
        };
        f.write_str(name)
    }
}

/// One node of a wrapper tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeWrapper {
    /// A single positioned segment.
    Leaf(LeafPosition),
    /// Exactly one child, delegated straight through.
    Single(SingleWrapper),
    /// Children laid out left to right.
    Horizontal(HorizontalWrapper),
    /// Children stacked top to bottom, one lane band each.
    Vertical(VerticalWrapper),
    /// Children laid out left to right with explicit gaps.
    Space(SpaceWrapper),
    /// Several segments merged into one renderable unit.
    Combined(CombinedWrapper),
}

impl NodeWrapper {
    /// Shorthand for a leaf over `node`.
    #[must_use]
    pub fn leaf(node: NodeId) -> Self {
        Self::Leaf(LeafPosition::new(node))
    }

    /// Shorthand for a single wrapper around `child`.
    #[must_use]
    pub fn single(child: Self) -> Self {
        Self::Single(SingleWrapper::new(child))
    }

    /// Shorthand for a horizontal wrapper.
    #[must_use]
    pub fn horizontal(children: Vec<Self>) -> Self {
        Self::Horizontal(HorizontalWrapper::new(children))
    }

    /// Shorthand for a vertical wrapper.
    #[must_use]
    pub fn vertical(children: Vec<Self>) -> Self {
        Self::Vertical(VerticalWrapper::new(children))
    }

    /// Shorthand for a space wrapper.
    #[must_use]
    pub fn space(slots: Vec<SpaceSlot>) -> Self {
        Self::Space(SpaceWrapper::new(slots))
    }

    /// Shorthand for a combined wrapper over `members`.
    pub fn combined(members: impl IntoIterator<Item = NodeId>) -> Result<Self, LayoutError> {
        CombinedWrapper::new(members.into_iter().map(LeafPosition::new).collect())
            .map(Self::Combined)
    }

    /// Returns the variant of this wrapper.
    #[must_use]
    pub fn kind(&self) -> WrapperKind {
        match self {
            Self::Leaf(_) => WrapperKind::Leaf,
            Self::Single(_) => WrapperKind::Single,
            Self::Horizontal(_) => WrapperKind::Horizontal,
            Self::Vertical(_) => WrapperKind::Vertical,
            Self::Space(_) => WrapperKind::Space,
            Self::Combined(_) => WrapperKind::Combined,
        }
    }

    /// Calls back into `op` with the handler for this wrapper's variant.
    ///
    /// This is the second half of the double dispatch started by
    /// [`WrapperOperation::apply`]; operations should not need to call it.
    pub fn accept<'w, O>(
        &'w self,
        op: &mut O,
        container: Option<&'w Self>,
    ) -> Result<(), LayoutError>
    where
        O: WrapperOperation + ?Sized,
    {
        match self {
            Self::Leaf(w) => op.visit_leaf(w, container),
            Self::Single(w) => op.visit_single(w, container),
            Self::Horizontal(w) => op.visit_horizontal(w, container),
            Self::Vertical(w) => op.visit_vertical(w, container),
            Self::Space(w) => op.visit_space(w, container),
            Self::Combined(w) => op.visit_combined(w, container),
        }
    }

    /// Every segment id in the subtree, pre-order (combined members included).
    #[must_use]
    pub fn leaf_ids(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(w) = stack.pop() {
            match w {
                Self::Leaf(leaf) => out.push(leaf.node()),
                Self::Single(s) => stack.push(s.child()),
                Self::Horizontal(h) => stack.extend(h.children().iter().rev()),
                Self::Vertical(v) => stack.extend(v.children().iter().rev()),
                Self::Space(s) => {
                    let children: Vec<&Self> = s.children().collect();
                    stack.extend(children.into_iter().rev());
                }
                Self::Combined(c) => out.extend(c.members().iter().map(LeafPosition::node)),
            }
        }
        out
    }
}

/// Terminal wrapper: one segment at its layout position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafPosition {
    node: NodeId,
}

impl LeafPosition {
    /// Wraps `node`.
    #[must_use]
    pub fn new(node: NodeId) -> Self {
        Self { node }
    }

    /// The wrapped segment.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }
}

/// Wrapper around exactly one child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleWrapper {
    child: Box<NodeWrapper>,
}

impl SingleWrapper {
    /// Wraps `child`.
    #[must_use]
    pub fn new(child: NodeWrapper) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    /// The wrapped child.
    #[must_use]
    pub fn child(&self) -> &NodeWrapper {
        &self.child
    }
}

/// Children placed left to right.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HorizontalWrapper {
    children: Vec<NodeWrapper>,
}

impl HorizontalWrapper {
    /// Creates a horizontal sequence.
    #[must_use]
    pub fn new(children: Vec<NodeWrapper>) -> Self {
        Self { children }
    }

    /// Children in left-to-right order.
    #[must_use]
    pub fn children(&self) -> &[NodeWrapper] {
        &self.children
    }
}

/// Children stacked top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerticalWrapper {
    children: Vec<NodeWrapper>,
}

impl VerticalWrapper {
    /// Creates a vertical stack.
    #[must_use]
    pub fn new(children: Vec<NodeWrapper>) -> Self {
        Self { children }
    }

    /// Children in top-to-bottom order.
    #[must_use]
    pub fn children(&self) -> &[NodeWrapper] {
        &self.children
    }
}

/// One slot of a [`SpaceWrapper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceSlot {
    /// A child wrapper.
    Child(NodeWrapper),
    /// Explicit horizontal gap of the given width.
    Gap(u64),
}

/// Children placed left to right with explicit gaps between them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpaceWrapper {
    slots: Vec<SpaceSlot>,
}

impl SpaceWrapper {
    /// Creates a spaced sequence.
    #[must_use]
    pub fn new(slots: Vec<SpaceSlot>) -> Self {
        Self { slots }
    }

    /// All slots, gaps included, in order.
    #[must_use]
    pub fn slots(&self) -> &[SpaceSlot] {
        &self.slots
    }

    /// Child wrappers in order, gaps skipped.
    pub fn children(&self) -> impl Iterator<Item = &NodeWrapper> {
        self.slots.iter().filter_map(|slot| match slot {
            SpaceSlot::Child(w) => Some(w),
            SpaceSlot::Gap(_) => None,
        })
    }

    /// Sum of all gap widths.
    #[must_use]
    pub fn total_gap(&self) -> u64 {
        self.slots
            .iter()
            .map(|slot| match slot {
                SpaceSlot::Gap(w) => *w,
                SpaceSlot::Child(_) => 0,
            })
            .sum()
    }
}

/// Several segments merged into one renderable unit.
///
/// Produced only after filtering; members are opaque to edge data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedWrapper {
    members: Vec<LeafPosition>,
}

impl CombinedWrapper {
    /// Creates a combined unit; fails with [`LayoutError::EmptyCombined`]
    /// when `members` is empty.
    pub fn new(members: Vec<LeafPosition>) -> Result<Self, LayoutError> {
        if members.is_empty() {
            return Err(LayoutError::EmptyCombined);
        }
        Ok(Self { members })
    }

    /// Members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[LeafPosition] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn combined_requires_members() {
        assert_eq!(
            NodeWrapper::combined(std::iter::empty()),
            Err(LayoutError::EmptyCombined)
        );
    }

    #[test]
    fn leaf_ids_are_pre_order() {
        let tree = NodeWrapper::horizontal(vec![
            NodeWrapper::leaf(NodeId(1)),
            NodeWrapper::vertical(vec![
                NodeWrapper::single(NodeWrapper::leaf(NodeId(2))),
                NodeWrapper::combined([NodeId(3), NodeId(4)]).unwrap(),
            ]),
            NodeWrapper::space(vec![
                SpaceSlot::Gap(2),
                SpaceSlot::Child(NodeWrapper::leaf(NodeId(5))),
                SpaceSlot::Child(NodeWrapper::leaf(NodeId(6))),
            ]),
        ]);
        assert_eq!(
            tree.leaf_ids(),
            vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4), NodeId(5), NodeId(6)]
        );
        assert_eq!(tree.kind(), WrapperKind::Horizontal);
    }

    #[test]
    fn space_gaps_are_summed() {
        let space = SpaceWrapper::new(vec![
            SpaceSlot::Gap(2),
            SpaceSlot::Child(NodeWrapper::leaf(NodeId(1))),
            SpaceSlot::Gap(5),
        ]);
        assert_eq!(space.total_gap(), 7);
        assert_eq!(space.children().count(), 1);
    }
}
