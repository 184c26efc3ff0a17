// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Relative order of the members of combined units.
use crate::error::LayoutError;
use crate::ident::NodeId;
use crate::operation::WrapperOperation;
use crate::view::FilteredView;
use crate::wrapper::{CombinedWrapper, LeafPosition, NodeWrapper};

/// Orders the members of every combined wrapper left to right, then by
/// lane, then by id.
///
/// Runs against a [`FilteredView`], so it cannot consult adjacency that may
/// point outside the filtered picture.
pub struct CombinedOrdering<'g> {
    view: FilteredView<'g>,
    orders: Vec<Vec<NodeId>>,
}

impl<'g> CombinedOrdering<'g> {
    /// Orders against `view`.
    #[must_use]
    pub fn new(view: FilteredView<'g>) -> Self {
        Self {
            view,
            orders: Vec::new(),
        }
    }

    /// One ordered member list per combined wrapper, in visiting order.
    #[must_use]
    pub fn orders(&self) -> &[Vec<NodeId>] {
        &self.orders
    }
}

impl WrapperOperation for CombinedOrdering<'_> {
    fn name(&self) -> &'static str {
        "combined-ordering"
    }

    // Standalone leaves keep their place; they only have to be visible.
    fn visit_leaf<'w>(
        &mut self,
        leaf: &'w LeafPosition,
        _container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        if self.view.contains(leaf.node()) {
            Ok(())
        } else {
            Err(LayoutError::UnknownNode(leaf.node()))
        }
    }

    fn visit_combined<'w>(
        &mut self,
        wrapper: &'w CombinedWrapper,
        _container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        let mut keyed = Vec::with_capacity(wrapper.members().len());
        for member in wrapper.members() {
            let id = member.node();
            let node = self.view.node(id).ok_or(LayoutError::UnknownNode(id))?;
            let x = node.x_start().ok_or(LayoutError::Unpositioned { node: id })?;
            keyed.push((x, node.y_order(), id));
        }
        keyed.sort_unstable();
        self.orders.push(keyed.into_iter().map(|(_, _, id)| id).collect());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::graph::SegmentGraph;
    use crate::node::SegmentNode;
    use crate::operation::run;

    #[test]
    fn members_are_ordered_by_position_then_lane() {
        let mut g = SegmentGraph::new();
        for (id, w) in [(1, 3), (2, 2), (3, 2), (4, 1)] {
            g.insert_node(SegmentNode::new(NodeId(id), None, 0, 0, vec![b'T'; w]).unwrap())
                .unwrap();
        }
        // 1 -> 2, 1 -> 3 (both start at 4), 2 -> 4, 3 -> 4.
        for (a, b) in [(1, 2), (1, 3), (2, 4), (3, 4)] {
            g.connect(NodeId(a), NodeId(b)).unwrap();
        }
        g.layout_all().unwrap();
        g.set_y_order(NodeId(2), 1).unwrap();

        let tree = NodeWrapper::horizontal(vec![
            NodeWrapper::leaf(NodeId(1)),
            NodeWrapper::combined([NodeId(4), NodeId(2), NodeId(3)]).unwrap(),
        ]);
        let view = g.filtered([NodeId(1), NodeId(2), NodeId(3), NodeId(4)]);
        let mut op = CombinedOrdering::new(view);
        run(&mut op, &tree).unwrap();
        assert_eq!(op.orders(), &[vec![NodeId(3), NodeId(2), NodeId(4)]]);
    }

    #[test]
    fn members_outside_the_view_are_rejected() {
        let mut g = SegmentGraph::new();
        g.insert_node(SegmentNode::new(NodeId(1), None, 0, 0, &b"A"[..]).unwrap())
            .unwrap();
        g.insert_node(SegmentNode::new(NodeId(2), None, 0, 0, &b"A"[..]).unwrap())
            .unwrap();
        g.layout_all().unwrap();
        let tree = NodeWrapper::combined([NodeId(1), NodeId(2)]).unwrap();
        let mut op = CombinedOrdering::new(g.filtered([NodeId(1)]));
        assert_eq!(
            run(&mut op, &tree),
            Err(LayoutError::UnknownNode(NodeId(2)))
        );
    }

    #[test]
    fn unpositioned_members_are_rejected() {
        let mut g = SegmentGraph::new();
        g.insert_node(SegmentNode::new(NodeId(1), None, 0, 0, &b"A"[..]).unwrap())
            .unwrap();
        let tree = NodeWrapper::combined([NodeId(1)]).unwrap();
        let mut op = CombinedOrdering::new(g.filtered([NodeId(1)]));
        assert_eq!(
            run(&mut op, &tree),
            Err(LayoutError::Unpositioned { node: NodeId(1) })
        );
    }
}
