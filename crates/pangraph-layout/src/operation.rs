// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Operations over wrapper trees (visitor-style double dispatch).
//!
//! An operation implements one handler per wrapper variant. Callers only
//! ever use [`WrapperOperation::apply`]; the wrapper calls back into the
//! handler for its own variant, so neither side inspects or casts the other.
//!
//! Every composite handler has a structural default that re-enters `apply`
//! for each child, passing the caller's `container` through unchanged. Only
//! the leaf handler is required: leaf behaviour is what distinguishes one
//! operation from another, and the compiler refuses an operation that
//! forgets it. A combined wrapper defaults to visiting each member as a
//! leaf, so no segment is silently skipped.

use crate::error::LayoutError;
use crate::wrapper::{
    CombinedWrapper, HorizontalWrapper, LeafPosition, NodeWrapper, SingleWrapper, SpaceWrapper,
    VerticalWrapper, WrapperKind,
};

/// A traversal behaviour dispatched per wrapper variant.
///
/// `container` is the nearest enclosing wrapper as seen by the caller of
/// [`apply`](Self::apply), or `None` at the root of the walk.
pub trait WrapperOperation {
    /// Name used in errors and logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Generic entry point: dispatches to the handler for `wrapper`'s variant.
    ///
    /// This should most likely be left untouched.
    fn apply<'w>(
        &mut self,
        wrapper: &'w NodeWrapper,
        container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        wrapper.accept(self, container)
    }

    /// Handles a leaf. Required: there is no meaningful default.
    fn visit_leaf<'w>(
        &mut self,
        leaf: &'w LeafPosition,
        container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError>;

    /// Handles a single wrapper. Default: apply to the child.
    fn visit_single<'w>(
        &mut self,
        wrapper: &'w SingleWrapper,
        container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        self.apply(wrapper.child(), container)
    }

    /// Handles a horizontal wrapper. Default: apply to each child, left to right.
    fn visit_horizontal<'w>(
        &mut self,
        wrapper: &'w HorizontalWrapper,
        container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        for child in wrapper.children() {
            self.apply(child, container)?;
        }
        Ok(())
    }

    /// Handles a vertical wrapper. Default: apply to each child, top to bottom.
    fn visit_vertical<'w>(
        &mut self,
        wrapper: &'w VerticalWrapper,
        container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        for child in wrapper.children() {
            self.apply(child, container)?;
        }
        Ok(())
    }

    /// Handles a space wrapper. Default: apply to each child in order; gaps
    /// pass through.
    fn visit_space<'w>(
        &mut self,
        wrapper: &'w SpaceWrapper,
        container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        for child in wrapper.children() {
            self.apply(child, container)?;
        }
        Ok(())
    }

    /// Handles a combined wrapper. Default: visit every member as a leaf.
    fn visit_combined<'w>(
        &mut self,
        wrapper: &'w CombinedWrapper,
        container: Option<&'w NodeWrapper>,
    ) -> Result<(), LayoutError> {
        for member in wrapper.members() {
            self.visit_leaf(member, container)?;
        }
        Ok(())
    }

    /// Builds the error an operation returns for a variant it cannot handle.
    fn unsupported(&self, variant: WrapperKind) -> LayoutError {
        LayoutError::UnsupportedWrapperVariant {
            operation: self.name(),
            variant,
        }
    }
}

/// Runs `op` over the tree rooted at `root` (no enclosing container).
pub fn run<O>(op: &mut O, root: &NodeWrapper) -> Result<(), LayoutError>
where
    O: WrapperOperation + ?Sized,
{
    op.apply(root, None)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::ident::NodeId;
    use crate::wrapper::SpaceSlot;

    #[derive(Default)]
    struct LeafLog {
        seen: Vec<(NodeId, Option<WrapperKind>)>,
    }

    impl WrapperOperation for LeafLog {
        fn visit_leaf<'w>(
            &mut self,
            leaf: &'w LeafPosition,
            container: Option<&'w NodeWrapper>,
        ) -> Result<(), LayoutError> {
            self.seen.push((leaf.node(), container.map(NodeWrapper::kind)));
            Ok(())
        }
    }

    #[test]
    fn defaults_reach_every_leaf_in_order() {
        let tree = NodeWrapper::vertical(vec![
            NodeWrapper::horizontal(vec![
                NodeWrapper::leaf(NodeId(1)),
                NodeWrapper::single(NodeWrapper::leaf(NodeId(2))),
            ]),
            NodeWrapper::space(vec![
                SpaceSlot::Child(NodeWrapper::leaf(NodeId(3))),
                SpaceSlot::Gap(4),
                SpaceSlot::Child(NodeWrapper::combined([NodeId(4), NodeId(5)]).unwrap()),
            ]),
        ]);
        let mut op = LeafLog::default();
        run(&mut op, &tree).unwrap();
        let ids: Vec<_> = op.seen.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, tree.leaf_ids());
        assert!(op.seen.iter().all(|(_, c)| c.is_none()));
    }

    #[test]
    fn container_is_passed_through_unchanged() {
        let parent = NodeWrapper::vertical(vec![]);
        let child = NodeWrapper::horizontal(vec![
            NodeWrapper::leaf(NodeId(1)),
            NodeWrapper::single(NodeWrapper::leaf(NodeId(2))),
        ]);
        let mut op = LeafLog::default();
        op.apply(&child, Some(&parent)).unwrap();
        assert_eq!(
            op.seen,
            vec![
                (NodeId(1), Some(WrapperKind::Vertical)),
                (NodeId(2), Some(WrapperKind::Vertical)),
            ]
        );
    }

    struct RejectsCombined;

    impl WrapperOperation for RejectsCombined {
        fn name(&self) -> &'static str {
            "rejects-combined"
        }

        fn visit_leaf<'w>(
            &mut self,
            _leaf: &'w LeafPosition,
            _container: Option<&'w NodeWrapper>,
        ) -> Result<(), LayoutError> {
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

    #[test]
    fn errors_propagate_out_of_nested_children() {
        let tree = NodeWrapper::horizontal(vec![
            NodeWrapper::leaf(NodeId(1)),
            NodeWrapper::single(NodeWrapper::combined([NodeId(2)]).unwrap()),
        ]);
        let err = run(&mut RejectsCombined, &tree).unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnsupportedWrapperVariant {
                operation: "rejects-combined",
                variant: WrapperKind::Combined,
            }
        );
    }

    #[test]
    fn operations_work_as_trait_objects() {
        let tree = NodeWrapper::horizontal(vec![NodeWrapper::leaf(NodeId(8))]);
        let mut op = LeafLog::default();
        {
            let dyn_op: &mut dyn WrapperOperation = &mut op;
            run(dyn_op, &tree).unwrap();
        }
        assert_eq!(op.seen, vec![(NodeId(8), None)]);
    }
}
