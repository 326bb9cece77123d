// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed reconciliation of animated node positions.
//!
//! [`NodeSet`] owns one [`AnimatedNode`] per currently rendered entry and is
//! the reason data updates animate instead of restarting: on every update the
//! new entries are matched against the existing nodes **by key**, so an entry
//! that moved, changed value, or kept its place retains the same node — and
//! with it whatever animation is already in flight. Keys present only in the
//! new data get fresh nodes; keys that vanished drop their nodes immediately.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Point;

use crate::anim::{AnimVar, Tween};
use crate::data::{EntryKey, LineGraphData};
use crate::layout::Projection;

/// The animated on-screen position of one data entry.
///
/// X and Y are independent channels: they may be mid-transition at the same
/// time with different remaining progress.
#[derive(Clone, Debug)]
pub struct AnimatedNode {
    key: EntryKey,
    x: AnimVar,
    y: AnimVar,
}

impl AnimatedNode {
    fn at(key: EntryKey, target: Point, tween: Tween) -> Self {
        Self {
            key,
            x: AnimVar::new(target.x, tween),
            y: AnimVar::new(target.y, tween),
        }
    }

    /// The key of the entry this node represents.
    pub fn key(&self) -> EntryKey {
        self.key
    }

    /// The current interpolated position.
    pub fn position(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    /// The position this node is converging toward.
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    /// Returns `true` when neither channel is in flight.
    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}

/// The ordered, keyed list of [`AnimatedNode`]s.
///
/// Node order always follows the latest reconciled data order, because X
/// placement is index-based: a reorder request must reorder nodes, not just
/// retarget them.
#[derive(Clone, Debug)]
pub struct NodeSet {
    nodes: Vec<AnimatedNode>,
    tween: Tween,
}

impl NodeSet {
    /// Creates an empty set using the default data-transition tween.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            tween: Tween::default(),
        }
    }

    /// Sets the tween applied to data-transition movements.
    pub fn with_tween(mut self, tween: Tween) -> Self {
        self.tween = tween;
        self
    }

    /// Returns the nodes in draw order.
    pub fn nodes(&self) -> &[AnimatedNode] {
        &self.nodes
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when no entry is rendered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Diffs `data` against the current nodes by key.
    ///
    /// Retained keys keep their node and animate toward the newly projected
    /// target from wherever they are right now (mid-flight retargets resume,
    /// they do not restart). New keys get a node initialized directly at its
    /// target; the shared reveal fade covers its first appearance. Vanished
    /// keys drop their node with no exit transition. Afterwards node order
    /// matches `data` order exactly.
    ///
    /// Keys must be unique within `data`; with duplicates, which occurrence
    /// keeps the existing node is unspecified.
    pub fn reconcile(&mut self, data: &LineGraphData, projection: &Projection) {
        let mut existing: HashMap<EntryKey, AnimatedNode> =
            self.nodes.drain(..).map(|node| (node.key, node)).collect();

        self.nodes.reserve(data.len());
        for (index, entry) in data.entries().iter().enumerate() {
            let target = projection.point(index, entry.value);
            let node = match existing.remove(&entry.key) {
                Some(mut node) => {
                    node.x.animate_to(target.x);
                    node.y.animate_to(target.y);
                    node
                }
                None => AnimatedNode::at(entry.key, target, self.tween),
            };
            self.nodes.push(node);
        }
        // Leftovers in `existing` are the removed keys; dropping the map is
        // their immediate, unanimated exit.
    }

    /// Follows a moving growth factor without stacking tweens.
    ///
    /// During the reveal, the growth easing moves every Y target a little each
    /// frame. Settled nodes snap to the recomputed target (the easing itself
    /// is the animation); nodes still mid-flight from a data update are
    /// retargeted smoothly instead. X does not depend on the factor and is
    /// left alone.
    pub fn apply_growth(&mut self, data: &LineGraphData, projection: &Projection) {
        for (node, entry) in self.nodes.iter_mut().zip(data.entries()) {
            debug_assert_eq!(node.key, entry.key, "nodes out of sync with data");
            let y = projection.value_y(entry.value);
            if node.y.is_settled() {
                node.y.snap_to(y);
            } else {
                node.y.animate_to(y);
            }
        }
    }

    /// Advances every node channel by `dt` seconds; returns `true` while any
    /// is still in flight.
    pub fn tick(&mut self, dt: f64) -> bool {
        let mut active = false;
        for node in &mut self.nodes {
            active |= node.x.tick(dt);
            active |= node.y.tick(dt);
        }
        active
    }
}

impl Default for NodeSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Size;

    use super::*;
    use crate::data::GraphEntry;
    use crate::ease::Easing;

    fn project(data: &LineGraphData, factor: f64) -> Projection {
        Projection::new(Size::new(300.0, 100.0), data, factor)
    }

    fn linear_set(duration: f64) -> NodeSet {
        NodeSet::new().with_tween(Tween::new(duration).with_easing(Easing::Linear))
    }

    #[test]
    fn first_reconcile_creates_settled_nodes_at_target() {
        let data = LineGraphData::new(vec![
            GraphEntry::new(1, 1.0),
            GraphEntry::new(2, 2.0),
            GraphEntry::new(3, 3.0),
        ]);
        let mut set = NodeSet::new();
        let proj = project(&data, 1.0);
        set.reconcile(&data, &proj);

        assert_eq!(set.len(), 3);
        for (index, node) in set.nodes().iter().enumerate() {
            assert!(node.is_settled());
            assert_eq!(node.position(), proj.point(index, data.entries()[index].value));
        }
    }

    #[test]
    fn reconcile_is_idempotent() {
        let data = LineGraphData::new(vec![GraphEntry::new(1, 1.0), GraphEntry::new(2, 2.0)]);
        let mut set = linear_set(1.0);
        let proj = project(&data, 1.0);
        set.reconcile(&data, &proj);
        let before: Vec<Point> = set.nodes().iter().map(AnimatedNode::position).collect();

        set.reconcile(&data, &proj);
        set.tick(0.5);
        let after: Vec<Point> = set.nodes().iter().map(AnimatedNode::position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn removal_and_reorder_preserve_node_identity() {
        let first = LineGraphData::new(vec![
            GraphEntry::new(1, 1.0),
            GraphEntry::new(2, 2.0),
            GraphEntry::new(3, 3.0),
        ]);
        let mut set = linear_set(1.0);
        set.reconcile(&first, &project(&first, 1.0));
        let k1_before = set.nodes()[0].position();
        let k3_before = set.nodes()[2].position();

        // k2 removed, order swapped.
        let second = LineGraphData::new(vec![GraphEntry::new(3, 3.0), GraphEntry::new(1, 1.0)]);
        let proj = project(&second, 1.0);
        set.reconcile(&second, &proj);

        assert_eq!(set.len(), 2);
        assert_eq!(set.nodes()[0].key(), EntryKey(3));
        assert_eq!(set.nodes()[1].key(), EntryKey(1));
        // Both survivors keep their animated state: they start exactly where
        // they were and converge on the reprojected slots.
        assert_eq!(set.nodes()[0].position(), k3_before);
        assert_eq!(set.nodes()[1].position(), k1_before);
        assert_eq!(set.nodes()[0].target(), proj.point(0, 3.0));
        assert_eq!(set.nodes()[1].target(), proj.point(1, 1.0));
    }

    #[test]
    fn update_mid_flight_retargets_from_current_position() {
        let first = LineGraphData::new(vec![GraphEntry::new(1, 0.0), GraphEntry::new(2, 4.0)]);
        let mut set = linear_set(1.0);
        set.reconcile(&first, &project(&first, 1.0));

        let second = LineGraphData::new(vec![GraphEntry::new(1, 4.0), GraphEntry::new(2, 0.0)]);
        set.reconcile(&second, &project(&second, 1.0));
        set.tick(0.5);
        let halfway = set.nodes()[0].position();
        assert!(!set.nodes()[0].is_settled());

        // Third update arrives mid-transition; the node resumes from where it
        // is, not from where the previous transition started.
        let third = LineGraphData::new(vec![GraphEntry::new(1, 2.0), GraphEntry::new(2, 2.0)]);
        set.reconcile(&third, &project(&third, 1.0));
        assert_eq!(set.nodes()[0].position(), halfway);
    }

    #[test]
    fn new_keys_appear_at_their_target() {
        let first = LineGraphData::new(vec![GraphEntry::new(1, 1.0)]);
        let mut set = linear_set(1.0);
        set.reconcile(&first, &project(&first, 1.0));

        let second = LineGraphData::new(vec![GraphEntry::new(1, 1.0), GraphEntry::new(9, 5.0)]);
        let proj = project(&second, 1.0);
        set.reconcile(&second, &proj);
        let inserted = &set.nodes()[1];
        assert_eq!(inserted.key(), EntryKey(9));
        assert!(inserted.is_settled());
        assert_eq!(inserted.position(), proj.point(1, 5.0));
    }

    #[test]
    fn growth_snaps_settled_nodes_and_retargets_moving_ones() {
        let data = LineGraphData::new(vec![GraphEntry::new(1, 1.0), GraphEntry::new(2, 3.0)]);
        let mut set = linear_set(1.0);
        set.reconcile(&data, &project(&data, 0.0));
        assert!(set.nodes().iter().all(AnimatedNode::is_settled));

        let grown = project(&data, 0.5);
        set.apply_growth(&data, &grown);
        for (index, node) in set.nodes().iter().enumerate() {
            assert!(node.is_settled());
            assert_eq!(
                node.position().y,
                grown.value_y(data.entries()[index].value)
            );
        }
    }
}
