//! Recursive partition node: a leaf of points or four owned quadrant children.

use tracing::debug;

use crate::error::{GridMapError, Result};
use crate::point::Point;
use crate::region::{Region, radius_squared};

/// Shape of a subtree, as reported by [`GridMap::stats`](crate::GridMap::stats).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Points held by all leaves.
    pub points: usize,
    /// Nodes still in the leaf state.
    pub leaf_nodes: usize,
    /// Nodes that have split.
    pub internal_nodes: usize,
    /// Depth of the deepest node; the root is at depth 0.
    pub max_depth: u32,
    /// Point count of the fullest leaf.
    pub largest_leaf: usize,
}

/// Node contents. A node is a leaf or internal, never both.
#[derive(Debug, Clone)]
enum NodeState {
    Leaf(Vec<Point>),
    /// Children in [`Quadrant::ALL`](crate::Quadrant::ALL) order.
    Internal(Box<[PartitionNode; 4]>),
}

#[derive(Debug, Clone)]
pub(crate) struct PartitionNode {
    region: Region,
    threshold: usize,
    /// Splits still allowed below this node.
    depth_budget: u32,
    state: NodeState,
}

impl PartitionNode {
    /// Creates an empty leaf.
    pub(crate) fn new(region: Region, threshold: usize, depth_budget: u32) -> Self {
        Self {
            region,
            threshold,
            depth_budget,
            state: NodeState::Leaf(Vec::new()),
        }
    }

    pub(crate) fn region(&self) -> Region {
        self.region
    }

    /// Stores `point` in the leaf whose region contains it, splitting leaves
    /// that overflow.
    ///
    /// Fails without touching the tree if the point is outside this node.
    pub(crate) fn insert(&mut self, point: Point) -> Result<()> {
        if !self.region.contains(point.x(), point.y()) {
            return Err(GridMapError::OutOfBounds {
                x: point.x(),
                y: point.y(),
                region: self.region,
            });
        }
        self.place(point);
        Ok(())
    }

    /// Insert for a point already known to be inside this node.
    fn place(&mut self, point: Point) {
        debug_assert!(
            self.region.contains(point.x(), point.y()),
            "point routed to a node that does not contain it"
        );
        match &mut self.state {
            NodeState::Leaf(points) => {
                points.push(point);
                let overflowing = points.len() > self.threshold;
                if overflowing && self.depth_budget > 0 {
                    self.split();
                }
            }
            NodeState::Internal(children) => {
                let quadrant = self.region.quadrant_of(point.x(), point.y());
                children[quadrant.index()].place(point);
            }
        }
    }

    /// Turns this leaf into an internal node and hands its points down.
    ///
    /// Regions too thin to bisect stay leaves and keep accumulating.
    fn split(&mut self) {
        let Some(quadrants) = self.region.quadrants() else {
            return;
        };
        let threshold = self.threshold;
        let child_budget = self.depth_budget - 1;
        let children = quadrants.map(|region| Self::new(region, threshold, child_budget));
        let previous = std::mem::replace(&mut self.state, NodeState::Internal(Box::new(children)));
        let NodeState::Leaf(points) = previous else {
            return;
        };
        debug!(
            region = %self.region,
            depth_budget = self.depth_budget,
            points = points.len(),
            "splitting partition node"
        );
        for point in points {
            self.place(point);
        }
    }

    /// Calls `visit` for every point within distance `r` of `(cx, cy)`.
    ///
    /// Subtrees whose region misses the disk are skipped without looking at
    /// their points.
    pub(crate) fn visit_circle<F>(&self, cx: u32, cy: u32, r: u32, visit: &mut F)
    where
        F: FnMut(&Point),
    {
        if !self.region.intersects_circle(cx, cy, r) {
            return;
        }
        match &self.state {
            NodeState::Leaf(points) => {
                let r_sq = radius_squared(r);
                for point in points {
                    if point.distance_squared_to(cx, cy) <= r_sq {
                        visit(point);
                    }
                }
            }
            NodeState::Internal(children) => {
                for child in children.iter() {
                    child.visit_circle(cx, cy, r, visit);
                }
            }
        }
    }

    /// Appends the value of every point within distance `r` of `(cx, cy)`.
    pub(crate) fn query(&self, cx: u32, cy: u32, r: u32, acc: &mut Vec<i32>) {
        self.visit_circle(cx, cy, r, &mut |point| acc.push(point.value()));
    }

    /// Calls `visit` for every point in the inclusive rectangle
    /// `[min_x, max_x] x [min_y, max_y]`.
    pub(crate) fn visit_rect<F>(&self, min_x: u32, min_y: u32, max_x: u32, max_y: u32, visit: &mut F)
    where
        F: FnMut(&Point),
    {
        if !self.region.intersects_rect(min_x, min_y, max_x, max_y) {
            return;
        }
        if self.region.within_rect(min_x, min_y, max_x, max_y) {
            self.visit_all(visit);
            return;
        }
        match &self.state {
            NodeState::Leaf(points) => {
                for point in points {
                    if (min_x..=max_x).contains(&point.x()) && (min_y..=max_y).contains(&point.y()) {
                        visit(point);
                    }
                }
            }
            NodeState::Internal(children) => {
                for child in children.iter() {
                    child.visit_rect(min_x, min_y, max_x, max_y, visit);
                }
            }
        }
    }

    /// Calls `visit` for every point in this subtree.
    pub(crate) fn visit_all<F>(&self, visit: &mut F)
    where
        F: FnMut(&Point),
    {
        match &self.state {
            NodeState::Leaf(points) => {
                for point in points {
                    visit(point);
                }
            }
            NodeState::Internal(children) => {
                for child in children.iter() {
                    child.visit_all(visit);
                }
            }
        }
    }

    pub(crate) fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.collect_stats(0, &mut stats);
        stats
    }

    fn collect_stats(&self, depth: u32, stats: &mut TreeStats) {
        stats.max_depth = stats.max_depth.max(depth);
        match &self.state {
            NodeState::Leaf(points) => {
                stats.leaf_nodes += 1;
                stats.points += points.len();
                stats.largest_leaf = stats.largest_leaf.max(points.len());
            }
            NodeState::Internal(children) => {
                stats.internal_nodes += 1;
                for child in children.iter() {
                    child.collect_stats(depth + 1, stats);
                }
            }
        }
    }
}

#[cfg(test)]
impl PartitionNode {
    pub(crate) fn depth_budget(&self) -> u32 {
        self.depth_budget
    }

    pub(crate) fn points(&self) -> Option<&[Point]> {
        match &self.state {
            NodeState::Leaf(points) => Some(points.as_slice()),
            NodeState::Internal(_) => None,
        }
    }

    pub(crate) fn children(&self) -> Option<&[Self; 4]> {
        match &self.state {
            NodeState::Leaf(_) => None,
            NodeState::Internal(children) => Some(&**children),
        }
    }
}
