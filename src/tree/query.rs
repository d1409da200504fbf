use std::collections::HashSet;
use std::hash::Hash;

use nalgebra::Point3;

use crate::bounds::distance_squared;
use crate::{Float, Octree};

use super::ROOT;

impl<L, R: Float> Octree<L, R>
where
    L: Clone + Eq + Hash,
{
    /// Collect the labels of every point lying strictly within `radius` of
    /// `query`.
    ///
    /// Labels shared by several matching points collapse into one entry. An
    /// empty tree or a non-positive radius yields the empty set; a query far
    /// outside the indexed region is not an error, it just matches nothing.
    pub fn query_radius(&self, query: &Point3<R>, radius: R) -> HashSet<L> {
        let mut out = HashSet::new();
        self.query_radius_into(query, radius, &mut out);
        out
    }

    /// [query_radius](Self::query_radius), writing into `out` so per-frame
    /// callers can reuse the allocation. `out` is cleared first.
    pub fn query_radius_into(&self, query: &Point3<R>, radius: R, out: &mut HashSet<L>) {
        out.clear();
        if self.nodes.is_empty() || radius <= R::ZERO {
            return;
        }
        let r2 = radius * radius;
        // the root takes no part in the pruning bound (its local points
        // predate any routing constraint), so traversal always scans it
        let mut stack = vec![ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx as usize];
            for (point, label) in &node.points {
                if distance_squared(point, query) < r2 {
                    out.insert(label.clone());
                }
            }
            for &child in node.children.iter().flatten() {
                let bounds = &self.nodes[child as usize].bounds;
                // nothing below `child` can sit nearer to `query` than
                // dist(query, center) - reach; skip subtrees that this bound
                // already puts at or beyond the radius
                let cutoff = radius + bounds.reach();
                if distance_squared(&bounds.center, query) < cutoff * cutoff {
                    stack.push(child);
                }
            }
        }
    }
}
