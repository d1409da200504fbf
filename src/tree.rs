mod debug;
mod iter;
mod query;

pub use iter::*;

use nalgebra::Point3;

use crate::{bounds::Cube, error::Error, Float, NodeIndex, Octant};

/// Index of the root node within a non-empty arena.
pub(crate) const ROOT: NodeIndex = 0;

/// Tunables for tree construction.
///
/// Both trade pruning effectiveness against tree memory and depth: a node
/// keeps its first `min_node_points` points locally before routing anything
/// deeper, and no node ever sits below `max_depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildParams {
    /// Maximum node depth; insertion stops descending here.
    pub max_depth: u32,
    /// Points a node accumulates locally before routing into children.
    pub min_node_points: usize,
}

impl Default for BuildParams {
    fn default() -> Self {
        Self {
            max_depth: 10,
            min_node_points: 10,
        }
    }
}

/// One cubic region of the partition.
///
/// A node is a leaf iff all eight child slots are empty; children materialize
/// lazily, one octant at a time, as points route through.
#[derive(Debug, Clone)]
pub(crate) struct Node<L, R: Float> {
    pub(crate) bounds: Cube<R>,
    pub(crate) children: [Option<NodeIndex>; 8],
    pub(crate) points: Vec<(Point3<R>, L)>,
}

impl<L, R: Float> Node<L, R> {
    fn new(bounds: Cube<R>) -> Self {
        Self {
            bounds,
            children: [None; 8],
            points: Vec::new(),
        }
    }
}

/// A point octree over labeled 3D points.
///
/// Built once from parallel point/label arrays, immutable afterwards; every
/// query is a pure read, so a built tree can be shared freely across threads.
/// Nodes live in a flat arena addressed by [NodeIndex], children referring to
/// each other by index rather than ownership.
#[derive(Debug, Clone)]
pub struct Octree<L, R: Float> {
    nodes: Vec<Node<L, R>>,
    params: BuildParams,
    len: usize,
    height: u32,
}

impl<L: Clone, R: Float> Octree<L, R> {
    /// Build an index with default [BuildParams].
    ///
    /// # Errors
    /// * [Error::LabelCountMismatch] if the slices differ in length.
    pub fn build(points: &[Point3<R>], labels: &[L]) -> Result<Self, Error> {
        Self::from_labeled_points(points, labels, BuildParams::default())
    }

    /// Build an index over `points`, the `i`th tagged with `labels[i]`.
    ///
    /// Points are inserted in input order. Order affects the final shape of
    /// the tree, never the result of a query. An empty input produces an
    /// empty tree for which every query returns the empty set.
    ///
    /// # Errors
    /// * [Error::LabelCountMismatch] if the slices differ in length; no
    ///   partial tree is observable.
    pub fn from_labeled_points(
        points: &[Point3<R>],
        labels: &[L],
        params: BuildParams,
    ) -> Result<Self, Error> {
        if points.len() != labels.len() {
            return Err(Error::LabelCountMismatch {
                points: points.len(),
                labels: labels.len(),
            });
        }
        let mut tree = Self {
            nodes: Vec::new(),
            params,
            len: 0,
            height: 0,
        };
        if let Some(bounds) = Cube::from_points(points) {
            tree.nodes.push(Node::new(bounds));
            for (point, label) in points.iter().zip(labels) {
                tree.insert(*point, label.clone());
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            points = tree.len,
            nodes = tree.nodes.len(),
            height = tree.height,
            "built octree"
        );
        Ok(tree)
    }

    /// Store one point, walking down from the root.
    ///
    /// The point lands in the current node's local list as soon as any
    /// retention rule fires: the node is still short of `min_node_points`,
    /// the depth limit is reached, or the point sits outside the node's
    /// inscribed ball (too far out for finer subdivision to help). Otherwise
    /// it routes into the child named by its octant code, materializing that
    /// child if needed. Local points are never redistributed when a node
    /// later grows children; the shape is insertion-order dependent.
    fn insert(&mut self, point: Point3<R>, label: L) {
        let mut idx = ROOT;
        let mut depth = 0;
        loop {
            let node = &self.nodes[idx as usize];
            let bounds = node.bounds;
            let descend = depth < self.params.max_depth
                && node.points.len() >= self.params.min_node_points
                && bounds.encloses(&point);
            if !descend {
                self.nodes[idx as usize].points.push((point, label));
                self.len += 1;
                self.height = self.height.max(depth);
                return;
            }
            let oct = Octant::from_center(&bounds.center, &point);
            idx = match self.nodes[idx as usize].children[usize::from(oct)] {
                Some(child) => child,
                None => self.add_child(idx, oct),
            };
            depth += 1;
        }
    }

    /// Materialize the `oct` child of `parent`.
    fn add_child(&mut self, parent: NodeIndex, oct: Octant) -> NodeIndex {
        let child = self.nodes.len() as NodeIndex;
        let bounds = self.nodes[parent as usize].bounds.child(oct);
        self.nodes.push(Node::new(bounds));
        self.nodes[parent as usize].children[usize::from(oct)] = Some(child);
        child
    }
}

impl<R: Float> Octree<usize, R> {
    /// Index the vertices of a face soup: each face contributes one point
    /// per vertex, labeled with the face's position in `faces`.
    ///
    /// This is the shape mesh loaders hand over; a renderer can then ask for
    /// the faces near a focus point and draw exactly those.
    pub fn from_faces<F, V>(faces: F, params: BuildParams) -> Self
    where
        F: IntoIterator<Item = V>,
        V: AsRef<[Point3<R>]>,
    {
        let mut points = Vec::new();
        let mut labels = Vec::new();
        for (face, vertices) in faces.into_iter().enumerate() {
            for vertex in vertices.as_ref() {
                points.push(*vertex);
                labels.push(face);
            }
        }
        match Self::from_labeled_points(&points, &labels, params) {
            Ok(tree) => tree,
            // lengths are equal by construction
            Err(_) => unreachable!(),
        }
    }
}

impl<L, R: Float> Octree<L, R> {
    /// The number of indexed points.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of materialized nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The depth of the deepest node holding a point; never exceeds the
    /// configured `max_depth`.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The tunables this tree was built with.
    pub fn params(&self) -> BuildParams {
        self.params
    }

    /// Iterate through all stored (point, label) pairs, oldest node first.
    pub fn iter(&self) -> Points<L, R> {
        Points {
            nodes: self.nodes.iter(),
            current: Default::default(),
        }
    }
}
