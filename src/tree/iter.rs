use std::iter::FusedIterator;

use nalgebra::Point3;

use crate::Float;

use super::Node;

/// An iterator over every (point, label) pair in an
/// [Octree](crate::Octree), in arena order (oldest node first).
pub struct Points<'tree, L, R: Float> {
    pub(crate) nodes: std::slice::Iter<'tree, Node<L, R>>,
    pub(crate) current: std::slice::Iter<'tree, (Point3<R>, L)>,
}

impl<'tree, L, R: Float> Iterator for Points<'tree, L, R> {
    type Item = (&'tree Point3<R>, &'tree L);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((point, label)) = self.current.next() {
                return Some((point, label));
            }
            self.current = self.nodes.next()?.points.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.current.len(), None)
    }
}

impl<'tree, L, R: Float> FusedIterator for Points<'tree, L, R> {}
