use std::fmt::Display;

use crate::{Float, Octree};

use super::ROOT;

impl<L, R: Float + Display> Display for Octree<L, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Octree ({} points / {} nodes, height {}) {{",
            self.len,
            self.nodes.len(),
            self.height,
        )?;
        if self.nodes.is_empty() {
            return write!(f, "}}");
        }
        let mut stack = vec![(ROOT, 0usize)];
        while let Some((idx, depth)) = stack.pop() {
            let node = &self.nodes[idx as usize];
            let indent = "  ".repeat(depth + 1);
            write!(
                f,
                "\n{indent}<{idx}: size {}, {} local>",
                node.bounds.size,
                node.points.len(),
            )?;
            for &child in node.children.iter().rev().flatten() {
                stack.push((child, depth + 1));
            }
        }
        write!(f, "\n}}")
    }
}
