/// Errors surfaced while building an [Octree](crate::Octree).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("point/label count mismatch: {points} points, {labels} labels")]
    LabelCountMismatch { points: usize, labels: usize },
}
