/// An error type for the pose module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PoseError {
    /// The tangent vector does not have the dimension of the group's Lie algebra.
    #[error("tangent vector has wrong size: expected {expected}, got {got}")]
    WrongTangentSize {
        /// The dimension of the Lie algebra.
        expected: usize,
        /// The length of the provided slice.
        got: usize,
    },

    /// The pose history does not hold the number of poses needed to extrapolate.
    #[error("pose history has wrong length: expected {expected} poses, got {got}")]
    WrongNumberOfPoses {
        /// The number of poses consumed by the extrapolation.
        expected: usize,
        /// The number of poses provided.
        got: usize,
    },
}
