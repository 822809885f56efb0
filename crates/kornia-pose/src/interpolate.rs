use glam::{DMat3, DMat4, DQuat};

use crate::{
    error::PoseError,
    se3::{matrix_to_rt, rt_to_matrix},
};

/// Number of previous poses consumed by the extrapolation.
pub const POSE_HISTORY_SIZE: usize = 2;

/// Extrapolate the pose of the next frame from the two previous ones.
///
/// Assumes constant velocity: the translation is extrapolated linearly and so are the raw
/// quaternion coefficients, `q = q_b + (q_b - q_a)`. The extrapolated quaternion is not a
/// unit quaternion; it is normalized when converted back to a rotation matrix. This is a
/// coarse initial guess meant to be refined by the tracker, not a geodesic interpolation.
///
/// The order of the arguments matters and is not checked: swapping them extrapolates
/// backwards from `pose_a`.
///
/// # Arguments
///
/// * `pose_a` - The older pose as a homogeneous transform.
/// * `pose_b` - The newer pose as a homogeneous transform.
///
/// # Returns
///
/// The homogeneous transform one step beyond `pose_b`.
pub fn interpolate_poses(pose_a: &DMat4, pose_b: &DMat4) -> DMat4 {
    let (rotation_a, translation_a) = matrix_to_rt(pose_a);
    let (rotation_b, translation_b) = matrix_to_rt(pose_b);

    let q_a = DQuat::from_mat3(&rotation_a);
    let q_b = DQuat::from_mat3(&rotation_b);
    let q_init = q_b + (q_b - q_a);

    let translation_init = translation_b + (translation_b - translation_a);

    rt_to_matrix(&DMat3::from_quat(q_init.normalize()), &translation_init)
}

/// Extrapolate the next pose from a history ordered oldest first.
///
/// Returns [`PoseError::WrongNumberOfPoses`] unless `poses` holds exactly two transforms.
pub fn interpolate_pose_history(poses: &[DMat4]) -> Result<DMat4, PoseError> {
    match poses {
        [pose_a, pose_b] => Ok(interpolate_poses(pose_a, pose_b)),
        _ => Err(PoseError::WrongNumberOfPoses {
            expected: POSE_HISTORY_SIZE,
            got: poses.len(),
        }),
    }
}
