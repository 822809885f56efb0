use glam::{DMat3, DMat4, DVec3, DVec4};

use crate::{
    error::PoseError,
    so3::{left_jacobian_v, so3_exp},
};

/// Dimension of the Lie algebra se(3).
pub const SE3_TANGENT_SIZE: usize = 6;

/// Exponential map from se(3) to a homogeneous rigid transform.
///
/// # Arguments
///
/// * `delta` - The tangent vector `[rho, theta]` where `rho` is the translational part and
///   `theta` the axis-angle rotation.
///
/// # Returns
///
/// The 4x4 transform `[[R, V(theta) * rho], [0, 0, 0, 1]]` with `R = exp([theta]x)`.
pub fn se3_exp(delta: &[f64; 6]) -> DMat4 {
    let rho = DVec3::new(delta[0], delta[1], delta[2]);
    let theta = DVec3::new(delta[3], delta[4], delta[5]);

    let rotation = so3_exp(theta);
    let translation = left_jacobian_v(theta) * rho;

    rt_to_matrix(&rotation, &translation)
}

/// Exponential map from an se(3) tangent vector given as a slice.
///
/// Returns [`PoseError::WrongTangentSize`] unless the slice holds exactly 6 values.
pub fn se3_exp_from_slice(delta: &[f64]) -> Result<DMat4, PoseError> {
    let delta: &[f64; 6] = delta
        .try_into()
        .map_err(|_| PoseError::WrongTangentSize {
            expected: SE3_TANGENT_SIZE,
            got: delta.len(),
        })?;
    Ok(se3_exp(delta))
}

/// Assemble a homogeneous transform from a rotation and a translation.
pub fn rt_to_matrix(rotation: &DMat3, translation: &DVec3) -> DMat4 {
    let mut matrix = DMat4::from_mat3(*rotation);
    matrix.w_axis = DVec4::new(translation.x, translation.y, translation.z, 1.0);
    matrix
}

/// Split a homogeneous transform into its rotation block and translation column.
pub fn matrix_to_rt(matrix: &DMat4) -> (DMat3, DVec3) {
    (DMat3::from_mat4(*matrix), matrix.w_axis.truncate())
}
