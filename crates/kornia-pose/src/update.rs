use serde::{Deserialize, Serialize};

use crate::{
    camera::PoseCamera,
    se3::{matrix_to_rt, rt_to_matrix, se3_exp},
};

/// Default norm of the tangent update below which the pose is considered converged.
pub const DEFAULT_CONVERGED_THRESHOLD: f64 = 5e-4;

/// Parameters of the pose update step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePoseConfig {
    /// Convergence is reported when the norm of the 6D update is strictly below this value.
    pub converged_threshold: f64,
}

impl Default for UpdatePoseConfig {
    fn default() -> Self {
        Self {
            converged_threshold: DEFAULT_CONVERGED_THRESHOLD,
        }
    }
}

/// Fold the pending tangent update of a camera into its pose.
///
/// The update `delta = [trans_delta, rot_delta]` is applied on the left of the current
/// world-to-camera transform, `T_new = exp(delta) * T_w2c`, i.e. it is expressed in the
/// world frame. Both pending deltas are zeroed afterwards, whether or not the step converged.
///
/// # Arguments
///
/// * `camera` - The camera whose pose is updated in place.
/// * `converged_threshold` - Norm of the update below which the step is considered converged.
///
/// # Returns
///
/// `true` if the norm of the consumed update is below `converged_threshold`.
pub fn update_pose<C: PoseCamera + ?Sized>(camera: &mut C, converged_threshold: f64) -> bool {
    let trans_delta = camera.trans_delta();
    let rot_delta = camera.rot_delta();
    let delta = [
        trans_delta.x,
        trans_delta.y,
        trans_delta.z,
        rot_delta.x,
        rot_delta.y,
        rot_delta.z,
    ];

    let world_to_camera = rt_to_matrix(&camera.rotation(), &camera.translation());
    let new_world_to_camera = se3_exp(&delta) * world_to_camera;
    let (new_rotation, new_translation) = matrix_to_rt(&new_world_to_camera);

    let delta_norm = delta.iter().map(|d| d * d).sum::<f64>().sqrt();
    let converged = delta_norm < converged_threshold;
    log::debug!("pose update delta norm: {delta_norm:e}, converged: {converged}");

    camera.update_rt(new_rotation, new_translation);
    camera.reset_deltas();

    converged
}

/// Same as [`update_pose`] with the threshold taken from a [`UpdatePoseConfig`].
pub fn update_pose_with_config<C: PoseCamera + ?Sized>(
    camera: &mut C,
    config: &UpdatePoseConfig,
) -> bool {
    update_pose(camera, config.converged_threshold)
}
