use glam::{DMat3, DMat4, DVec3};
use serde::{Deserialize, Serialize};

use crate::se3::rt_to_matrix;

/// The operations a camera has to expose to receive pose updates.
///
/// The pose is world-to-camera: `x_cam = rotation * x_world + translation`. The deltas
/// accumulate the tangent update estimated by the optimizer that has not yet been folded
/// into the pose.
///
/// Implementations are not synchronized; callers sharing a camera between optimizer
/// steps must serialize access themselves.
pub trait PoseCamera {
    /// Current world-to-camera rotation.
    fn rotation(&self) -> DMat3;

    /// Current world-to-camera translation.
    fn translation(&self) -> DVec3;

    /// Pending rotational update (axis-angle).
    fn rot_delta(&self) -> DVec3;

    /// Pending translational update.
    fn trans_delta(&self) -> DVec3;

    /// Replace the stored pose.
    ///
    /// After the call `rotation()` and `translation()` must return exactly the given values.
    fn update_rt(&mut self, rotation: DMat3, translation: DVec3);

    /// Zero both pending deltas.
    fn reset_deltas(&mut self);
}

/// Plain camera pose with its pending optimizer update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// World-to-camera rotation.
    pub rotation: DMat3,
    /// World-to-camera translation.
    pub translation: DVec3,
    /// Pending rotational update (axis-angle).
    pub rot_delta: DVec3,
    /// Pending translational update.
    pub trans_delta: DVec3,
}

impl CameraPose {
    /// Create a camera at the given pose with no pending update.
    pub fn new(rotation: DMat3, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
            rot_delta: DVec3::ZERO,
            trans_delta: DVec3::ZERO,
        }
    }

    /// Camera at the world origin with no pending update.
    pub fn identity() -> Self {
        Self::new(DMat3::IDENTITY, DVec3::ZERO)
    }

    /// The world-to-camera pose as a homogeneous transform.
    pub fn world_to_camera(&self) -> DMat4 {
        rt_to_matrix(&self.rotation, &self.translation)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::identity()
    }
}

impl PoseCamera for CameraPose {
    fn rotation(&self) -> DMat3 {
        self.rotation
    }

    fn translation(&self) -> DVec3 {
        self.translation
    }

    fn rot_delta(&self) -> DVec3 {
        self.rot_delta
    }

    fn trans_delta(&self) -> DVec3 {
        self.trans_delta
    }

    fn update_rt(&mut self, rotation: DMat3, translation: DVec3) {
        self.rotation = rotation;
        self.translation = translation;
    }

    fn reset_deltas(&mut self) {
        self.rot_delta = DVec3::ZERO;
        self.trans_delta = DVec3::ZERO;
    }
}
