#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Kornia Pose
//!
//! Exponential maps of SO(3) and SE(3) used to fold the incremental motion estimated by
//! a tracking optimizer back into a camera pose, plus a constant-velocity heuristic to
//! seed the pose of a new frame.
//!
//! All quantities are double precision. A tangent vector of SE(3) is laid out as
//! `[rho, theta]`: translation part first, rotation part last.
//!
//! ## Example
//!
//! ```rust
//! use kornia_pose::{update_pose, CameraPose};
//! use glam::DVec3;
//!
//! let mut camera = CameraPose::identity();
//! camera.trans_delta = DVec3::new(0.1, 0.0, 0.0);
//!
//! let converged = update_pose(&mut camera, 5e-4);
//! assert!(!converged);
//! assert_eq!(camera.trans_delta, DVec3::ZERO);
//! ```

/// Capability interface of the camera consumed by the pose update.
pub mod camera;

/// Error types for the dimension checked entry points.
pub mod error;

/// Constant-velocity pose extrapolation.
pub mod interpolate;

/// Special Euclidean group SE(3) exponential map and homogeneous helpers.
pub mod se3;

/// Special Orthogonal group SO(3) exponential map and left Jacobian.
pub mod so3;

/// Single optimizer step applying the accumulated tangent update to a camera.
pub mod update;

pub use camera::{CameraPose, PoseCamera};
pub use error::PoseError;
pub use interpolate::{interpolate_pose_history, interpolate_poses};
pub use se3::{matrix_to_rt, rt_to_matrix, se3_exp, se3_exp_from_slice};
pub use so3::{left_jacobian_v, skew_symmetric, so3_exp, so3_exp_from_slice};
pub use update::{update_pose, update_pose_with_config, UpdatePoseConfig};
