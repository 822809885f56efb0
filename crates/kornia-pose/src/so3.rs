//! # SO(3) exponential map
//!
//! A rotation tangent vector `theta ∈ R³` is an axis-angle: its direction is the rotation
//! axis and its norm the angle in radians. The exponential map turns it into a rotation
//! matrix through Rodrigues' formula, and the left Jacobian `V` maps a translational
//! tangent component into the displacement it produces under the same rotation.
//!
//! Both maps divide by powers of the angle. Below [`SMALL_ANGLE_THRESHOLD`] they switch to
//! a second order Taylor expansion. Each branch is exposed as its own function.

use glam::{DMat3, DVec3};

use crate::error::PoseError;

/// Angle (in radians) below which the Taylor expansions are used.
pub const SMALL_ANGLE_THRESHOLD: f64 = 1.0e-5;

/// Dimension of the Lie algebra so(3).
pub const SO3_TANGENT_SIZE: usize = 3;

/// Build the skew-symmetric (cross product) matrix of a vector.
///
/// The returned matrix `M` satisfies `M * v == x.cross(v)` for every `v`.
///
/// ```text
/// [  0   -x2   x1 ]
/// [  x2   0   -x0 ]
/// [ -x1   x0   0  ]
/// ```
pub fn skew_symmetric(x: DVec3) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(0.0, x.z, -x.y),
        DVec3::new(-x.z, 0.0, x.x),
        DVec3::new(x.y, -x.x, 0.0),
    )
}

/// Exponential map from so(3) to a rotation matrix.
///
/// # Arguments
///
/// * `theta` - The axis-angle rotation vector.
///
/// # Returns
///
/// The rotation matrix `exp([theta]x)`.
pub fn so3_exp(theta: DVec3) -> DMat3 {
    if theta.length() < SMALL_ANGLE_THRESHOLD {
        so3_exp_small_angle(theta)
    } else {
        so3_exp_closed_form(theta)
    }
}

/// Second order Taylor expansion of the SO(3) exponential: `I + W + W²/2`.
pub fn so3_exp_small_angle(theta: DVec3) -> DMat3 {
    let w = skew_symmetric(theta);
    DMat3::IDENTITY + w + (w * w) * 0.5
}

/// Rodrigues' formula: `I + sin(a)/a W + (1 - cos(a))/a² W²`.
///
/// Not defined for a zero angle, see [`so3_exp`].
pub fn so3_exp_closed_form(theta: DVec3) -> DMat3 {
    let w = skew_symmetric(theta);
    let angle = theta.length();
    DMat3::IDENTITY
        + w * (angle.sin() / angle)
        + (w * w) * ((1.0 - angle.cos()) / (angle * angle))
}

/// Left Jacobian `V` of SO(3).
///
/// Maps the translational part `rho` of an se(3) tangent vector into the translation of
/// the rigid transform, `t = V(theta) * rho`.
///
/// # Arguments
///
/// * `theta` - The axis-angle rotation vector.
pub fn left_jacobian_v(theta: DVec3) -> DMat3 {
    if theta.length() < SMALL_ANGLE_THRESHOLD {
        left_jacobian_v_small_angle(theta)
    } else {
        left_jacobian_v_closed_form(theta)
    }
}

/// Second order Taylor expansion of the left Jacobian: `I + W/2 + W²/6`.
pub fn left_jacobian_v_small_angle(theta: DVec3) -> DMat3 {
    let w = skew_symmetric(theta);
    DMat3::IDENTITY + w * 0.5 + (w * w) * (1.0 / 6.0)
}

/// Closed form left Jacobian: `I + (1 - cos(a))/a² W + (a - sin(a))/a³ W²`.
///
/// Not defined for a zero angle, see [`left_jacobian_v`].
pub fn left_jacobian_v_closed_form(theta: DVec3) -> DMat3 {
    let w = skew_symmetric(theta);
    let angle = theta.length();
    let angle_sq = angle * angle;
    DMat3::IDENTITY
        + w * ((1.0 - angle.cos()) / angle_sq)
        + (w * w) * ((angle - angle.sin()) / (angle_sq * angle))
}

/// Exponential map from a rotation vector given as a slice.
///
/// Returns [`PoseError::WrongTangentSize`] unless the slice holds exactly 3 values.
pub fn so3_exp_from_slice(theta: &[f64]) -> Result<DMat3, PoseError> {
    if theta.len() != SO3_TANGENT_SIZE {
        return Err(PoseError::WrongTangentSize {
            expected: SO3_TANGENT_SIZE,
            got: theta.len(),
        });
    }
    Ok(so3_exp(DVec3::from_slice(theta)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn random_rotation_vector(rng: &mut impl Rng, max_angle: f64) -> DVec3 {
        let axis = DVec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        )
        .try_normalize()
        .unwrap_or(DVec3::X);
        axis * rng.random_range(0.0..max_angle)
    }

    #[test]
    fn test_skew_symmetric() {
        let x = DVec3::new(1.0, 2.0, 3.0);
        let m = skew_symmetric(x);

        assert_relative_eq!(m.x_axis.x, 0.0);
        assert_relative_eq!(m.x_axis.y, 3.0);
        assert_relative_eq!(m.x_axis.z, -2.0);
        assert_relative_eq!(m.y_axis.x, -3.0);
        assert_relative_eq!(m.y_axis.y, 0.0);
        assert_relative_eq!(m.y_axis.z, 1.0);
        assert_relative_eq!(m.z_axis.x, 2.0);
        assert_relative_eq!(m.z_axis.y, -1.0);
        assert_relative_eq!(m.z_axis.z, 0.0);

        // behaves as the cross product
        let v = DVec3::new(-0.5, 4.0, 0.25);
        assert!((m * v).abs_diff_eq(x.cross(v), EPSILON));
    }

    #[test]
    fn test_so3_exp_zero() {
        let r = so3_exp(DVec3::ZERO);
        assert_eq!(r, DMat3::IDENTITY);
    }

    #[test]
    fn test_so3_exp_quarter_turn_z() {
        let r = so3_exp(DVec3::new(0.0, 0.0, FRAC_PI_2));
        let p = r * DVec3::X;
        assert_relative_eq!(p.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(p.y, 1.0, epsilon = EPSILON);
        assert_relative_eq!(p.z, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_so3_exp_orthonormal() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let theta = random_rotation_vector(&mut rng, std::f64::consts::PI);
            let r = so3_exp(theta);

            let rtr = r.transpose() * r;
            assert!(rtr.abs_diff_eq(DMat3::IDENTITY, 1e-9));
            assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_so3_exp_matches_axis_angle() {
        let axis = DVec3::new(1.0, -2.0, 0.5).normalize();
        let angle = 0.7;
        let r = so3_exp(axis * angle);
        let expected = DMat3::from_axis_angle(axis, angle);
        assert!(r.abs_diff_eq(expected, 1e-12));
    }

    #[test]
    fn test_branch_continuity() {
        let axis = DVec3::new(0.3, -0.4, 0.866).normalize();
        for scale in [0.5, 0.999, 1.0, 1.001, 2.0] {
            let theta = axis * (SMALL_ANGLE_THRESHOLD * scale);

            let r_small = so3_exp_small_angle(theta);
            let r_closed = so3_exp_closed_form(theta);
            assert!(r_small.abs_diff_eq(r_closed, 1e-6));

            let v_small = left_jacobian_v_small_angle(theta);
            let v_closed = left_jacobian_v_closed_form(theta);
            assert!(v_small.abs_diff_eq(v_closed, 1e-6));
        }
    }

    #[test]
    fn test_branch_dispatch() {
        let below = DVec3::new(0.0, 0.0, 0.5 * SMALL_ANGLE_THRESHOLD);
        assert_eq!(so3_exp(below), so3_exp_small_angle(below));
        assert_eq!(left_jacobian_v(below), left_jacobian_v_small_angle(below));

        let above = DVec3::new(0.0, 0.2, 0.0);
        assert_eq!(so3_exp(above), so3_exp_closed_form(above));
        assert_eq!(left_jacobian_v(above), left_jacobian_v_closed_form(above));
    }

    #[test]
    fn test_left_jacobian_v_zero() {
        assert_eq!(left_jacobian_v(DVec3::ZERO), DMat3::IDENTITY);
    }

    #[test]
    fn test_left_jacobian_v_fixes_axis() {
        // W * theta = 0, so V leaves the rotation axis untouched
        let theta = DVec3::new(0.1, 0.2, 0.3);
        let v = left_jacobian_v(theta);
        assert!((v * theta).abs_diff_eq(theta, EPSILON));
    }

    #[test]
    fn test_left_jacobian_v_half_turn() {
        // for a = pi: V = I + 2/pi² W + 1/pi² W²
        let theta = DVec3::new(0.0, 0.0, std::f64::consts::PI);
        let p = left_jacobian_v(theta) * DVec3::X;
        assert_relative_eq!(p.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(p.y, 2.0 / std::f64::consts::PI, epsilon = EPSILON);
        assert_relative_eq!(p.z, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_non_finite_propagates() {
        let r = so3_exp(DVec3::new(f64::NAN, 0.0, 0.0));
        assert!(!r.is_finite());
    }

    #[test]
    fn test_so3_exp_from_slice() -> Result<(), PoseError> {
        let r = so3_exp_from_slice(&[0.0, 0.0, FRAC_PI_2])?;
        assert!(r.abs_diff_eq(so3_exp(DVec3::new(0.0, 0.0, FRAC_PI_2)), EPSILON));

        let err = so3_exp_from_slice(&[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            err,
            Err(PoseError::WrongTangentSize {
                expected: 3,
                got: 4
            })
        );
        Ok(())
    }
}
