use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Euler rotation in degrees.
///
/// Yaw turns about +Y, pitch raises the facing toward +Y, roll spins about the
/// facing axis. A zero rotator faces +X, matching `Transform::forward`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Look-at rotation whose forward axis points along `dir`. Roll is zero.
    ///
    /// A zero-length direction yields `Rotator::ZERO`.
    pub fn from_direction(dir: Vec3) -> Self {
        if dir.length_squared() <= f32::EPSILON {
            return Self::ZERO;
        }
        let horizontal = (dir.x * dir.x + dir.z * dir.z).sqrt();
        Self {
            pitch: dir.y.atan2(horizontal).to_degrees(),
            yaw: dir.z.atan2(dir.x).to_degrees(),
            roll: 0.0,
        }
    }

    /// Unit facing direction for this rotation.
    pub fn forward(&self) -> Vec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(cp * cy, sp, cp * sy)
    }

    /// Equivalent quaternion; rotates +X onto `forward()`.
    pub fn to_quat(&self) -> Quat {
        Quat::from_rotation_y(-self.yaw.to_radians())
            * Quat::from_rotation_z(self.pitch.to_radians())
            * Quat::from_rotation_x(self.roll.to_radians())
    }

    /// Every axis wrapped into (-180, 180].
    pub fn normalized(&self) -> Self {
        Self {
            pitch: normalize_axis(self.pitch),
            yaw: normalize_axis(self.yaw),
            roll: normalize_axis(self.roll),
        }
    }

    pub fn is_nearly_zero(&self, tolerance: f32) -> bool {
        self.pitch.abs() <= tolerance
            && self.yaw.abs() <= tolerance
            && self.roll.abs() <= tolerance
    }

    /// Move toward `target` by a fraction `speed * dt` of the remaining
    /// shortest-path delta, clamped to [0, 1]. A non-positive speed snaps.
    pub fn interp_to(self, target: Self, dt: f32, speed: f32) -> Self {
        if speed <= 0.0 {
            return target;
        }
        let delta = (target - self).normalized();
        if delta.is_nearly_zero(1.0e-4) {
            return target;
        }
        let alpha = (speed * dt).clamp(0.0, 1.0);
        (self + delta * alpha).normalized()
    }
}

impl Add for Rotator {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.pitch + rhs.pitch, self.yaw + rhs.yaw, self.roll + rhs.roll)
    }
}

impl Sub for Rotator {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.pitch - rhs.pitch, self.yaw - rhs.yaw, self.roll - rhs.roll)
    }
}

impl Mul<f32> for Rotator {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.pitch * rhs, self.yaw * rhs, self.roll * rhs)
    }
}

/// Wrap an angle in degrees into (-180, 180].
pub fn normalize_axis(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Rotate `v` by `degrees` about `axis` (right-handed).
pub fn rotate_angle_axis(v: Vec3, degrees: f32, axis: Vec3) -> Vec3 {
    let axis = axis.normalize_or_zero();
    if axis == Vec3::ZERO {
        return v;
    }
    Quat::from_axis_angle(axis, degrees.to_radians()) * v
}
