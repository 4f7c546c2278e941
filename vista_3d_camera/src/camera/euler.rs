/// Euler angle triplet for camera orientation.
///
/// One fixed convention is used everywhere in this crate: intrinsic Y-X-Z
/// (yaw about y, then pitch about the rotated x, then roll about the
/// rotated z) — `glam::EulerRot::YXZ`. Conversions in both directions go
/// through this convention, so per-axis reads and writes on a camera are
/// coupled the way Y-X-Z decomposition couples them.

use glam::{EulerRot, Quat};

/// Euler angles in radians, decomposed in intrinsic Y-X-Z order
/// (yaw, then pitch, then roll).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    /// Rotation about the (local) x axis
    pub pitch: f32,
    /// Rotation about the y axis, applied first
    pub yaw: f32,
    /// Rotation about the (local) z axis, applied last
    pub roll: f32,
}

impl EulerAngles {
    /// Create an angle triplet from explicit components (radians).
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Decompose a quaternion into Y-X-Z Euler angles.
    ///
    /// The decomposition is not unique for combined rotations; values are
    /// reported in the canonical Y-X-Z range (pitch in [-pi/2, pi/2]).
    pub fn from_quat(quat: Quat) -> Self {
        let (yaw, pitch, roll) = quat.to_euler(EulerRot::YXZ);
        Self { pitch, yaw, roll }
    }

    /// Compose the angles into a unit quaternion (yaw, then pitch, then roll).
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }
}

#[cfg(test)]
#[path = "euler_tests.rs"]
mod tests;
