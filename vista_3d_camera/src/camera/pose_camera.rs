/// PoseCamera — rigid-body camera pose with a derived view matrix.
///
/// The camera owns a position and a unit-quaternion orientation (the
/// rotation from world space into camera-local space) and keeps a cached
/// view matrix consistent with them: every mutator recomputes the matrix
/// before returning, so a reader can never observe a stale transform.
///
/// Conventions:
/// - The camera looks down its local -z axis; +y is up.
/// - `view_matrix = Mat4::from_quat(orientation) * Mat4::from_translation(-position)`
///   (translate the world by the negated position first, then rotate).
/// - `rotate` right-multiplies, so incoming rotations act about the
///   camera's own local axes at call time (intrinsic, first-person style).

use glam::{Mat4, Quat, Vec3};
use crate::error::{Error, Result};
use super::euler::EulerAngles;

/// Smallest magnitude accepted for caller-supplied quaternions and
/// rotation axes. Anything below this cannot be normalized meaningfully.
const MIN_ROTATION_NORM: f32 = 1e-6;

/// Log source for this module
const SOURCE: &str = "vista3d::PoseCamera";

/// Camera pose engine: position + unit orientation + cached view matrix.
///
/// Mutators update the pose in place and synchronously refresh the view
/// matrix. Read accessors return stored state and never recompute.
///
/// Not internally synchronized: a caller sharing one instance across
/// threads must serialize all access itself.
///
/// # Example
///
/// ```
/// use vista_3d_camera::vista3d::PoseCamera;
/// use vista_3d_camera::glam::Vec3;
///
/// let mut camera = PoseCamera::new();
/// camera.rotate_yaw(std::f32::consts::FRAC_PI_2);
/// camera.translate(Vec3::new(0.0, 0.0, -1.0)); // one step forward
/// let view = camera.view_matrix();
/// # let _ = view;
/// ```
#[derive(Debug, Clone)]
pub struct PoseCamera {
    /// World-space position of the camera origin
    position: Vec3,
    /// Unit quaternion: world space -> camera-local space
    orientation: Quat,
    /// Cached view matrix, always derived from the two fields above
    view_matrix: Mat4,
}

impl PoseCamera {
    // ===== CONSTRUCTORS =====

    /// Create a camera at the origin with identity orientation.
    ///
    /// The view matrix is the identity, equivalent to a look-at transform
    /// with eye=(0,0,0), target=(0,0,-1), up=(0,1,0).
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            view_matrix: Mat4::IDENTITY,
        }
    }

    /// Create a camera at `position` with identity orientation.
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            view_matrix: Self::derive_view_matrix(position, Quat::IDENTITY),
        }
    }

    /// Create a camera at `position` facing per `orientation`.
    ///
    /// The quaternion need not be pre-normalized; the stored orientation
    /// is always unit length.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOrientation` if `orientation` has near-zero
    /// magnitude (a zero quaternion cannot be normalized).
    pub fn with_pose(position: Vec3, orientation: Quat) -> Result<Self> {
        let orientation = Self::checked_unit_quat(orientation)?;
        Ok(Self {
            position,
            orientation,
            view_matrix: Self::derive_view_matrix(position, orientation),
        })
    }

    // ===== READ ACCESSORS — stored state, no recomputation =====

    /// View matrix mapping world space into camera-local space.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// World-space position. Individual components read as
    /// `camera.position().x` etc.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Orientation quaternion (unit length, world -> camera-local).
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Orientation decomposed into Y-X-Z Euler angles.
    ///
    /// Pitch, yaw, and roll are not tracked independently; they are all
    /// extracted from the same quaternion decomposition, so combined
    /// rotations report coupled per-axis values.
    pub fn euler_angles(&self) -> EulerAngles {
        EulerAngles::from_quat(self.orientation)
    }

    /// Pitch component of the Y-X-Z decomposition (radians).
    pub fn pitch(&self) -> f32 {
        self.euler_angles().pitch
    }

    /// Yaw component of the Y-X-Z decomposition (radians).
    pub fn yaw(&self) -> f32 {
        self.euler_angles().yaw
    }

    /// Roll component of the Y-X-Z decomposition (radians).
    pub fn roll(&self) -> f32 {
        self.euler_angles().roll
    }

    /// World-space forward direction (the camera's local -z axis).
    pub fn forward(&self) -> Vec3 {
        self.orientation.inverse() * Vec3::NEG_Z
    }

    /// World-space right direction (the camera's local +x axis).
    pub fn right(&self) -> Vec3 {
        self.orientation.inverse() * Vec3::X
    }

    /// World-space up direction (the camera's local +y axis).
    pub fn up(&self) -> Vec3 {
        self.orientation.inverse() * Vec3::Y
    }

    // ===== ROTATION MUTATORS =====

    /// Apply `rotation` in the camera's local frame.
    ///
    /// `orientation` becomes `normalize(orientation * rotation)`: the
    /// right-multiplication makes this an intrinsic rotation about the
    /// camera's current local axes, not a world-frame rotation.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOrientation` for a near-zero quaternion; the
    /// pose is left unchanged.
    pub fn rotate(&mut self, rotation: Quat) -> Result<()> {
        let rotation = Self::checked_unit_quat(rotation)?;
        self.apply_rotation(rotation);
        Ok(())
    }

    /// Apply a local-frame rotation given as Y-X-Z Euler angles.
    ///
    /// Equivalent to `rotate(angles.to_quat())`, but infallible: angle
    /// triplets always compose into a valid unit quaternion.
    pub fn rotate_euler(&mut self, angles: EulerAngles) {
        self.apply_rotation(angles.to_quat());
    }

    /// Apply a local-frame rotation of `angle` radians about `axis`.
    ///
    /// The axis need not be pre-normalized.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAxis` for a near-zero axis; the pose is left
    /// unchanged.
    pub fn rotate_axis_angle(&mut self, angle: f32, axis: Vec3) -> Result<()> {
        let norm = axis.length();
        if !norm.is_finite() || norm < MIN_ROTATION_NORM {
            return Err(Self::log_and_return_error(Error::InvalidAxis(format!(
                "axis ({}, {}, {}) has near-zero length",
                axis.x, axis.y, axis.z
            ))));
        }
        self.apply_rotation(Quat::from_axis_angle(axis / norm, angle));
        Ok(())
    }

    /// Pitch by `angle` radians: rotation about the camera's local x axis.
    pub fn rotate_pitch(&mut self, angle: f32) {
        self.apply_rotation(Quat::from_rotation_x(angle));
    }

    /// Yaw by `angle` radians: rotation about the camera's local y axis.
    pub fn rotate_yaw(&mut self, angle: f32) {
        self.apply_rotation(Quat::from_rotation_y(angle));
    }

    /// Roll by `angle` radians: rotation about the camera's local z axis.
    pub fn rotate_roll(&mut self, angle: f32) {
        self.apply_rotation(Quat::from_rotation_z(angle));
    }

    // ===== TRANSLATION MUTATORS =====

    /// Move by `delta` expressed in camera-local space.
    ///
    /// The delta is converted to world space through the current
    /// orientation before being added, so `(0, 0, -1)` always moves one
    /// unit toward whatever the camera currently faces.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += self.orientation.inverse() * delta;
        self.refresh_view_matrix();
    }

    /// Set the world-space position; orientation is unchanged.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.refresh_view_matrix();
    }

    /// Set the x component of the position.
    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
        self.refresh_view_matrix();
    }

    /// Set the y component of the position.
    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
        self.refresh_view_matrix();
    }

    /// Set the z component of the position.
    pub fn set_z(&mut self, z: f32) {
        self.position.z = z;
        self.refresh_view_matrix();
    }

    // ===== ORIENTATION SETTERS =====

    /// Set the orientation absolutely, discarding the previous one.
    ///
    /// The quaternion need not be pre-normalized.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOrientation` for a near-zero quaternion; the
    /// pose is left unchanged.
    pub fn set_orientation(&mut self, orientation: Quat) -> Result<()> {
        self.orientation = Self::checked_unit_quat(orientation)?;
        self.refresh_view_matrix();
        Ok(())
    }

    /// Set the orientation from Y-X-Z Euler angles, discarding the
    /// previous orientation entirely (not additive).
    pub fn set_euler_angles(&mut self, angles: EulerAngles) {
        self.orientation = angles.to_quat().normalize();
        self.refresh_view_matrix();
    }

    /// Overwrite the pitch component of the current Y-X-Z decomposition.
    ///
    /// Decomposes the orientation, replaces pitch, and recomposes. For
    /// combined rotations the decomposition couples the axes, so per-axis
    /// setters are order-dependent and do not isolate one axis in general.
    pub fn set_pitch(&mut self, pitch: f32) {
        let mut angles = self.euler_angles();
        angles.pitch = pitch;
        self.set_euler_angles(angles);
    }

    /// Overwrite the yaw component of the current Y-X-Z decomposition.
    ///
    /// Same coupling caveat as [`PoseCamera::set_pitch`].
    pub fn set_yaw(&mut self, yaw: f32) {
        let mut angles = self.euler_angles();
        angles.yaw = yaw;
        self.set_euler_angles(angles);
    }

    /// Overwrite the roll component of the current Y-X-Z decomposition.
    ///
    /// Same coupling caveat as [`PoseCamera::set_pitch`].
    pub fn set_roll(&mut self, roll: f32) {
        let mut angles = self.euler_angles();
        angles.roll = roll;
        self.set_euler_angles(angles);
    }

    // ===== INTERNAL =====

    /// Pure derivation of the view matrix from a pose.
    ///
    /// Translate the world by the negated camera position, then rotate
    /// into camera-local space. The ordering is semantic: reversing it
    /// changes what the matrix means.
    fn derive_view_matrix(position: Vec3, orientation: Quat) -> Mat4 {
        Mat4::from_quat(orientation) * Mat4::from_translation(-position)
    }

    /// Recompute the cached view matrix. Called by every mutator before
    /// it returns.
    fn refresh_view_matrix(&mut self) {
        self.view_matrix = Self::derive_view_matrix(self.position, self.orientation);
    }

    /// Compose a rotation into the orientation and renormalize.
    ///
    /// Renormalization after every composition keeps floating-point drift
    /// out of the unit-length invariant.
    fn apply_rotation(&mut self, rotation: Quat) {
        self.orientation = (self.orientation * rotation).normalize();
        self.refresh_view_matrix();
    }

    /// Validate and normalize a caller-supplied quaternion.
    fn checked_unit_quat(quat: Quat) -> Result<Quat> {
        let norm = quat.length();
        if !norm.is_finite() || norm < MIN_ROTATION_NORM {
            return Err(Self::log_and_return_error(Error::InvalidOrientation(
                format!("quaternion magnitude {} cannot be normalized", norm),
            )));
        }
        Ok(quat / norm)
    }

    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        crate::camera_error!(SOURCE, "{}", error);
        error
    }
}

impl Default for PoseCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "pose_camera_tests.rs"]
mod tests;
