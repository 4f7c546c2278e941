/// StaticCamera — fixed identity-view camera.
///
/// Degenerate base case of the camera family: no pose state, no mutation
/// surface, the view matrix is always the identity. Useful as a
/// placeholder camera for screen-space or untransformed rendering.

use glam::Mat4;

/// Camera with a permanently-identity view matrix.
#[derive(Debug, Clone)]
pub struct StaticCamera {
    view_matrix: Mat4,
}

impl StaticCamera {
    /// Create a static camera.
    pub fn new() -> Self {
        Self {
            view_matrix: Mat4::IDENTITY,
        }
    }

    /// View matrix (always the identity).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }
}

impl Default for StaticCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "static_camera_tests.rs"]
mod tests;
