/*!
# Vista 3D Camera

Camera pose engine for 3D rendering.

This crate tracks a rigid-body camera pose (position + unit-quaternion
orientation) in world space and derives the view transform that maps world
coordinates into camera-relative coordinates. Rendering, windowing, and
input handling are external collaborators: they push pose deltas into the
camera and read the view matrix back out.

## Architecture

- **PoseCamera**: mutable pose (rotate / translate / explicit setters) with
  a view matrix recomputed synchronously on every mutation
- **StaticCamera**: degenerate fixed identity-view camera
- **EulerAngles**: pitch/yaw/roll triplet under one fixed intrinsic Y-X-Z
  convention

Conventions: the camera looks down its local -z axis, +y is up, and the
view matrix is `rotation(orientation) * translation(-position)`.
*/

// Internal modules
mod error;
pub mod camera;
pub mod log;

// Main vista3d namespace module
pub mod vista3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera types
    pub use crate::camera::{EulerAngles, PoseCamera, StaticCamera};

    // Logging sub-module (types and host functions, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity,
        };
    }
}

// Re-export math library at crate root
pub use glam;
