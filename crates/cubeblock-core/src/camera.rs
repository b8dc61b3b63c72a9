//! Camera description and the scroll-driven camera path.

use crate::constants::*;
use crate::focus::FocusSet;
use crate::timeline::{Lerp, Timeline, TimelineError};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Scene camera for `pose` on a surface of the given aspect ratio.
    pub fn from_pose(pose: CameraPose, aspect: f32) -> Self {
        Self {
            eye: pose.eye,
            target: pose.target,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Height and distance of the camera at one keyframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraStop {
    pub height: f32,
    pub depth: f32,
}

impl Lerp for CameraStop {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            height: <f32 as Lerp>::lerp(a.height, b.height, t),
            depth: <f32 as Lerp>::lerp(a.depth, b.depth, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_FAR_Z),
            target: Vec3::ZERO,
        }
    }
}

/// Settings for [`CameraPath`].
#[derive(Clone, Debug, PartialEq)]
pub struct CameraPathConfig {
    pub keyframes: [f32; 9],
    pub near_z: f32,
    pub far_z: f32,
    pub drift_per_focus: f32,
}

impl Default for CameraPathConfig {
    fn default() -> Self {
        Self {
            keyframes: CAMERA_KEYFRAMES,
            near_z: CAMERA_NEAR_Z,
            far_z: CAMERA_FAR_Z,
            drift_per_focus: CAMERA_DRIFT_PER_FOCUS,
        }
    }
}

/// Nine-keyframe path that visits each spread layer in turn.
///
/// The camera sits close while a layer is in view and backs off to the far
/// distance halfway between two layers.
#[derive(Clone, Debug)]
pub struct CameraPath {
    stops: Timeline<CameraStop>,
    drift_per_focus: f32,
}

impl CameraPath {
    /// `layer_heights` are the spread (final) heights of each layer.
    pub fn new(config: &CameraPathConfig, layer_heights: [f32; LAYER_COUNT]) -> Result<Self, TimelineError> {
        let near = |h: f32| CameraStop {
            height: h,
            depth: config.near_z,
        };
        let far = |h: f32| CameraStop {
            height: h,
            depth: config.far_z,
        };
        let [l0, l1, l2, l3] = layer_heights;
        let values = [
            far(0.0),
            near(l0),
            far(l0),
            near(l1),
            far(l1),
            near(l2),
            far(l2),
            near(l3),
            far(l3),
        ];
        Ok(Self {
            stops: Timeline::new(&config.keyframes, &values)?,
            drift_per_focus: config.drift_per_focus,
        })
    }

    pub fn stop(&self, p: f32) -> CameraStop {
        self.stops.sample(p)
    }

    pub fn pose(&self, p: f32, focus: &FocusSet) -> CameraPose {
        let stop = self.stop(p);
        CameraPose {
            eye: Vec3::new(focus.total() * self.drift_per_focus, stop.height, stop.depth),
            target: Vec3::new(0.0, stop.height, 0.0),
        }
    }
}
