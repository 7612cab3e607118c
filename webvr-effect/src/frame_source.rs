use crate::camera::StereoCameraPair;
use crate::error::EffectError;
use crate::eye_transform;
use crate::{VRDisplay, VREye, VREyeParameters, VRFrameData};

/// This frame's pose and projection data, in whichever shape the display provides.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameSource {
    /// Pose plus ready-made view and projection matrices.
    FrameData(VRFrameData),
    /// Static per-eye offsets and fields of view.
    EyeParameters {
        left: VREyeParameters,
        right: VREyeParameters,
    },
}

impl FrameSource {
    /// Queries the display for this frame's data, preferring unified frame data.
    /// The check runs on every call.
    pub fn resolve(display: &mut dyn VRDisplay, near: f64, far: f64) -> Result<FrameSource, EffectError> {
        if let Some(frame) = display.frame_data(near, far) {
            return Ok(FrameSource::FrameData(frame));
        }

        match (display.eye_parameters(VREye::Left), display.eye_parameters(VREye::Right)) {
            (Some(left), Some(right)) => Ok(FrameSource::EyeParameters {
                left: left,
                right: right,
            }),
            _ => Err(EffectError::UnsupportedCapability),
        }
    }

    /// Offsets an already tracked camera pair for this frame.
    pub fn apply(&self, cameras: &mut StereoCameraPair) {
        match *self {
            FrameSource::FrameData(ref frame) => {
                let offsets = eye_transform::eye_offsets(frame);
                cameras.apply_frame(&offsets, &frame.left_projection_matrix, &frame.right_projection_matrix);
            }
            FrameSource::EyeParameters { ref left, ref right } => {
                cameras.apply_eye_parameters(left, right);
            }
        }
    }
}
