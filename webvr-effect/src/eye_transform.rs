use crate::math::{self, Matrix4, Vector3};
use crate::{VRFrameData, VRPose};

/// Pose of each eye in head space, derived from one frame of device data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeOffsets {
    pub left: Matrix4,
    pub right: Matrix4,
}

/// The model matrix of the head in sitting space.
/// Missing orientation leaves the rotation at identity, missing position leaves it at the origin.
pub fn head_matrix(pose: &VRPose) -> Matrix4 {
    let mut head = match pose.orientation {
        Some(ref orientation) => math::rotation_matrix(&math::quaternion_from_array(orientation)),
        None => Matrix4::identity(),
    };

    if let Some(position) = pose.position {
        head.m41 = position[0];
        head.m42 = position[1];
        head.m43 = position[2];
    }

    head
}

// A view matrix maps sitting space to eye space, so it factors as
// headToEye × sittingToHead. The head matrix is the inverse of sittingToHead,
// which leaves view × head = headToEye. Its inverse places the eye in head space.
fn eye_in_head(view: &[f32; 16], head: &Matrix4) -> Matrix4 {
    let head_to_eye = math::multiply(&math::from_array(view), head);
    math::invert(&head_to_eye).unwrap_or_else(|| {
        warn!("Singular eye view matrix, eye offset ignored");
        Matrix4::identity()
    })
}

/// Resolves both eye offsets from fresh frame data. Nothing is kept between frames.
pub fn eye_offsets(frame: &VRFrameData) -> EyeOffsets {
    let head = head_matrix(&frame.pose);
    EyeOffsets {
        left: eye_in_head(&frame.left_view_matrix, &head),
        right: eye_in_head(&frame.right_view_matrix, &head),
    }
}

/// Translation component of an eye offset.
pub fn offset_translation(offset: &Matrix4) -> Vector3 {
    Vector3::new(offset.m41, offset.m42, offset.m43)
}
