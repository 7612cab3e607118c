/// A column-major 4x4 identity matrix as `[f32; 16]`.
#[macro_export]
macro_rules! identity_matrix {
    () => ([1.0, 0.0, 0.0, 0.0,  0.0, 1.0, 0.0, 0.0,  0.0, 0.0, 1.0, 0.0,  0.0, 0.0, 0.0, 1.0]);
}

#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde;

pub mod mock;
pub mod utils;

pub mod vr_display;
pub mod vr_service;
pub mod vr_display_data;
pub mod vr_eye;
pub mod vr_eye_parameters;
pub mod vr_frame_data;
pub mod vr_future_present;
pub mod vr_layer;
pub mod vr_pose;
pub mod vr_event;
pub mod vr_field_view;
pub mod vr_viewport;

pub use vr_display::{VRDisplay, VRDisplayPtr, FrameCallback};
pub use vr_service::{VRService, VRServiceCreator};
pub use vr_display_data::VRDisplayData;
pub use vr_eye::VREye;
pub use vr_eye_parameters::VREyeParameters;
pub use vr_frame_data::VRFrameData;
pub use vr_future_present::{VRFuturePresent, VRResolvePresent};
pub use vr_layer::VRLayer;
pub use vr_pose::VRPose;
pub use vr_event::VRDisplayEvent;
pub use vr_field_view::{VRFieldOfView, VRFieldOfViewPort};
pub use vr_viewport::VRViewport;
