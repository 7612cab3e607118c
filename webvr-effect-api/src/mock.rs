use crate::{VREyeParameters, VRPose};

pub enum MockVRControlMsg {
    SetViewerPose(VRPose),
    SetEyeParameters(VREyeParameters, VREyeParameters),
    SetProjectionMatrices([f32; 16], [f32; 16]),
    SetViewMatrices([f32; 16], [f32; 16]),
    // Left and right bounds reported on the presented layer.
    SetLayerBounds(Option<Vec<f32>>, Option<Vec<f32>>),
    // Toggles the unified frame data and the per-eye parameter queries.
    SetCapabilities { frame_data: bool, eye_parameters: bool },
    // Rejects the next present or exit request with the given message.
    FailNextRequest(String),
    // Holds present and exit requests until CompleteRequests is sent.
    DeferRequests(bool),
    CompleteRequests,
    Disconnect,
}
