use crate::VREyeParameters;

/// Static description of a display, plus whether it is still attached.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRDisplayData {
    pub display_id: u32,
    pub connected: bool,
    pub left_eye_parameters: VREyeParameters,
    pub right_eye_parameters: VREyeParameters,
}
