// Data provided to a VRDisplay and presented in the HMD.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRLayer {
    // Source surface whose contents will be presented by the
    // VRDisplay when VRDisplay.submitFrame() is called.
    pub texture_id: u32,

    // UVs defining the texture bounds to present to the eye in UV space: [x,y,w,h]
    // Kept as reported by the device, which may hand out arrays of any length.
    pub left_bounds: Option<Vec<f32>>,

    // UVs defining the texture bounds to present to the eye in UV space: [x,y,w,h]
    pub right_bounds: Option<Vec<f32>>,
}

impl VRLayer {
    pub fn with_source(texture_id: u32) -> VRLayer {
        VRLayer {
            texture_id: texture_id,
            ..VRLayer::default()
        }
    }
}

impl Default for VRLayer {
    fn default() -> VRLayer {
        VRLayer {
            texture_id: 0,
            left_bounds: None,
            right_bounds: None,
        }
    }
}
