// The VRPose struct represents the HMD's transform in sitting space at a given timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRPose {
    // Position of the VRDisplay as a 3D vector.
    // May be None if the sensor is incapable of providing positional data.
    pub position: Option<[f32; 3]>,

    // Orientation of the sensor as a quaternion, stored as [x, y, z, w].
    // May be None if the sensor is incapable of providing orientation.
    pub orientation: Option<[f32; 4]>,
}

impl VRPose {
    pub fn new(position: Option<[f32; 3]>, orientation: Option<[f32; 4]>) -> VRPose {
        VRPose {
            position: position,
            orientation: orientation,
        }
    }
}
