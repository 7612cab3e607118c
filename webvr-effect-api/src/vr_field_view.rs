// The VRFieldOfView interface represents a field of view,
// as given by 4 degrees describing the view from a center point.

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRFieldOfView {
    pub up_degrees: f64,
    pub right_degrees: f64,
    pub down_degrees: f64,
    pub left_degrees: f64,
}

impl Default for VRFieldOfView {
    fn default() -> VRFieldOfView {
        VRFieldOfView {
            up_degrees: 0.0,
            right_degrees: 0.0,
            down_degrees: 0.0,
            left_degrees: 0.0
        }
    }
}

impl VRFieldOfView {
    /// Converts the half-angles to the tangents of the frustum edges.
    pub fn to_port(&self) -> VRFieldOfViewPort {
        VRFieldOfViewPort {
            up_tan: self.up_degrees.to_radians().tan(),
            down_tan: self.down_degrees.to_radians().tan(),
            left_tan: self.left_degrees.to_radians().tan(),
            right_tan: self.right_degrees.to_radians().tan(),
        }
    }
}

// Frustum half-angles expressed as tangents relative to the eye's view axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRFieldOfViewPort {
    pub up_tan: f64,
    pub down_tan: f64,
    pub left_tan: f64,
    pub right_tan: f64,
}
