use crate::math::Matrix4;
use crate::{VRFieldOfView, VRFieldOfViewPort};
use euclid::default::Transform3D;

/// Clip distances and handedness used when a projection has to be derived
/// from a field of view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct ProjectionParams {
    pub right_handed: bool,
    pub near: f64,
    pub far: f64,
}

impl Default for ProjectionParams {
    fn default() -> ProjectionParams {
        ProjectionParams {
            right_handed: true,
            near: 0.01,
            far: 10000.0,
        }
    }
}

impl ProjectionParams {
    pub fn with_depth(near: f64, far: f64) -> ProjectionParams {
        ProjectionParams {
            near: near,
            far: far,
            ..ProjectionParams::default()
        }
    }
}

// Scale and offset that map the frustum edges onto normalized device coordinates.
struct NdcScaleOffset {
    scale: [f64; 2],
    offset: [f64; 2],
}

fn ndc_scale_offset(port: &VRFieldOfViewPort) -> NdcScaleOffset {
    let px_scale = 2.0 / (port.left_tan + port.right_tan);
    let px_offset = (port.left_tan - port.right_tan) * px_scale * 0.5;
    let py_scale = 2.0 / (port.up_tan + port.down_tan);
    let py_offset = (port.up_tan - port.down_tan) * py_scale * 0.5;

    NdcScaleOffset {
        scale: [px_scale, py_scale],
        offset: [px_offset, py_offset],
    }
}

/// Off-axis perspective projection for a frustum given as edge tangents.
///
/// Both tangents of an axis must not sum to zero.
pub fn fov_port_to_projection(port: &VRFieldOfViewPort, params: &ProjectionParams) -> Matrix4 {
    let handedness = if params.right_handed { -1.0 } else { 1.0 };
    let (near, far) = (params.near, params.far);
    let ndc = ndc_scale_offset(port);

    // Rows of the projection as applied to column vectors.
    // The Y offset is negated: world space has Y up while the NDC scaling has Y down.
    #[rustfmt::skip]
    let rows: [f64; 16] = [
        ndc.scale[0], 0.0,          ndc.offset[0] * handedness,    0.0,
        0.0,          ndc.scale[1], -ndc.offset[1] * handedness,   0.0,
        0.0,          0.0,          far / (near - far) * -handedness, (far * near) / (near - far),
        0.0,          0.0,          handedness,                    0.0,
    ];

    // Transposing the rows gives the column-major element order.
    let mut m = [0f32; 16];
    for row in 0..4 {
        for col in 0..4 {
            m[col * 4 + row] = rows[row * 4 + col] as f32;
        }
    }
    Transform3D::from_array(m)
}

/// Projection for a field of view reported in degrees.
pub fn fov_to_projection(fov: &VRFieldOfView, params: &ProjectionParams) -> Matrix4 {
    fov_port_to_projection(&fov.to_port(), params)
}
