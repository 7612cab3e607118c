use crate::eye_transform::EyeOffsets;
use crate::math::{self, Matrix4, Quaternion, Vector3};
use crate::projection::{self, ProjectionParams};
use crate::VREyeParameters;

/// A camera the renderer can draw with.
pub trait Camera {
    /// World transform of the camera.
    fn matrix_world(&self) -> Matrix4;

    fn projection_matrix(&self) -> Matrix4;

    /// Near clip distance.
    fn near(&self) -> f64;

    /// Far clip distance.
    fn far(&self) -> f64;

    /// Bitmask of the scene layers this camera sees.
    fn layers(&self) -> u32 {
        1
    }

    /// Whether the world matrix is driven by a parent object.
    fn has_parent(&self) -> bool {
        false
    }

    /// Recomputes the world matrix from the local transform.
    fn update_matrix_world(&mut self) {}
}

/// One of the two per-eye cameras. Its values are overwritten every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct EyeCamera {
    pub position: Vector3,
    pub quaternion: Quaternion,
    pub scale: Vector3,
    pub projection: Matrix4,
    pub near: f64,
    pub far: f64,
    pub layers: u32,
}

impl EyeCamera {
    pub fn new(eye_layer: u32) -> EyeCamera {
        EyeCamera {
            position: Vector3::zero(),
            quaternion: Quaternion::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            projection: Matrix4::identity(),
            near: ProjectionParams::default().near,
            far: ProjectionParams::default().far,
            layers: 1 | (1 << eye_layer),
        }
    }

    pub fn matrix(&self) -> Matrix4 {
        math::compose(&self.position, &self.quaternion, &self.scale)
    }

    fn set_matrix(&mut self, matrix: &Matrix4) {
        let (position, quaternion, scale) = math::decompose(matrix);
        self.position = position;
        self.quaternion = quaternion;
        self.scale = scale;
    }

    /// Moves the camera by `distance` along `axis` expressed in its local frame.
    pub fn translate_on_axis(&mut self, axis: &Vector3, distance: f32) {
        let step = math::rotate_vector(&self.quaternion, axis) * distance;
        self.position = self.position + step;
    }
}

impl Camera for EyeCamera {
    fn matrix_world(&self) -> Matrix4 {
        self.matrix()
    }

    fn projection_matrix(&self) -> Matrix4 {
        self.projection
    }

    fn near(&self) -> f64 {
        self.near
    }

    fn far(&self) -> f64 {
        self.far
    }

    fn layers(&self) -> u32 {
        self.layers
    }
}

/// Left and right cameras tracking an application's mono camera.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoCameraPair {
    pub left: EyeCamera,
    pub right: EyeCamera,
}

impl StereoCameraPair {
    pub fn new(left_layer: u32, right_layer: u32) -> StereoCameraPair {
        StereoCameraPair {
            left: EyeCamera::new(left_layer),
            right: EyeCamera::new(right_layer),
        }
    }

    /// Copies the mono camera's world transform and clip planes onto both eyes.
    pub fn track(&mut self, camera: &dyn Camera) {
        let (position, quaternion, scale) = math::decompose(&camera.matrix_world());
        for eye in [&mut self.left, &mut self.right].iter_mut() {
            eye.position = position;
            eye.quaternion = quaternion;
            eye.scale = scale;
            eye.near = camera.near();
            eye.far = camera.far();
        }
    }

    /// Offsets the eyes with matrices from unified frame data.
    pub fn apply_frame(&mut self, offsets: &EyeOffsets, left_projection: &[f32; 16], right_projection: &[f32; 16]) {
        self.left.projection = math::from_array(left_projection);
        self.right.projection = math::from_array(right_projection);

        let left = math::multiply(&self.left.matrix(), &offsets.left);
        self.left.set_matrix(&left);
        let right = math::multiply(&self.right.matrix(), &offsets.right);
        self.right.set_matrix(&right);
    }

    /// Offsets the eyes with the static per-eye parameters, deriving the
    /// projections from the reported fields of view.
    pub fn apply_eye_parameters(&mut self, left: &VREyeParameters, right: &VREyeParameters) {
        let params = ProjectionParams::with_depth(self.left.near, self.left.far);
        self.left.projection = projection::fov_to_projection(&left.field_of_view, &params);
        self.right.projection = projection::fov_to_projection(&right.field_of_view, &params);

        let left_axis = Vector3::new(left.offset[0], left.offset[1], left.offset[2]);
        let right_axis = Vector3::new(right.offset[0], right.offset[1], right.offset[2]);
        let left_scale = self.left.scale.x;
        let right_scale = self.right.scale.x;
        self.left.translate_on_axis(&left_axis, left_scale);
        self.right.translate_on_axis(&right_axis, right_scale);
    }
}
