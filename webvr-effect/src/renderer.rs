use crate::camera::Camera;
use crate::VRViewport;
use euclid::default::Size2D;

/// The scene graph as seen by the effect.
pub trait Scene {
    /// Recomputes world matrices of every object in the scene.
    fn update_matrix_world(&mut self);

    /// Whether the renderer refreshes world matrices on each draw.
    fn auto_update(&self) -> bool;

    fn set_auto_update(&mut self, auto_update: bool);
}

/// An offscreen surface with its own viewport and scissor state.
pub trait RenderTarget {
    fn set_viewport(&mut self, rect: VRViewport);

    fn set_scissor(&mut self, rect: VRViewport);

    fn set_scissor_test(&mut self, enabled: bool);
}

/// The renderer that owns the backbuffer and issues draw calls.
pub trait Renderer {
    type Scene: Scene;
    type Target: RenderTarget;

    /// Draws the scene once with the given camera.
    fn render(&mut self,
              scene: &mut Self::Scene,
              camera: &dyn Camera,
              target: Option<&mut Self::Target>,
              force_clear: bool);

    fn clear(&mut self);

    /// Whether each render call clears the target first.
    fn auto_clear(&self) -> bool;

    fn set_render_target(&mut self, target: Option<&mut Self::Target>);

    fn set_viewport(&mut self, rect: VRViewport);

    fn set_scissor(&mut self, rect: VRViewport);

    fn set_scissor_test(&mut self, enabled: bool);

    /// Backbuffer size in logical pixels.
    fn size(&self) -> Size2D<u32>;

    /// Resizes the backbuffer, optionally updating the output surface's style.
    fn set_size(&mut self, width: u32, height: u32, update_style: bool);

    fn pixel_ratio(&self) -> f64;

    fn set_pixel_ratio(&mut self, ratio: f64);

    /// Identifier of the surface handed to the display as the presented layer source.
    fn surface_id(&self) -> u32;
}
