#![allow(dead_code)]

use euclid::default::Size2D;
use webvr_effect::math::{self, Matrix4, Vector3};
use webvr_effect::{Camera, RenderTarget, Renderer, Scene, VRViewport};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Render {
        position: Vector3,
        projection: Matrix4,
        layers: u32,
        to_target: bool,
        scene_auto_update: bool,
    },
    Clear,
    SetRenderTarget(bool),
    Viewport(VRViewport),
    Scissor(VRViewport),
    ScissorTest(bool),
    SetSize(u32, u32, bool),
    SetPixelRatio(f64),
}

/// Renderer fake that records every call it receives.
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
    pub size: Size2D<u32>,
    pub pixel_ratio: f64,
    pub auto_clear: bool,
}

impl RecordingRenderer {
    pub fn new(width: u32, height: u32, pixel_ratio: f64) -> RecordingRenderer {
        RecordingRenderer {
            calls: Vec::new(),
            size: Size2D::new(width, height),
            pixel_ratio: pixel_ratio,
            auto_clear: true,
        }
    }

    pub fn renders(&self) -> Vec<&Call> {
        self.calls.iter().filter(|call| match call {
            Call::Render { .. } => true,
            _ => false,
        }).collect()
    }

    pub fn viewports(&self) -> Vec<VRViewport> {
        self.calls.iter().filter_map(|call| match *call {
            Call::Viewport(rect) => Some(rect),
            _ => None,
        }).collect()
    }
}

impl Renderer for RecordingRenderer {
    type Scene = TestScene;
    type Target = TestTarget;

    fn render(&mut self, scene: &mut TestScene, camera: &dyn Camera, target: Option<&mut TestTarget>, _force_clear: bool) {
        let (position, _, _) = math::decompose(&camera.matrix_world());
        self.calls.push(Call::Render {
            position: position,
            projection: camera.projection_matrix(),
            layers: camera.layers(),
            to_target: target.is_some(),
            scene_auto_update: scene.auto_update(),
        });
        scene.draws += 1;
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn auto_clear(&self) -> bool {
        self.auto_clear
    }

    fn set_render_target(&mut self, target: Option<&mut TestTarget>) {
        self.calls.push(Call::SetRenderTarget(target.is_some()));
    }

    fn set_viewport(&mut self, rect: VRViewport) {
        self.calls.push(Call::Viewport(rect));
    }

    fn set_scissor(&mut self, rect: VRViewport) {
        self.calls.push(Call::Scissor(rect));
    }

    fn set_scissor_test(&mut self, enabled: bool) {
        self.calls.push(Call::ScissorTest(enabled));
    }

    fn size(&self) -> Size2D<u32> {
        self.size
    }

    fn set_size(&mut self, width: u32, height: u32, update_style: bool) {
        self.size = Size2D::new(width, height);
        self.calls.push(Call::SetSize(width, height, update_style));
    }

    fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn set_pixel_ratio(&mut self, ratio: f64) {
        self.pixel_ratio = ratio;
        self.calls.push(Call::SetPixelRatio(ratio));
    }

    fn surface_id(&self) -> u32 {
        7
    }
}

pub struct TestScene {
    pub auto_update: bool,
    pub world_updates: u32,
    pub draws: u32,
}

impl TestScene {
    pub fn new() -> TestScene {
        TestScene {
            auto_update: true,
            world_updates: 0,
            draws: 0,
        }
    }
}

impl Scene for TestScene {
    fn update_matrix_world(&mut self) {
        self.world_updates += 1;
    }

    fn auto_update(&self) -> bool {
        self.auto_update
    }

    fn set_auto_update(&mut self, auto_update: bool) {
        self.auto_update = auto_update;
    }
}

#[derive(Default)]
pub struct TestTarget {
    pub calls: Vec<Call>,
}

impl RenderTarget for TestTarget {
    fn set_viewport(&mut self, rect: VRViewport) {
        self.calls.push(Call::Viewport(rect));
    }

    fn set_scissor(&mut self, rect: VRViewport) {
        self.calls.push(Call::Scissor(rect));
    }

    fn set_scissor_test(&mut self, enabled: bool) {
        self.calls.push(Call::ScissorTest(enabled));
    }
}

/// The application's mono camera.
pub struct TestCamera {
    pub matrix: Matrix4,
    pub near: f64,
    pub far: f64,
    pub world_updates: u32,
}

impl TestCamera {
    pub fn at(x: f32, y: f32, z: f32) -> TestCamera {
        TestCamera {
            matrix: Matrix4::translation(x, y, z),
            near: 0.1,
            far: 1000.0,
            world_updates: 0,
        }
    }
}

impl Camera for TestCamera {
    fn matrix_world(&self) -> Matrix4 {
        self.matrix
    }

    fn projection_matrix(&self) -> Matrix4 {
        Matrix4::identity()
    }

    fn near(&self) -> f64 {
        self.near
    }

    fn far(&self) -> f64 {
        self.far
    }

    fn update_matrix_world(&mut self) {
        self.world_updates += 1;
    }
}
