use crate::camera::{Camera, StereoCameraPair};
use crate::config::EffectConfig;
use crate::error::EffectError;
use crate::frame_source::FrameSource;
use crate::render_rect;
use crate::renderer::{RenderTarget, Renderer, Scene};
use crate::vr_manager::VRServiceManager;
use crate::{FrameCallback, VRDisplayEvent, VRDisplayPtr, VREye, VRFuturePresent, VRLayer, VRViewport};
use euclid::default::Size2D;
use std::sync::mpsc::Receiver;

/// Host-provided animation-frame scheduling, used when no display is bound.
pub trait FrameScheduler {
    fn request_animation_frame(&mut self, callback: FrameCallback) -> u32;

    fn cancel_animation_frame(&mut self, handle: u32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationState {
    /// Full-window mono rendering.
    Idle,
    /// Split-viewport stereo rendering to the display.
    Presenting,
}

// Backbuffer configuration to restore when presentation ends.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SavedBackbuffer {
    size: Size2D<u32>,
    pixel_ratio: f64,
    update_style: bool,
}

enum PresentState {
    Settled(Result<(), EffectError>),
    Pending(VRFuturePresent),
}

/// Outcome of `request_present` or `exit_present`. It settles exactly once
/// and cannot be cancelled. Presentation state itself only changes when the
/// display reports it.
pub struct PresentRequest(PresentState);

impl PresentRequest {
    fn settled(result: Result<(), EffectError>) -> PresentRequest {
        PresentRequest(PresentState::Settled(result))
    }

    fn pending(future: VRFuturePresent) -> PresentRequest {
        PresentRequest(PresentState::Pending(future))
    }

    /// Returns the outcome if the display has settled the request.
    pub fn try_take(&mut self) -> Option<Result<(), EffectError>> {
        match self.0 {
            PresentState::Settled(ref result) => Some(result.clone()),
            PresentState::Pending(ref mut future) => future.try_take().map(|r| r.map_err(EffectError::Device)),
        }
    }

    /// Blocks until the display settles the request.
    pub fn wait(self) -> Result<(), EffectError> {
        match self.0 {
            PresentState::Settled(result) => result,
            PresentState::Pending(future) => future.block().map_err(EffectError::Device),
        }
    }
}

/// Renders a scene in stereo for a head-mounted display.
///
/// While the bound display presents, each `render` call draws the scene
/// twice, once per eye, into two halves of the backbuffer. Otherwise it
/// forwards a single mono render to the renderer.
///
/// The effect is driven from one thread, once per animation frame, and is
/// not reentrant.
pub struct StereoEffect<R: Renderer> {
    renderer: R,
    config: EffectConfig,
    display: Option<VRDisplayPtr>,
    events: Option<Receiver<VRDisplayEvent>>,
    scheduler: Option<Box<dyn FrameScheduler>>,
    cameras: StereoCameraPair,
    state: PresentationState,
    saved: SavedBackbuffer,
    render_rects: Option<(VRViewport, VRViewport)>,
    disposed: bool,
}

impl<R: Renderer> StereoEffect<R> {
    pub fn new(renderer: R, display: Option<VRDisplayPtr>) -> StereoEffect<R> {
        StereoEffect::with_config(renderer, display, EffectConfig::default())
    }

    pub fn with_config(renderer: R, display: Option<VRDisplayPtr>, config: EffectConfig) -> StereoEffect<R> {
        let saved = SavedBackbuffer {
            size: renderer.size(),
            pixel_ratio: renderer.pixel_ratio(),
            update_style: false,
        };
        let cameras = StereoCameraPair::new(config.left_layer, config.right_layer);
        let mut effect = StereoEffect {
            renderer: renderer,
            config: config,
            display: None,
            events: None,
            scheduler: None,
            cameras: cameras,
            state: PresentationState::Idle,
            saved: saved,
            render_rects: None,
            disposed: false,
        };
        effect.set_display(display);
        effect
    }

    /// Creates an effect bound to the first connected display the services
    /// report. `on_error` hears about it when there is none.
    pub fn discover<F>(renderer: R, manager: &mut VRServiceManager, on_error: F) -> StereoEffect<R>
        where F: FnOnce(&str)
    {
        let display = manager.get_displays()
                             .into_iter()
                             .find(|display| display.borrow().data().connected);
        if display.is_none() {
            on_error("VR input not available.");
        }
        StereoEffect::new(renderer, display)
    }

    /// Sets the scheduler used for animation frames while no display is bound.
    pub fn set_frame_scheduler(&mut self, scheduler: Box<dyn FrameScheduler>) {
        self.scheduler = Some(scheduler);
    }

    pub fn display(&self) -> Option<&VRDisplayPtr> {
        self.display.as_ref()
    }

    /// Binds another display, moving the presentation subscription to it.
    /// The presentation state then follows the new display, so unbinding
    /// while presenting restores the mono backbuffer.
    pub fn set_display(&mut self, display: Option<VRDisplayPtr>) {
        self.events = match display {
            Some(ref display) if !self.disposed => Some(display.borrow_mut().subscribe()),
            _ => None,
        };
        self.display = display;
        self.on_present_change();
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EffectConfig {
        &mut self.config
    }

    pub fn cameras(&self) -> &StereoCameraPair {
        &self.cameras
    }

    pub fn state(&self) -> PresentationState {
        self.state
    }

    pub fn is_presenting(&self) -> bool {
        self.state == PresentationState::Presenting
    }

    /// Eye viewports used by the last stereo render.
    pub fn render_rects(&self) -> Option<(VRViewport, VRViewport)> {
        self.render_rects
    }

    /// Resizes the output. While presenting the display dictates the
    /// backbuffer size, so the request is only recorded and applied when
    /// presentation ends.
    pub fn set_size(&mut self, width: u32, height: u32, update_style: bool) {
        self.saved.size = Size2D::new(width, height);
        self.saved.update_style = update_style;

        if self.is_presenting() {
            self.apply_eye_backbuffer();
        } else {
            self.renderer.set_pixel_ratio(self.saved.pixel_ratio);
            self.renderer.set_size(width, height, update_style);
        }
    }

    /// Handles the queued display events.
    pub fn poll_events(&mut self) {
        let events: Vec<VRDisplayEvent> = match self.events {
            Some(ref events) => events.try_iter().collect(),
            None => return,
        };
        let bound = match self.display {
            Some(ref display) => display.borrow().id(),
            None => return,
        };

        for event in events {
            match event {
                VRDisplayEvent::PresentChange(id, _) | VRDisplayEvent::Disconnect(id) if id == bound => {
                    self.on_present_change();
                }
                _ => {}
            }
        }
    }

    /// Syncs with the display's presentation state, swapping the backbuffer
    /// configuration on a transition. Repeated notifications are harmless.
    pub fn on_present_change(&mut self) {
        if self.disposed {
            return;
        }

        let was_presenting = self.is_presenting();
        let presenting = self.display.as_ref().map_or(false, |display| display.borrow().is_presenting());

        if presenting {
            self.state = PresentationState::Presenting;
            if !was_presenting {
                self.saved.pixel_ratio = self.renderer.pixel_ratio();
                self.saved.size = self.renderer.size();
                self.apply_eye_backbuffer();
                debug!("Presentation started, saved backbuffer {:?}", self.saved);
            }
        } else {
            self.state = PresentationState::Idle;
            if was_presenting {
                let saved = self.saved;
                self.renderer.set_pixel_ratio(saved.pixel_ratio);
                self.renderer.set_size(saved.size.width, saved.size.height, saved.update_style);
                debug!("Presentation ended, restored backbuffer {:?}", saved);
            }
        }
    }

    // Sizes the backbuffer for both eyes side by side at the display's resolution.
    fn apply_eye_backbuffer(&mut self) {
        let eye = match self.display {
            Some(ref display) => {
                let display = display.borrow();
                display.eye_parameters(VREye::Left).unwrap_or_else(|| display.data().left_eye_parameters)
            }
            None => return,
        };
        if eye.render_width == 0 || eye.render_height == 0 {
            warn!("Display reports no eye render size, keeping the backbuffer size");
            return;
        }
        self.renderer.set_pixel_ratio(1.0);
        self.renderer.set_size(eye.render_width * 2, eye.render_height, false);
    }

    pub fn request_present(&mut self) -> PresentRequest {
        self.set_presenting(true)
    }

    pub fn exit_present(&mut self) -> PresentRequest {
        self.set_presenting(false)
    }

    fn set_presenting(&mut self, present: bool) -> PresentRequest {
        let display = match self.display {
            Some(ref display) => display.clone(),
            None => return PresentRequest::settled(Err(EffectError::NoDevice)),
        };
        if self.is_presenting() == present {
            return PresentRequest::settled(Ok(()));
        }

        let future = if present {
            let layer = VRLayer::with_source(self.renderer.surface_id());
            display.borrow_mut().request_present(vec![layer])
        } else {
            display.borrow_mut().exit_present()
        };
        PresentRequest::pending(future)
    }

    /// Schedules `callback` on the display's frame loop, or the host's when no display is bound.
    pub fn request_animation_frame(&mut self, callback: FrameCallback) -> Result<u32, EffectError> {
        if let Some(ref display) = self.display {
            return Ok(display.borrow_mut().request_animation_frame(callback));
        }
        match self.scheduler {
            Some(ref mut scheduler) => Ok(scheduler.request_animation_frame(callback)),
            None => Err(EffectError::NoDevice),
        }
    }

    pub fn cancel_animation_frame(&mut self, handle: u32) {
        if let Some(ref display) = self.display {
            display.borrow_mut().cancel_animation_frame(handle);
        } else if let Some(ref mut scheduler) = self.scheduler {
            scheduler.cancel_animation_frame(handle);
        }
    }

    /// Hands the rendered frame to the display. Does nothing unless presenting.
    pub fn submit_frame(&mut self) {
        if !self.is_presenting() {
            return;
        }
        if let Some(ref display) = self.display {
            display.borrow_mut().submit_frame();
        }
    }

    /// Renders `scene` from `camera`, in stereo while presenting.
    ///
    /// Fails before drawing anything when the display offers no usable frame data.
    pub fn render(&mut self,
                  scene: &mut R::Scene,
                  camera: &mut dyn Camera,
                  mut target: Option<&mut R::Target>,
                  force_clear: bool) -> Result<(), EffectError> {
        self.poll_events();

        let display = match self.display {
            Some(ref display) if self.is_presenting() => display.clone(),
            _ => {
                self.renderer.render(scene, &*camera, target, force_clear);
                return Ok(());
            }
        };

        let source = FrameSource::resolve(&mut *display.borrow_mut(), camera.near(), camera.far())?;

        let auto_update = scene.auto_update();
        if auto_update {
            scene.update_matrix_world();
            scene.set_auto_update(false);
        }

        // Only the actual backbuffer size matters here, not the recommended one.
        let size = self.renderer.size();
        let layers = display.borrow().layers();
        let (left_bounds, right_bounds) = render_rect::eye_bounds(
            &layers,
            &self.config.default_left_bounds,
            &self.config.default_right_bounds,
        );
        let left_rect = render_rect::render_rect(size, &left_bounds);
        let right_rect = render_rect::render_rect(size, &right_bounds);
        self.render_rects = Some((left_rect, right_rect));

        match target.as_deref_mut() {
            Some(target) => {
                target.set_scissor_test(true);
                self.renderer.set_render_target(Some(target));
            }
            None => {
                self.renderer.set_render_target(None);
                self.renderer.set_scissor_test(true);
            }
        }

        if self.renderer.auto_clear() || force_clear {
            self.renderer.clear();
        }

        if !camera.has_parent() {
            camera.update_matrix_world();
        }
        self.cameras.track(&*camera);
        source.apply(&mut self.cameras);

        self.set_eye_rect(target.as_deref_mut(), left_rect);
        self.renderer.render(scene, &self.cameras.left, target.as_deref_mut(), force_clear);

        self.set_eye_rect(target.as_deref_mut(), right_rect);
        self.renderer.render(scene, &self.cameras.right, target.as_deref_mut(), force_clear);

        let full = render_rect::full_rect(size);
        match target {
            Some(target) => {
                target.set_viewport(full);
                target.set_scissor(full);
                target.set_scissor_test(false);
                self.renderer.set_render_target(None);
            }
            None => {
                self.renderer.set_viewport(full);
                self.renderer.set_scissor_test(false);
            }
        }

        if auto_update {
            scene.set_auto_update(true);
        }

        if self.config.auto_submit_frame {
            self.submit_frame();
        }
        Ok(())
    }

    fn set_eye_rect(&mut self, target: Option<&mut R::Target>, rect: VRViewport) {
        match target {
            Some(target) => {
                target.set_viewport(rect);
                target.set_scissor(rect);
            }
            None => {
                self.renderer.set_viewport(rect);
                self.renderer.set_scissor(rect);
            }
        }
    }

    /// Drops the presentation subscription. Later notifications leave the renderer untouched.
    pub fn dispose(&mut self) {
        self.events = None;
        self.disposed = true;
    }
}
