mod common;

use approx::assert_abs_diff_eq;
use common::{Call, RecordingRenderer, TestCamera, TestScene, TestTarget};
use webvr_effect::api::{MockVRDisplay, MockVRDisplayPtr};
use webvr_effect::mock::MockVRControlMsg;
use webvr_effect::projection::{self, ProjectionParams};
use webvr_effect::{EffectError, StereoEffect, VRDisplay, VRDisplayPtr, VREyeParameters, VRViewport};

fn eye(width: u32, height: u32, offset_x: f32) -> VREyeParameters {
    let mut eye = VREyeParameters::default();
    eye.offset = [offset_x, 0.0, 0.0];
    eye.render_width = width;
    eye.render_height = height;
    eye.field_of_view.up_degrees = 45.0;
    eye.field_of_view.down_degrees = 45.0;
    eye.field_of_view.left_degrees = 45.0;
    eye.field_of_view.right_degrees = 45.0;
    eye
}

// A presenting effect whose backbuffer is 1000x800.
fn presenting_effect() -> (StereoEffect<RecordingRenderer>, MockVRDisplayPtr) {
    let display = MockVRDisplay::new();
    display.borrow_mut().handle_msg(MockVRControlMsg::SetEyeParameters(eye(500, 800, -0.032), eye(500, 800, 0.032)));
    let ptr: VRDisplayPtr = display.clone();
    let mut effect = StereoEffect::new(RecordingRenderer::new(640, 480, 2.0), Some(ptr));
    effect.request_present().wait().unwrap();
    effect.poll_events();
    assert!(effect.is_presenting());
    effect.renderer_mut().calls.clear();
    (effect, display)
}

fn positions(renderer: &RecordingRenderer) -> Vec<(f32, f32, f32)> {
    renderer.renders().into_iter().map(|call| match *call {
        Call::Render { position, .. } => (position.x, position.y, position.z),
        _ => unreachable!(),
    }).collect()
}

#[test]
fn idle_render_is_a_single_mono_pass() {
    let display = MockVRDisplay::new();
    let ptr: VRDisplayPtr = display.clone();
    let mut effect = StereoEffect::new(RecordingRenderer::new(640, 480, 1.0), Some(ptr));
    let mut scene = TestScene::new();
    let mut camera = TestCamera::at(1.0, 2.0, 3.0);

    effect.render(&mut scene, &mut camera, None, false).unwrap();

    let renderer = effect.renderer();
    assert_eq!(renderer.calls.len(), 1);
    assert_eq!(positions(renderer), vec![(1.0, 2.0, 3.0)]);
    assert_eq!(display.borrow().submitted_frames(), 0);
    assert!(effect.render_rects().is_none());
}

#[test]
fn stereo_render_splits_the_backbuffer() {
    let (mut effect, display) = presenting_effect();
    let mut scene = TestScene::new();
    let mut camera = TestCamera::at(0.0, 0.0, 5.0);

    effect.render(&mut scene, &mut camera, None, false).unwrap();

    let left = VRViewport::new(0, 0, 500, 800);
    let right = VRViewport::new(500, 0, 500, 800);
    assert_eq!(effect.render_rects(), Some((left, right)));

    let calls = &effect.renderer().calls;
    assert_eq!(calls[0], Call::SetRenderTarget(false));
    assert_eq!(calls[1], Call::ScissorTest(true));
    assert_eq!(calls[2], Call::Clear);
    assert_eq!(&calls[3..5], &[Call::Viewport(left), Call::Scissor(left)]);
    assert_eq!(&calls[6..8], &[Call::Viewport(right), Call::Scissor(right)]);
    assert_eq!(&calls[9..], &[Call::Viewport(VRViewport::new(0, 0, 1000, 800)), Call::ScissorTest(false)]);

    assert_eq!(display.borrow().submitted_frames(), 1);
    assert_eq!(display.borrow().last_depth_range(), (0.1, 1000.0));
    assert_eq!(camera.world_updates, 1);
}

#[test]
fn scene_auto_update_is_frozen_during_eye_passes() {
    let (mut effect, _display) = presenting_effect();
    let mut scene = TestScene::new();
    let mut camera = TestCamera::at(0.0, 0.0, 0.0);

    effect.render(&mut scene, &mut camera, None, false).unwrap();

    assert_eq!(scene.world_updates, 1);
    assert_eq!(scene.draws, 2);
    assert!(scene.auto_update);
    for call in effect.renderer().renders() {
        match *call {
            Call::Render { scene_auto_update, .. } => assert!(!scene_auto_update),
            _ => unreachable!(),
        }
    }
}

#[test]
fn frame_data_offsets_eyes_and_uses_device_projections() {
    let (mut effect, display) = presenting_effect();
    let mut scene = TestScene::new();
    let mut camera = TestCamera::at(0.0, 0.0, 5.0);

    effect.render(&mut scene, &mut camera, None, false).unwrap();

    let frame = display.borrow_mut().frame_data(0.1, 1000.0).unwrap();
    let renders = effect.renderer().renders();
    match (renders[0], renders[1]) {
        (&Call::Render { position: l, projection: lp, layers: ll, .. },
         &Call::Render { position: r, projection: rp, layers: rl, .. }) => {
            assert_abs_diff_eq!(l.x, -0.032, epsilon = 1e-5);
            assert_abs_diff_eq!(l.y, 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(l.z, 5.0, epsilon = 1e-5);
            assert_abs_diff_eq!(r.x, 0.032, epsilon = 1e-5);
            assert_eq!(lp.to_array(), frame.left_projection_matrix);
            assert_eq!(rp.to_array(), frame.right_projection_matrix);
            assert_eq!((ll, rl), (0b011, 0b101));
        }
        _ => unreachable!(),
    }
    let cameras = effect.cameras();
    assert_abs_diff_eq!(cameras.left.scale.x, cameras.right.scale.x, epsilon = 1e-6);
}

#[test]
fn eye_parameters_path_derives_projection_from_fov() {
    let (mut effect, display) = presenting_effect();
    display.borrow_mut().handle_msg(MockVRControlMsg::SetCapabilities { frame_data: false, eye_parameters: true });
    let mut scene = TestScene::new();
    let mut camera = TestCamera::at(0.0, 1.0, 5.0);

    effect.render(&mut scene, &mut camera, None, false).unwrap();

    let expected = projection::fov_to_projection(&eye(500, 800, 0.0).field_of_view, &ProjectionParams::with_depth(0.1, 1000.0));
    let cameras = effect.cameras();
    assert_eq!(cameras.left.projection, expected);
    assert_eq!(cameras.right.projection, expected);
    assert_abs_diff_eq!(cameras.left.position.x, -0.032, epsilon = 1e-6);
    assert_abs_diff_eq!(cameras.right.position.x, 0.032, epsilon = 1e-6);
    assert_abs_diff_eq!(cameras.left.position.y, 1.0, epsilon = 1e-6);
}

#[test]
fn unsupported_display_fails_before_drawing() {
    let (mut effect, display) = presenting_effect();
    display.borrow_mut().handle_msg(MockVRControlMsg::SetCapabilities { frame_data: false, eye_parameters: false });
    let mut scene = TestScene::new();
    let mut camera = TestCamera::at(0.0, 0.0, 0.0);

    assert_eq!(effect.render(&mut scene, &mut camera, None, false), Err(EffectError::UnsupportedCapability));
    assert!(effect.renderer().calls.is_empty());
    assert!(scene.auto_update);
    assert_eq!(display.borrow().submitted_frames(), 0);
}

#[test]
fn malformed_bounds_fall_back_for_that_frame_only() {
    let (mut effect, display) = presenting_effect();
    let mut scene = TestScene::new();
    let mut camera = TestCamera::at(0.0, 0.0, 0.0);

    display.borrow_mut().handle_msg(MockVRControlMsg::SetLayerBounds(Some(vec![0.0, 0.0, 0.5]), None));
    effect.render(&mut scene, &mut camera, None, false).unwrap();
    assert_eq!(effect.render_rects(), Some((VRViewport::new(0, 0, 500, 800), VRViewport::new(500, 0, 500, 800))));

    display.borrow_mut().handle_msg(MockVRControlMsg::SetLayerBounds(
        Some(vec![0.0, 0.0, 0.25, 1.0]),
        Some(vec![0.25, 0.0, 0.75, 1.0]),
    ));
    effect.render(&mut scene, &mut camera, None, false).unwrap();
    assert_eq!(effect.render_rects(), Some((VRViewport::new(0, 0, 250, 800), VRViewport::new(250, 0, 750, 800))));
}

#[test]
fn render_target_receives_eye_viewports() {
    let (mut effect, _display) = presenting_effect();
    let mut scene = TestScene::new();
    let mut camera = TestCamera::at(0.0, 0.0, 0.0);
    let mut target = TestTarget::default();

    effect.render(&mut scene, &mut camera, Some(&mut target), false).unwrap();

    let left = VRViewport::new(0, 0, 500, 800);
    let right = VRViewport::new(500, 0, 500, 800);
    let full = VRViewport::new(0, 0, 1000, 800);
    assert_eq!(target.calls, vec![
        Call::ScissorTest(true),
        Call::Viewport(left), Call::Scissor(left),
        Call::Viewport(right), Call::Scissor(right),
        Call::Viewport(full), Call::Scissor(full),
        Call::ScissorTest(false),
    ]);

    let renderer = effect.renderer();
    assert_eq!(renderer.calls.first(), Some(&Call::SetRenderTarget(true)));
    assert_eq!(renderer.calls.last(), Some(&Call::SetRenderTarget(false)));
    assert!(renderer.viewports().is_empty());
    for call in renderer.renders() {
        match *call {
            Call::Render { to_target, .. } => assert!(to_target),
            _ => unreachable!(),
        }
    }
}

#[test]
fn clear_only_when_requested() {
    let (mut effect, _display) = presenting_effect();
    effect.renderer_mut().auto_clear = false;
    let mut scene = TestScene::new();
    let mut camera = TestCamera::at(0.0, 0.0, 0.0);

    effect.render(&mut scene, &mut camera, None, false).unwrap();
    assert!(!effect.renderer().calls.contains(&Call::Clear));

    effect.render(&mut scene, &mut camera, None, true).unwrap();
    assert!(effect.renderer().calls.contains(&Call::Clear));
}

#[test]
fn manual_submission_when_auto_submit_is_off() {
    let (mut effect, display) = presenting_effect();
    effect.config_mut().auto_submit_frame = false;
    let mut scene = TestScene::new();
    let mut camera = TestCamera::at(0.0, 0.0, 0.0);

    effect.render(&mut scene, &mut camera, None, false).unwrap();
    assert_eq!(display.borrow().submitted_frames(), 0);

    effect.submit_frame();
    assert_eq!(display.borrow().submitted_frames(), 1);
}

#[test]
fn submit_frame_while_idle_is_ignored() {
    let display = MockVRDisplay::new();
    let ptr: VRDisplayPtr = display.clone();
    let mut effect = StereoEffect::new(RecordingRenderer::new(640, 480, 1.0), Some(ptr));
    effect.submit_frame();
    assert_eq!(display.borrow().submitted_frames(), 0);
}

#[test]
fn render_picks_up_pending_presentation_change() {
    let display = MockVRDisplay::new();
    display.borrow_mut().handle_msg(MockVRControlMsg::SetEyeParameters(eye(500, 800, -0.032), eye(500, 800, 0.032)));
    let ptr: VRDisplayPtr = display.clone();
    let mut effect = StereoEffect::new(RecordingRenderer::new(640, 480, 1.0), Some(ptr));
    effect.request_present().wait().unwrap();

    let mut scene = TestScene::new();
    let mut camera = TestCamera::at(0.0, 0.0, 0.0);
    effect.render(&mut scene, &mut camera, None, false).unwrap();

    assert!(effect.is_presenting());
    assert_eq!(effect.renderer().renders().len(), 2);
}
