use crate::{FrameCallback, VRDisplay, VRDisplayData, VRDisplayEvent, VREye, VREyeParameters, VRFrameData,
            VRFuturePresent, VRLayer, VRPose, VRResolvePresent};
use webvr_effect_api::mock::MockVRControlMsg;
use webvr_effect_api::utils;
use std::cell::RefCell;
use std::mem;
use std::rc::Rc;
use std::sync::mpsc::{channel, Receiver, Sender};

pub type MockVRDisplayPtr = Rc<RefCell<MockVRDisplay>>;

// Distance between the eyes of the simulated headset, in meters.
const EYE_DISTANCE: f32 = 0.064;
// Height of the simulated head in sitting space.
const HEAD_HEIGHT: f32 = 1.6;

struct PendingRequest {
    resolver: VRResolvePresent,
    present: bool,
    layers: Vec<VRLayer>,
}

/// A scriptable display that simulates a tracked HMD.
pub struct MockVRDisplay {
    display_id: u32,
    connected: bool,
    presenting: bool,
    frame_data_supported: bool,
    eye_parameters_supported: bool,
    pose: VRPose,
    left_eye: VREyeParameters,
    right_eye: VREyeParameters,
    left_projection_matrix: [f32; 16],
    right_projection_matrix: [f32; 16],
    left_view_matrix: [f32; 16],
    right_view_matrix: [f32; 16],
    layers: Vec<VRLayer>,
    layer_bounds: Option<(Option<Vec<f32>>, Option<Vec<f32>>)>,
    defer_requests: bool,
    fail_next: Option<String>,
    pending: Vec<PendingRequest>,
    listeners: Vec<Sender<VRDisplayEvent>>,
    callbacks: Vec<(u32, FrameCallback)>,
    next_callback: u32,
    depth: (f64, f64),
    submitted_frames: u32,
}

impl MockVRDisplay {
    pub fn new() -> MockVRDisplayPtr {
        let mut left_eye = VREyeParameters::default();
        left_eye.offset = [-EYE_DISTANCE / 2.0, 0.0, 0.0];
        left_eye.render_width = 1512;
        left_eye.render_height = 1680;
        left_eye.field_of_view.up_degrees = 55.82093048095703;
        left_eye.field_of_view.right_degrees = 51.26948547363281;
        left_eye.field_of_view.down_degrees = 55.707801818847656;
        left_eye.field_of_view.left_degrees = 54.42263412475586;

        let mut right_eye = left_eye.clone();
        right_eye.offset = [EYE_DISTANCE / 2.0, 0.0, 0.0];
        right_eye.field_of_view.right_degrees = 54.37410354614258;
        right_eye.field_of_view.left_degrees = 51.304901123046875;

        // Views of a head at HEAD_HEIGHT looking down -Z with no rotation.
        let mut left_view_matrix: [f32; 16] = webvr_effect_api::identity_matrix!();
        left_view_matrix[12] = EYE_DISTANCE / 2.0;
        left_view_matrix[13] = -HEAD_HEIGHT;
        let mut right_view_matrix: [f32; 16] = webvr_effect_api::identity_matrix!();
        right_view_matrix[12] = -EYE_DISTANCE / 2.0;
        right_view_matrix[13] = -HEAD_HEIGHT;

        Rc::new(RefCell::new(MockVRDisplay {
            display_id: utils::new_id(),
            connected: true,
            presenting: false,
            frame_data_supported: true,
            eye_parameters_supported: true,
            pose: VRPose::new(Some([0.0, HEAD_HEIGHT, 0.0]), Some([0.0, 0.0, 0.0, 1.0])),
            left_eye: left_eye,
            right_eye: right_eye,
            // Simulates HTC Vive projections
            left_projection_matrix: [0.75620246, 0.0, 0.0, 0.0,
                                     0.0, 0.68050665, 0.0, 0.0,
                                     -0.05713458, -0.0021225351, -1.0000999, -1.0,
                                     0.0, 0.0, -0.10000999, 0.0],
            right_projection_matrix: [0.75646526, 0.0, 0.0, 0.0,
                                      0.0, 0.68069947, 0.0, 0.0,
                                      0.055611316, -0.005315368, -1.0000999, -1.0,
                                      0.0, 0.0, -0.10000999, 0.0],
            left_view_matrix: left_view_matrix,
            right_view_matrix: right_view_matrix,
            layers: Vec::new(),
            layer_bounds: None,
            defer_requests: false,
            fail_next: None,
            pending: Vec::new(),
            listeners: Vec::new(),
            callbacks: Vec::new(),
            next_callback: 1,
            depth: (0.0, 0.0),
            submitted_frames: 0,
        }))
    }

    pub fn handle_msg(&mut self, msg: MockVRControlMsg) {
        match msg {
            MockVRControlMsg::SetViewerPose(pose) => {
                self.pose = pose;
            }
            MockVRControlMsg::SetEyeParameters(left, right) => {
                self.left_eye = left;
                self.right_eye = right;
            }
            MockVRControlMsg::SetProjectionMatrices(left, right) => {
                self.left_projection_matrix = left;
                self.right_projection_matrix = right;
            }
            MockVRControlMsg::SetViewMatrices(left, right) => {
                self.left_view_matrix = left;
                self.right_view_matrix = right;
            }
            MockVRControlMsg::SetLayerBounds(left, right) => {
                self.layer_bounds = Some((left, right));
            }
            MockVRControlMsg::SetCapabilities { frame_data, eye_parameters } => {
                self.frame_data_supported = frame_data;
                self.eye_parameters_supported = eye_parameters;
            }
            MockVRControlMsg::FailNextRequest(reason) => {
                self.fail_next = Some(reason);
            }
            MockVRControlMsg::DeferRequests(defer) => {
                self.defer_requests = defer;
            }
            MockVRControlMsg::CompleteRequests => {
                for mut request in mem::replace(&mut self.pending, Vec::new()) {
                    self.apply_presenting(request.present, request.layers);
                    let _ = request.resolver.resolve(Ok(()));
                }
            }
            MockVRControlMsg::Disconnect => {
                self.connected = false;
                self.presenting = false;
                self.layers.clear();
                for mut request in mem::replace(&mut self.pending, Vec::new()) {
                    let _ = request.resolver.resolve(Err("Display is disconnected".into()));
                }
                let id = self.display_id;
                self.notify(VRDisplayEvent::Disconnect(id));
            }
        }
    }

    /// Runs every animation-frame callback queued so far.
    /// Callbacks queued while running wait for the next tick.
    pub fn tick(display: &MockVRDisplayPtr, timestamp: f64) {
        let callbacks = mem::replace(&mut display.borrow_mut().callbacks, Vec::new());
        for (_, callback) in callbacks {
            callback(timestamp);
        }
    }

    pub fn submitted_frames(&self) -> u32 {
        self.submitted_frames
    }

    pub fn pending_callbacks(&self) -> usize {
        self.callbacks.len()
    }

    /// Depth range passed with the last frame data query.
    pub fn last_depth_range(&self) -> (f64, f64) {
        self.depth
    }

    fn notify(&mut self, event: VRDisplayEvent) {
        self.listeners.retain(|listener| listener.send(event.clone()).is_ok());
    }

    fn apply_presenting(&mut self, presenting: bool, layers: Vec<VRLayer>) {
        if presenting {
            self.layers = layers;
        } else {
            self.layers.clear();
        }
        if self.presenting != presenting {
            self.presenting = presenting;
            let id = self.display_id;
            self.notify(VRDisplayEvent::PresentChange(id, presenting));
        }
    }

    fn settle(&mut self, present: bool, layers: Vec<VRLayer>) -> VRFuturePresent {
        if !self.connected {
            return VRFuturePresent::resolved(Err("Display is disconnected".into()));
        }
        if let Some(reason) = self.fail_next.take() {
            return VRFuturePresent::resolved(Err(reason));
        }
        if self.defer_requests {
            let (resolver, future) = VRFuturePresent::blocked();
            self.pending.push(PendingRequest {
                resolver: resolver,
                present: present,
                layers: layers,
            });
            return future;
        }
        self.apply_presenting(present, layers);
        VRFuturePresent::resolved(Ok(()))
    }
}

impl VRDisplay for MockVRDisplay {

    fn id(&self) -> u32 {
        self.display_id
    }

    fn data(&self) -> VRDisplayData {
        let mut data = VRDisplayData::default();

        data.display_id = self.display_id;
        data.connected = self.connected;

        data.left_eye_parameters = self.left_eye.clone();
        data.right_eye_parameters = self.right_eye.clone();

        data
    }

    fn is_presenting(&self) -> bool {
        self.presenting
    }

    fn eye_parameters(&self, eye: VREye) -> Option<VREyeParameters> {
        if !self.eye_parameters_supported {
            return None;
        }
        Some(match eye {
            VREye::Left => self.left_eye.clone(),
            VREye::Right => self.right_eye.clone(),
        })
    }

    fn frame_data(&mut self, near_z: f64, far_z: f64) -> Option<VRFrameData> {
        if !self.frame_data_supported {
            return None;
        }
        self.depth = (near_z, far_z);
        Some(VRFrameData {
            timestamp: utils::timestamp(),
            left_projection_matrix: self.left_projection_matrix,
            left_view_matrix: self.left_view_matrix,
            right_projection_matrix: self.right_projection_matrix,
            right_view_matrix: self.right_view_matrix,
            pose: self.pose,
        })
    }

    fn layers(&self) -> Vec<VRLayer> {
        let mut layers = self.layers.clone();
        if let (Some(layer), Some(&(ref left, ref right))) = (layers.first_mut(), self.layer_bounds.as_ref()) {
            layer.left_bounds = left.clone();
            layer.right_bounds = right.clone();
        }
        layers
    }

    fn request_present(&mut self, layers: Vec<VRLayer>) -> VRFuturePresent {
        self.settle(true, layers)
    }

    fn exit_present(&mut self) -> VRFuturePresent {
        if !self.presenting && self.pending.is_empty() {
            return VRFuturePresent::resolved(Ok(()));
        }
        self.settle(false, Vec::new())
    }

    fn request_animation_frame(&mut self, callback: FrameCallback) -> u32 {
        let handle = self.next_callback;
        self.next_callback += 1;
        self.callbacks.push((handle, callback));
        handle
    }

    fn cancel_animation_frame(&mut self, handle: u32) {
        self.callbacks.retain(|&(h, _)| h != handle);
    }

    fn submit_frame(&mut self) {
        if self.presenting {
            self.submitted_frames += 1;
        }
    }

    fn subscribe(&mut self) -> Receiver<VRDisplayEvent> {
        let (send, recv) = channel();
        self.listeners.push(send);
        recv
    }
}
