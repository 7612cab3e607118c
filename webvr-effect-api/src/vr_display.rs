use crate::{VRDisplayData, VRDisplayEvent, VREye, VREyeParameters, VRFrameData, VRFuturePresent, VRLayer};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Receiver;

pub type VRDisplayPtr = Rc<RefCell<dyn VRDisplay>>;

/// Callback run by the display on its next animation frame, with the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// The VRDisplay traits forms the base of all VR device implementations.
///
/// A display provides per-frame data through one of two shapes: unified
/// frame data (pose plus ready-made view and projection matrices), or the
/// static per-eye parameters older devices expose. Displays that lack a shape
/// return `None` from the corresponding query.
pub trait VRDisplay {

    /// Returns unique device identifier
    fn id(&self) -> u32;

    /// Returns the current display data.
    fn data(&self) -> VRDisplayData;

    /// Whether the display currently has an active presentation session.
    fn is_presenting(&self) -> bool;

    /// Returns the parameters of an eye, if the display exposes them.
    fn eye_parameters(&self, eye: VREye) -> Option<VREyeParameters> {
        let data = self.data();
        Some(match eye {
            VREye::Left => data.left_eye_parameters,
            VREye::Right => data.right_eye_parameters,
        })
    }

    /// Returns the VRFrameData for the frame about to be rendered,
    /// with projections built for the given depth range.
    /// Returns None when the display does not provide unified frame data.
    fn frame_data(&mut self, _near_z: f64, _far_z: f64) -> Option<VRFrameData> {
        None
    }

    /// Returns the layers currently being presented.
    fn layers(&self) -> Vec<VRLayer>;

    /// Asks the display to start presenting the given layers.
    /// The display announces the outcome with a `PresentChange` event.
    fn request_present(&mut self, layers: Vec<VRLayer>) -> VRFuturePresent;

    /// Asks the display to stop presenting.
    fn exit_present(&mut self) -> VRFuturePresent;

    /// Schedules a callback for the display's next animation frame.
    fn request_animation_frame(&mut self, callback: FrameCallback) -> u32;

    /// Cancels a callback scheduled with request_animation_frame.
    fn cancel_animation_frame(&mut self, handle: u32);

    /// Submits frame to the display
    /// Must be called in the render thread
    fn submit_frame(&mut self);

    /// Registers a listener for this display's events.
    /// Dropping the receiver ends the subscription.
    fn subscribe(&mut self) -> Receiver<VRDisplayEvent>;
}

impl PartialEq for dyn VRDisplay {
    fn eq(&self, other: &dyn VRDisplay) -> bool {
        self.id() == other.id()
    }
}
