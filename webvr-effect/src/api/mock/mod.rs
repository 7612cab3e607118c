mod display;
mod service;

use crate::{VRService, VRServiceCreator};
pub use self::display::{MockVRDisplay, MockVRDisplayPtr};

pub struct MockServiceCreator;

impl MockServiceCreator {
    pub fn new() -> Box<dyn VRServiceCreator> {
        Box::new(MockServiceCreator)
    }

    /// Creates a service along with a handle to its display,
    /// which tests drive through `MockVRControlMsg`.
    pub fn new_service_with_display() -> (Box<dyn VRService>, MockVRDisplayPtr) {
        let display = MockVRDisplay::new();
        let service = service::MockVRService::with_display(display.clone());
        (Box::new(service), display)
    }
}

impl VRServiceCreator for MockServiceCreator {
     fn new_service(&self) -> Box<dyn VRService> {
         Box::new(service::MockVRService::new())
     }
}
