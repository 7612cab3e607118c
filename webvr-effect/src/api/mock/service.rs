use crate::{VRService, VRDisplayPtr};
use super::display::{MockVRDisplay, MockVRDisplayPtr};

pub struct MockVRService {
    display: MockVRDisplayPtr,
}

impl VRService for MockVRService {
    fn initialize(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn fetch_displays(&mut self) -> Result<Vec<VRDisplayPtr>, String> {
        let display: VRDisplayPtr = self.display.clone();
        Ok(vec![display])
    }

    fn is_available(&self) -> bool {
        true
    }
}

impl MockVRService {
    pub fn new() -> MockVRService {
        MockVRService::with_display(MockVRDisplay::new())
    }

    pub fn with_display(display: MockVRDisplayPtr) -> MockVRService {
        MockVRService {
            display: display,
        }
    }
}
