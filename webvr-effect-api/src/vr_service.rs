use crate::VRDisplayPtr;

pub trait VRService {
    fn initialize(&mut self) -> Result<(), String>;

    fn fetch_displays(&mut self) -> Result<Vec<VRDisplayPtr>, String>;

    fn is_available(&self) -> bool;
}

pub trait VRServiceCreator {
    fn new_service(&self) -> Box<dyn VRService>;
}
