use std::collections::HashMap;
use crate::VRDisplayPtr;
use crate::VRService;
use crate::VRServiceCreator;

// Single entry point all the VRServices and displays
pub struct VRServiceManager {
    initialized: bool,
    services: Vec<Box<dyn VRService>>,
    displays: HashMap<u32, VRDisplayPtr>,
}

impl Drop for VRServiceManager {
     fn drop(&mut self) {
         self.displays.clear();
         self.services.clear();
     }
}

impl VRServiceManager {
    pub fn new() -> VRServiceManager {
        VRServiceManager {
            initialized: false,
            services: Vec::new(),
            displays: HashMap::new(),
        }
    }

    pub fn register_creator(&mut self, creator: &dyn VRServiceCreator) {
        self.register(creator.new_service());
    }

    // Register a new VR service
    pub fn register(&mut self, service: Box<dyn VRService>) {
        self.services.push(service);
    }

    // Initializes all the services
    pub fn initialize_services(&mut self) {
        if self.initialized {
            return;
        }

        for service in &mut self.services {
            if let Err(msg) = service.initialize() {
                error!("Error initializing VRService: {:?}", msg);
            }
        }
        self.initialized = true;
    }

    pub fn get_displays(&mut self) -> Vec<VRDisplayPtr> {
        self.fetch_displays();
        let mut result: Vec<VRDisplayPtr> = self.displays.values().cloned().collect();
        // Sort by display_id to match service initialization order
        result.sort_by_key(|display| display.borrow().id());
        result
    }
}

impl VRServiceManager {
    fn fetch_displays(&mut self) {
        self.initialize_services();

        for service in &mut self.services {
            if !service.is_available() {
                continue;
            }
            match service.fetch_displays() {
                Ok(displays) => {
                    for display in displays {
                        let key = display.borrow().id();
                        self.displays.entry(key).or_insert(display);
                    }
                }
                // Discovery keeps going; the effect still works without a display.
                Err(msg) => warn!("Unable to get VR displays: {}", msg),
            }
        }
    }
}
