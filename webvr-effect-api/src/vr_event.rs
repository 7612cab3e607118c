#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum VRDisplayEvent {
    // Indicates that a VRDisplay has been disconnected.
    // param: display_id
    Disconnect(u32),

    // Indicates that a VRDisplay has begun or ended VR presentation
    // params: display_id, is_presenting
    PresentChange(u32, bool)
}
