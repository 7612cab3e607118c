use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EffectError {
    /// Presentation or frame scheduling was requested with no display bound.
    #[error("No VR hardware found")]
    NoDevice,

    /// Device supplied layer bounds that are not `[x, y, w, h]`.
    #[error("Layer bounds must have 4 components, got {len}")]
    MalformedBounds { len: usize },

    /// The display provides neither frame data nor eye parameters.
    #[error("Display provides neither frame data nor eye parameters")]
    UnsupportedCapability,

    /// The display rejected a present or exit request.
    #[error("Display rejected the request: {0}")]
    Device(String),
}
