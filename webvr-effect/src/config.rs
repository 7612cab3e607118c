/// Tunables of a stereo effect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct EffectConfig {
    /// Submit the frame to the display at the end of each stereo render.
    /// When off, the caller submits with `StereoEffect::submit_frame`.
    pub auto_submit_frame: bool,

    /// UV bounds `[x, y, w, h]` of the left eye when the display reports none.
    pub default_left_bounds: [f32; 4],

    /// UV bounds `[x, y, w, h]` of the right eye when the display reports none.
    pub default_right_bounds: [f32; 4],

    /// Scene layer only the left camera sees.
    pub left_layer: u32,

    /// Scene layer only the right camera sees.
    pub right_layer: u32,
}

impl Default for EffectConfig {
    fn default() -> EffectConfig {
        EffectConfig {
            auto_submit_frame: true,
            default_left_bounds: [0.0, 0.0, 0.5, 1.0],
            default_right_bounds: [0.5, 0.0, 0.5, 1.0],
            left_layer: 1,
            right_layer: 2,
        }
    }
}
