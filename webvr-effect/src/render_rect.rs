use crate::error::EffectError;
use crate::{VRLayer, VRViewport};
use euclid::default::Size2D;

/// Checks that device-supplied bounds are a `[x, y, w, h]` quadruple.
pub fn parse_bounds(bounds: &[f32]) -> Result<[f32; 4], EffectError> {
    match *bounds {
        [x, y, w, h] => Ok([x, y, w, h]),
        _ => Err(EffectError::MalformedBounds { len: bounds.len() }),
    }
}

fn bounds_or(bounds: Option<&Vec<f32>>, default: &[f32; 4]) -> [f32; 4] {
    bounds
        .and_then(|bounds| parse_bounds(bounds).ok())
        .unwrap_or(*default)
}

/// Bounds of each eye for this frame: those of the first presented layer,
/// falling back per eye to the defaults when absent or malformed.
pub fn eye_bounds(layers: &[VRLayer], default_left: &[f32; 4], default_right: &[f32; 4]) -> ([f32; 4], [f32; 4]) {
    match layers.first() {
        Some(layer) => (
            bounds_or(layer.left_bounds.as_ref(), default_left),
            bounds_or(layer.right_bounds.as_ref(), default_right),
        ),
        None => (*default_left, *default_right),
    }
}

/// Scales normalized bounds to backbuffer pixels.
/// Edges are rounded rather than extents, so adjacent rects never overlap or leave a gap.
pub fn render_rect(size: Size2D<u32>, bounds: &[f32; 4]) -> VRViewport {
    let (width, height) = (size.width as f64, size.height as f64);
    let edge = |extent: f64, t: f32| (extent * t as f64).round() as i32;

    let x = edge(width, bounds[0]);
    let y = edge(height, bounds[1]);
    VRViewport::new(
        x,
        y,
        edge(width, bounds[0] + bounds[2]) - x,
        edge(height, bounds[1] + bounds[3]) - y,
    )
}

/// Viewport covering the whole backbuffer.
pub fn full_rect(size: Size2D<u32>) -> VRViewport {
    VRViewport::new(0, 0, size.width as i32, size.height as i32)
}
