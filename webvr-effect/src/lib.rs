//! A stereo rendering layer between an application's scene/camera and its
//! renderer. While a head-mounted display presents, every render call is
//! split into one draw per eye, each with a camera offset by the display's
//! pose and eye transforms, into two viewports of one backbuffer.

#[macro_use]
extern crate log;
#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde;

pub mod api;
pub mod camera;
pub mod config;
pub mod effect;
pub mod error;
pub mod eye_transform;
pub mod frame_source;
pub mod math;
pub mod projection;
pub mod render_rect;
pub mod renderer;
mod vr_manager;

pub use webvr_effect_api::*;
pub use camera::{Camera, EyeCamera, StereoCameraPair};
pub use config::EffectConfig;
pub use effect::{FrameScheduler, PresentRequest, PresentationState, StereoEffect};
pub use error::EffectError;
pub use frame_source::FrameSource;
pub use projection::ProjectionParams;
pub use renderer::{RenderTarget, Renderer, Scene};
pub use vr_manager::VRServiceManager;
