#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use self::mock::{MockServiceCreator, MockVRDisplay, MockVRDisplayPtr};
