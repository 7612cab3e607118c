use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering::SeqCst;

static DEVICE_ID_COUNTER: AtomicU32 = AtomicU32::new(0);

// Generates a unique identifier for any VRDisplay
pub fn new_id() -> u32 {
    DEVICE_ID_COUNTER.fetch_add(1, SeqCst)
}

// Returns the current time in milliseconds
pub fn timestamp() -> f64 {
    let now = time::OffsetDateTime::now_utc();
    now.unix_timestamp_nanos() as f64 * 1e-6
}
