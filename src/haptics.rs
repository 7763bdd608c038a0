use tracing::info;

/// The wearable vibration motor, reduced to its one operation. The
/// controller fires it and never waits on or inspects the result.
pub trait Haptics {
    fn play_notification(&mut self);
}

/// Desktop stand-in for the vibration motor: logs each pulse.
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn play_notification(&mut self) {
        info!("haptic notification pulse");
    }
}
